//! MovieRepository - Repository per la gestione dei film

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreateMovieDTO, UpdateMovieDTO};
use crate::entities::Movie;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// MOVIE REPOSITORY
pub struct MovieRepository {
    connection_pool: SqlitePool,
}

impl MovieRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// One page of movies that have an existing genre, ordered by id.
    ///
    /// Movies with a NULL or dangling `genre_id` drop out of the inner join and are never listed.
    #[instrument(skip(self))]
    pub async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Movie>, Error> {
        debug!("Listing movies page");
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT
                m.id,
                m.title,
                m.description,
                m.trailer,
                m.year,
                m.rating,
                m.genre_id,
                m.director_id
            FROM movie m
            INNER JOIN genre g ON g.id = m.genre_id
            ORDER BY m.id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} movies", movies.len());
        Ok(movies)
    }

    /// All movies whose director_id equals `director_id`
    #[instrument(skip(self))]
    pub async fn find_many_by_director_id(&self, director_id: &i64) -> Result<Vec<Movie>, Error> {
        debug!("Finding movies by director");
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, description, trailer, year, rating, genre_id, director_id
            FROM movie
            WHERE director_id = ?
            ORDER BY id
            "#,
        )
        .bind(director_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(movies)
    }

    /// All movies whose genre_id equals `genre_id`
    #[instrument(skip(self))]
    pub async fn find_many_by_genre_id(&self, genre_id: &i64) -> Result<Vec<Movie>, Error> {
        debug!("Finding movies by genre");
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, description, trailer, year, rating, genre_id, director_id
            FROM movie
            WHERE genre_id = ?
            ORDER BY id
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(movies)
    }
}

impl Create<Movie, CreateMovieDTO> for MovieRepository {
    #[instrument(skip(self, data), fields(title = ?data.title))]
    async fn create(&self, data: &CreateMovieDTO) -> Result<Movie, Error> {
        debug!("Creating new movie");
        let result = sqlx::query(
            r#"
            INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.trailer)
        .bind(data.year)
        .bind(data.rating)
        .bind(data.genre_id)
        .bind(data.director_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid();

        info!("Movie created with id {}", new_id);

        Ok(Movie {
            id: new_id,
            title: data.title.clone(),
            description: data.description.clone(),
            trailer: data.trailer.clone(),
            year: data.year,
            rating: data.rating,
            genre_id: data.genre_id,
            director_id: data.director_id,
        })
    }
}

impl Read<Movie, i64> for MovieRepository {
    #[instrument(skip(self), fields(movie_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Movie>, Error> {
        debug!("Reading movie by id");
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, description, trailer, year, rating, genre_id, director_id
            FROM movie
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        if movie.is_some() {
            debug!("Movie found");
        } else {
            debug!("Movie not found");
        }

        Ok(movie)
    }
}

impl Update<Movie, UpdateMovieDTO, i64> for MovieRepository {
    /// Full replace: all seven mutable columns are overwritten, `None` becomes NULL.
    #[instrument(skip(self, data), fields(movie_id = %id))]
    async fn update(&self, id: &i64, data: &UpdateMovieDTO) -> Result<Movie, Error> {
        debug!("Updating movie");
        let result = sqlx::query(
            r#"
            UPDATE movie SET
                title = ?,
                description = ?,
                trailer = ?,
                year = ?,
                rating = ?,
                genre_id = ?,
                director_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.trailer)
        .bind(data.year)
        .bind(data.rating)
        .bind(data.genre_id)
        .bind(data.director_id)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!("No movie to update");
            return Err(Error::RowNotFound);
        }

        info!("Movie updated successfully");

        Ok(Movie {
            id: *id,
            title: data.title.clone(),
            description: data.description.clone(),
            trailer: data.trailer.clone(),
            year: data.year,
            rating: data.rating,
            genre_id: data.genre_id,
            director_id: data.director_id,
        })
    }
}

impl Delete<i64> for MovieRepository {
    #[instrument(skip(self), fields(movie_id = %id))]
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        debug!("Deleting movie");
        let result = sqlx::query("DELETE FROM movie WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!("No movie to delete");
            return Err(Error::RowNotFound);
        }

        info!("Movie deleted successfully");
        Ok(())
    }
}
