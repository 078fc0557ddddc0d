//! GenreRepository - Repository per la gestione dei generi

use super::{Create, List};
use crate::dtos::CreateGenreDTO;
use crate::entities::{Genre, GenreTitle};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// GENRE REPOSITORY
pub struct GenreRepository {
    connection_pool: SqlitePool,
}

impl GenreRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// (genre name, movie title) for every movie of the genre; empty when the genre has none
    /// or does not exist.
    #[instrument(skip(self))]
    pub async fn find_movie_titles(&self, genre_id: &i64) -> Result<Vec<GenreTitle>, Error> {
        debug!("Finding movie titles for genre");
        let titles = sqlx::query_as::<_, GenreTitle>(
            r#"
            SELECT
                g.name AS genre,
                m.title AS title
            FROM genre g
            INNER JOIN movie m ON m.genre_id = g.id
            WHERE g.id = ?
            ORDER BY m.id
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} titles", titles.len());
        Ok(titles)
    }
}

impl Create<Genre, CreateGenreDTO> for GenreRepository {
    #[instrument(skip(self, data), fields(name = ?data.name))]
    async fn create(&self, data: &CreateGenreDTO) -> Result<Genre, Error> {
        debug!("Creating new genre");
        let result = sqlx::query("INSERT INTO genre (name) VALUES (?)")
            .bind(&data.name)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();

        info!("Genre created with id {}", new_id);

        Ok(Genre {
            id: new_id,
            name: data.name.clone(),
        })
    }
}

impl List<Genre> for GenreRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Genre>, Error> {
        debug!("Listing genres");
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genre ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(genres)
    }
}
