//! DirectorRepository - Repository per la gestione dei registi

use super::{Create, List, Read};
use crate::dtos::CreateDirectorDTO;
use crate::entities::Director;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// DIRECTOR REPOSITORY
pub struct DirectorRepository {
    connection_pool: SqlitePool,
}

impl DirectorRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Director, CreateDirectorDTO> for DirectorRepository {
    #[instrument(skip(self, data), fields(name = ?data.name))]
    async fn create(&self, data: &CreateDirectorDTO) -> Result<Director, Error> {
        debug!("Creating new director");
        let result = sqlx::query("INSERT INTO director (name) VALUES (?)")
            .bind(&data.name)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();

        info!("Director created with id {}", new_id);

        Ok(Director {
            id: new_id,
            name: data.name.clone(),
        })
    }
}

impl Read<Director, i64> for DirectorRepository {
    #[instrument(skip(self), fields(director_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Director>, Error> {
        debug!("Reading director by id");
        let director =
            sqlx::query_as::<_, Director>("SELECT id, name FROM director WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.connection_pool)
                .await?;

        Ok(director)
    }
}

impl List<Director> for DirectorRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Director>, Error> {
        debug!("Listing directors");
        let directors = sqlx::query_as::<_, Director>("SELECT id, name FROM director ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(directors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::test_pool;

    fn named(name: &str) -> CreateDirectorDTO {
        CreateDirectorDTO {
            name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_read() -> sqlx::Result<()> {
        let repo = DirectorRepository::new(test_pool().await);

        let created = repo.create(&named("Michael Mann")).await?;

        assert!(repo.read(&(created.id + 1)).await?.is_none());
        assert_eq!(repo.read(&created.id).await?, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() -> sqlx::Result<()> {
        let repo = DirectorRepository::new(test_pool().await);

        repo.create(&named("Kubrick")).await?;
        repo.create(&named("Kurosawa")).await?;
        repo.create(&CreateDirectorDTO::default()).await?;

        let names: Vec<Option<String>> = repo.list().await?.into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![Some("Kubrick".to_string()), Some("Kurosawa".to_string()), None]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_list_empty_table() -> sqlx::Result<()> {
        let repo = DirectorRepository::new(test_pool().await);
        assert!(repo.list().await?.is_empty());
        Ok(())
    }
}
