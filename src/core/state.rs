//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene i repository, ognuno con un clone del pool di connessioni.

use crate::repositories::{DirectorRepository, GenreRepository, MovieRepository};
use sqlx::SqlitePool;

/// Stato condiviso tra tutte le route
pub struct AppState {
    /// Repository per la gestione dei film
    pub movie: MovieRepository,

    /// Repository per la gestione dei registi
    pub director: DirectorRepository,

    /// Repository per la gestione dei generi
    pub genre: GenreRepository,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            movie: MovieRepository::new(pool.clone()),
            director: DirectorRepository::new(pool.clone()),
            genre: GenreRepository::new(pool),
        }
    }
}
