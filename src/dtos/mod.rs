//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod director;
pub mod genre;
pub mod movie;
pub mod path;

// Re-exports per facilitare l'import
pub use director::{CreateDirectorDTO, DirectorDTO};
pub use genre::{CreateGenreDTO, GenreDTO, GenreTitleDTO};
pub use movie::{CreateMovieDTO, MovieDTO, UpdateMovieDTO};
pub use path::MovieSelector;
