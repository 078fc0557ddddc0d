//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella (o a una proiezione di una join).

pub mod director;
pub mod genre;
pub mod movie;

// Re-exports per facilitare l'import
pub use director::Director;
pub use genre::{Genre, GenreTitle};
pub use movie::Movie;
