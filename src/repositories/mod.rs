//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query usano `sqlx::query_as::<_, T>` con `FromRow`, verificate a runtime:
//! lo schema viene creato all'avvio quindi non esiste un database da interrogare
//! in fase di compilazione.
//!
//! Ogni operazione è una singola istruzione SQL in auto-commit.

// Dichiarazione dei sotto-moduli
pub mod director;
pub mod genre;
pub mod movie;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, List, Read, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use director::DirectorRepository;
pub use genre::GenreRepository;
pub use movie::MovieRepository;
