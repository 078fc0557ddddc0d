//! Genre entity - Entità genere e proiezione genere/titolo

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Genre {
    pub id: i64,
    pub name: Option<String>,
}

/// Una riga della join genre -> movie: nome del genere e titolo del film
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct GenreTitle {
    pub genre: Option<String>,
    pub title: Option<String>,
}
