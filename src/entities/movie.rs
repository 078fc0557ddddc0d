//! Movie entity - Entità film

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}
