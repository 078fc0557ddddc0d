//! Director entity - Entità regista

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Director {
    pub id: i64,
    pub name: Option<String>,
}
