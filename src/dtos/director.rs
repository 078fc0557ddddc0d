//! Director DTOs - Data Transfer Objects per registi

use crate::entities::Director;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DirectorDTO {
    pub id: i64,
    pub name: Option<String>,
}

impl From<Director> for DirectorDTO {
    fn from(value: Director) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// DTO per creare un nuovo regista (senza id)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct CreateDirectorDTO {
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: Option<String>,
}
