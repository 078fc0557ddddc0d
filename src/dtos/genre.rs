//! Genre DTOs - Data Transfer Objects per generi

use crate::entities::{Genre, GenreTitle};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenreDTO {
    pub id: i64,
    pub name: Option<String>,
}

impl From<Genre> for GenreDTO {
    fn from(value: Genre) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// DTO per creare un nuovo genere (senza id)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct CreateGenreDTO {
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: Option<String>,
}

/// Coppia nome genere / titolo film restituita da GET /genres/{id}
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenreTitleDTO {
    pub genre: Option<String>,
    pub title: Option<String>,
}

impl From<GenreTitle> for GenreTitleDTO {
    fn from(value: GenreTitle) -> Self {
        Self {
            genre: value.genre,
            title: value.title,
        }
    }
}
