//! Movie DTOs - Data Transfer Objects per film

use crate::entities::Movie;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovieDTO {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

impl From<Movie> for MovieDTO {
    fn from(value: Movie) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            trailer: value.trailer,
            year: value.year,
            rating: value.rating,
            genre_id: value.genre_id,
            director_id: value.director_id,
        }
    }
}

/// DTO per creare un nuovo film (senza id)
///
/// Campi assenti nel body diventano NULL; campi sconosciuti vengono ignorati.
/// Le chiavi esterne non vengono verificate.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct CreateMovieDTO {
    #[validate(length(max = 255, message = "title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 255, message = "trailer must be at most 255 characters"))]
    pub trailer: Option<String>,

    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

/// PUT sostituisce l'intero film: stesso insieme di campi della creazione,
/// i campi assenti sovrascrivono il valore salvato con NULL.
pub type UpdateMovieDTO = CreateMovieDTO;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_movie_dto_serializes_every_field_flat() {
        let dto = MovieDTO::from(Movie {
            id: 3,
            title: Some("Heat".to_string()),
            description: None,
            trailer: Some("https://example.com/heat".to_string()),
            year: Some(1995),
            rating: Some(8.3),
            genre_id: Some(1),
            director_id: None,
        });

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": 3,
                "title": "Heat",
                "description": null,
                "trailer": "https://example.com/heat",
                "year": 1995,
                "rating": 8.3,
                "genre_id": 1,
                "director_id": null
            })
        );
    }

    #[test]
    fn test_create_dto_ignores_unknown_and_defaults_missing_fields() {
        let dto: CreateMovieDTO = serde_json::from_value(json!({
            "id": 99,
            "title": "Alien",
            "year": 1979,
            "poster": "ignored"
        }))
        .unwrap();

        assert_eq!(dto.title.as_deref(), Some("Alien"));
        assert_eq!(dto.year, Some(1979));
        assert!(dto.description.is_none());
        assert!(dto.rating.is_none());
        assert!(dto.genre_id.is_none());
    }

    #[test]
    fn test_create_dto_rejects_wrong_types() {
        let result = serde_json::from_value::<CreateMovieDTO>(json!({ "year": "nineteen" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_dto_accepts_integer_rating() {
        let dto: CreateMovieDTO = serde_json::from_value(json!({ "rating": 7 })).unwrap();
        assert_eq!(dto.rating, Some(7.0));
    }

    #[test]
    fn test_create_dto_validates_column_width() {
        let dto = CreateMovieDTO {
            title: Some("x".repeat(256)),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = CreateMovieDTO {
            title: Some("x".repeat(255)),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
