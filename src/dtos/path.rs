//! Path DTOs - Parametri estratti dal path delle richieste
//!
//! Sotto `/movies/{selector}` convivono quattro forme: `page=<n>`, `director_id=<id>`,
//! `genre_id=<id>` e `<id>`. Il segmento viene interpretato qui invece di registrare
//! una route per ogni prefisso.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Cosa chiede il segmento dopo `/movies/`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum MovieSelector {
    /// `page=<n>`, 1-indexed
    Page(i64),
    /// `director_id=<id>`
    Director(i64),
    /// `genre_id=<id>`
    Genre(i64),
    /// `<id>`
    Id(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorError(String);

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for SelectorError {}

fn parse_number(raw: &str, what: &str) -> Result<i64, SelectorError> {
    raw.parse::<i64>()
        .map_err(|_| SelectorError(format!("{what} must be an integer, got '{raw}'")))
}

impl FromStr for MovieSelector {
    type Err = SelectorError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        if let Some(raw) = segment.strip_prefix("page=") {
            let page = parse_number(raw, "page")?;
            if page < 1 {
                return Err(SelectorError(format!("page must be >= 1, got {page}")));
            }
            return Ok(Self::Page(page));
        }
        if let Some(raw) = segment.strip_prefix("director_id=") {
            return parse_number(raw, "director_id").map(Self::Director);
        }
        if let Some(raw) = segment.strip_prefix("genre_id=") {
            return parse_number(raw, "genre_id").map(Self::Genre);
        }
        parse_number(segment, "movie id").map(Self::Id)
    }
}

impl TryFrom<String> for MovieSelector {
    type Error = SelectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_form() {
        assert_eq!("page=3".parse(), Ok(MovieSelector::Page(3)));
        assert_eq!("director_id=7".parse(), Ok(MovieSelector::Director(7)));
        assert_eq!("genre_id=2".parse(), Ok(MovieSelector::Genre(2)));
        assert_eq!("42".parse(), Ok(MovieSelector::Id(42)));
    }

    #[test]
    fn test_rejects_pages_below_one() {
        assert!("page=0".parse::<MovieSelector>().is_err());
        assert!("page=-2".parse::<MovieSelector>().is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("page=".parse::<MovieSelector>().is_err());
        assert!("page=two".parse::<MovieSelector>().is_err());
        assert!("title=Heat".parse::<MovieSelector>().is_err());
        assert!("abc".parse::<MovieSelector>().is_err());
    }

    #[test]
    fn test_error_names_the_offending_value() {
        let err = "director_id=x".parse::<MovieSelector>().unwrap_err();
        assert_eq!(err.to_string(), "director_id must be an integer, got 'x'");
    }

    #[test]
    fn test_deserializes_through_try_from() {
        let selector: MovieSelector = serde_json::from_str("\"genre_id=4\"").unwrap();
        assert_eq!(selector, MovieSelector::Genre(4));
        assert!(serde_json::from_str::<MovieSelector>("\"page=0\"").is_err());
    }
}
