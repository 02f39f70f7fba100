//! Core data models for reel.

use serde::{Deserialize, Serialize};

/// A movie record.
///
/// Every content field is free-form text and optional; the core enforces
/// no shape beyond that. `id` is assigned by the store on first insert
/// and never changes for the lifetime of the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned opaque identifier. `None` until first persisted.
    pub id: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_none() {
        let movie: Movie = serde_json::from_str(r#"{"title": "The Shining"}"#).unwrap();
        assert_eq!(movie.title.as_deref(), Some("The Shining"));
        assert_eq!(movie.id, None);
        assert_eq!(movie.year, None);
        assert_eq!(movie.director, None);
    }

    #[test]
    fn null_id_deserializes_to_none() {
        let movie: Movie =
            serde_json::from_str(r#"{"id": null, "title": "2001: A Space Odyssey"}"#).unwrap();
        assert_eq!(movie.id, None);
    }

    #[test]
    fn serializes_every_field() {
        let movie = Movie {
            id: Some("0192d1f8".to_string()),
            title: Some("The Shining".to_string()),
            ..Movie::default()
        };
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["id"], "0192d1f8");
        assert_eq!(value["title"], "The Shining");
        // Unset fields stay on the wire as explicit nulls.
        assert!(value["year"].is_null());
        assert!(value["director"].is_null());
    }

    #[test]
    fn round_trips_through_json() {
        let movie = Movie {
            id: Some("m-1".to_string()),
            title: Some("Alien".to_string()),
            year: Some("1979".to_string()),
            rated: Some("R".to_string()),
            runtime: Some("117 min".to_string()),
            genre: Some("Horror, Sci-Fi".to_string()),
            director: Some("Ridley Scott".to_string()),
        };
        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movie);
    }
}
