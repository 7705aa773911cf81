// src/dto/movie_dto.rs

use serde::{Deserialize, Serialize};

use crate::domain::{Movie, MAX_RELEASE_YEAR, MIN_RELEASE_YEAR};
use crate::error::{AppError, AppResult};

/// Shortest running time accepted in a create payload, in minutes.
/// Stricter than the entity floor of 1 minute.
pub const MIN_DTO_DURATION: i32 = 60;

/// Movie as seen by clients
///
/// Outbound, `actors`/`genres` carry names and are `None` (omitted from the
/// JSON) when the movie has no such associations; the matching id list is
/// `None` as well. Inbound, `actorIds`/`genreIds` distinguish "absent" (leave
/// the association alone) from "present and empty" (clear it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_ids: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

impl MovieDto {
    /// Field rules for a create payload; every violation is reported
    pub fn validate(&self) -> AppResult<()> {
        let mut violations = Vec::new();

        match self.title.as_deref() {
            None => {
                violations.push("Title can not be null".to_string());
                violations.push("Title can not be blank".to_string());
            }
            Some(t) if t.trim().is_empty() => {
                violations.push("Title can not be blank".to_string());
            }
            Some(_) => {}
        }

        match self.release_year {
            None => violations.push("Release year can not be null".to_string()),
            Some(y) if y < MIN_RELEASE_YEAR => violations.push(format!(
                "Release year can not be earlier than {}",
                MIN_RELEASE_YEAR
            )),
            Some(y) if y > MAX_RELEASE_YEAR => violations.push(format!(
                "Release year can not be later than {}",
                MAX_RELEASE_YEAR
            )),
            Some(_) => {}
        }

        match self.duration {
            None => violations.push("Duration can not be null".to_string()),
            Some(d) if d < MIN_DTO_DURATION => violations.push(format!(
                "Duration must be greater than or equal to {}",
                MIN_DTO_DURATION
            )),
            Some(_) => {}
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::field_violations(&violations))
        }
    }

    /// Scalar fields only; associations are resolved by the service from the id lists
    pub fn to_entity(&self) -> AppResult<Movie> {
        let (title, release_year, duration) =
            match (self.title.clone(), self.release_year, self.duration) {
                (Some(t), Some(y), Some(d)) => (t, y, d),
                _ => {
                    return Err(AppError::invalid_input(
                        "Movie fields cannot be null before saving.",
                    ))
                }
            };

        let mut movie = Movie::new(title, release_year, duration);
        if let Some(id) = self.id {
            movie.id = id;
        }
        Ok(movie)
    }
}

impl From<&Movie> for MovieDto {
    fn from(movie: &Movie) -> Self {
        let (actors, actor_ids) = if movie.actors.is_empty() {
            (None, None)
        } else {
            (
                Some(movie.actors.iter().map(|a| a.name.clone()).collect()),
                Some(movie.actor_ids()),
            )
        };

        let (genres, genre_ids) = if movie.genres.is_empty() {
            (None, None)
        } else {
            (
                Some(movie.genres.iter().map(|g| g.name.clone()).collect()),
                Some(movie.genre_ids()),
            )
        };

        Self {
            id: Some(movie.id),
            title: Some(movie.title.clone()),
            release_year: Some(movie.release_year),
            duration: Some(movie.duration),
            actor_ids,
            genre_ids,
            actors,
            genres,
        }
    }
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        MovieDto::from(&movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Actor, Genre};

    fn valid_dto() -> MovieDto {
        MovieDto {
            title: Some("Nova".to_string()),
            release_year: Some(1999),
            duration: Some(90),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_all_violations_are_reported() {
        let err = MovieDto::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Title can not be null; Title can not be blank; \
             Release year can not be null; Duration can not be null; "
        );
    }

    #[test]
    fn test_dto_duration_floor_is_sixty() {
        let dto = MovieDto { duration: Some(59), ..valid_dto() };
        let err = dto.validate().unwrap_err();
        assert!(err.to_string().contains("Duration must be greater than or equal to 60"));

        let dto = MovieDto { duration: Some(60), ..valid_dto() };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_year_out_of_range() {
        let dto = MovieDto { release_year: Some(2025), ..valid_dto() };
        assert!(dto.validate().unwrap_err().to_string().contains("later than 2024"));
    }

    #[test]
    fn test_outbound_without_associations_omits_lists() {
        let mut movie = Movie::new("Nova".to_string(), 1999, 90);
        movie.id = 3;

        let dto = MovieDto::from(&movie);
        assert_eq!(dto.actors, None);
        assert_eq!(dto.actor_ids, None);
        assert_eq!(dto.genres, None);
        assert_eq!(dto.genre_ids, None);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "title": "Nova", "releaseYear": 1999, "duration": 90})
        );
    }

    #[test]
    fn test_round_trip_preserves_fields_and_ids() {
        let mut movie = Movie::new("Nova".to_string(), 1999, 90);
        movie.id = 5;
        movie.set_actors(vec![Actor {
            id: 1,
            name: "Jane Doe".to_string(),
            birth_date: "1980-05-01".to_string(),
        }]);
        movie.set_genres(vec![Genre { id: 2, name: "Drama".to_string() }]);

        let dto = MovieDto::from(&movie);
        assert_eq!(dto.actors, Some(vec!["Jane Doe".to_string()]));
        assert_eq!(dto.actor_ids, Some(vec![1]));
        assert_eq!(dto.genre_ids, Some(vec![2]));

        let back = dto.to_entity().unwrap();
        assert_eq!(back.id, movie.id);
        assert_eq!(back.title, movie.title);
        assert_eq!(back.release_year, movie.release_year);
        assert_eq!(back.duration, movie.duration);
        assert_eq!(dto.actor_ids.unwrap(), movie.actor_ids());
        assert_eq!(dto.genre_ids.unwrap(), movie.genre_ids());
    }

    #[test]
    fn test_inbound_absent_vs_empty_ids() {
        let absent: MovieDto = serde_json::from_str(r#"{"title": "Nova"}"#).unwrap();
        assert_eq!(absent.actor_ids, None);

        let empty: MovieDto = serde_json::from_str(r#"{"actorIds": []}"#).unwrap();
        assert_eq!(empty.actor_ids, Some(vec![]));
    }
}
