use serde::{Deserialize, Serialize};

use crate::domain::actor::Actor;
use crate::domain::genre::Genre;

/// A movie in the catalog
///
/// Movie is the owning side of both many-to-many associations: the actor and
/// genre lists here are what the join tables mirror. Actors and genres only
/// see their movies through the store's reverse lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Store-assigned identifier (0 until inserted)
    pub id: i64,

    pub title: String,

    /// Year of release (1880..=2024)
    pub release_year: i32,

    /// Running time in minutes
    pub duration: i32,

    /// Associated genres, in association order
    pub genres: Vec<Genre>,

    /// Associated actors, in association order
    pub actors: Vec<Actor>,
}

impl Movie {
    /// Create a transient Movie with no associations
    pub fn new(title: String, release_year: i32, duration: i32) -> Self {
        Self {
            id: 0,
            title,
            release_year,
            duration,
            genres: Vec::new(),
            actors: Vec::new(),
        }
    }

    /// Overwrite only the scalar fields that are provided
    pub fn apply_update(
        &mut self,
        title: Option<String>,
        release_year: Option<i32>,
        duration: Option<i32>,
    ) {
        if let Some(t) = title {
            self.title = t;
        }
        if let Some(y) = release_year {
            self.release_year = y;
        }
        if let Some(d) = duration {
            self.duration = d;
        }
    }

    pub fn set_actors(&mut self, actors: Vec<Actor>) {
        self.actors = actors;
    }

    pub fn set_genres(&mut self, genres: Vec<Genre>) {
        self.genres = genres;
    }

    /// Drop an actor from the association list. Returns whether it was present.
    pub fn remove_actor(&mut self, actor_id: i64) -> bool {
        let before = self.actors.len();
        self.actors.retain(|a| a.id != actor_id);
        self.actors.len() != before
    }

    /// Drop a genre from the association list. Returns whether it was present.
    pub fn remove_genre(&mut self, genre_id: i64) -> bool {
        let before = self.genres.len();
        self.genres.retain(|g| g.id != genre_id);
        self.genres.len() != before
    }

    pub fn actor_ids(&self) -> Vec<i64> {
        self.actors.iter().map(|a| a.id).collect()
    }

    pub fn genre_ids(&self) -> Vec<i64> {
        self.genres.iter().map(|g| g.id).collect()
    }

    pub fn has_associations(&self) -> bool {
        !self.actors.is_empty() || !self.genres.is_empty()
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.release_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(id: i64, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_apply_update_keeps_absent_fields() {
        let mut movie = Movie::new("Nova".to_string(), 1999, 90);
        movie.apply_update(Some("Nova Redux".to_string()), None, None);

        assert_eq!(movie.title, "Nova Redux");
        assert_eq!(movie.release_year, 1999);
        assert_eq!(movie.duration, 90);
    }

    #[test]
    fn test_remove_genre() {
        let mut movie = Movie::new("Nova".to_string(), 1999, 90);
        movie.set_genres(vec![genre(1, "Drama"), genre(2, "Sci-Fi")]);

        assert!(movie.remove_genre(2));
        assert!(!movie.remove_genre(2));
        assert_eq!(movie.genre_ids(), vec![1]);
    }

    #[test]
    fn test_new_movie_is_transient() {
        let movie = Movie::new("Nova".to_string(), 1999, 90);
        assert_eq!(movie.id, 0);
        assert!(!movie.has_associations());
    }
}
