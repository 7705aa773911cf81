// src/dto/genre_dto.rs

use serde::{Deserialize, Serialize};

use crate::domain::Genre;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GenreDto {
    /// Checked on create and on PATCH alike
    pub fn validate(&self) -> AppResult<()> {
        let violations: Vec<String> = match self.name.as_deref() {
            None => vec![
                "Name can not be null".to_string(),
                "Name can not be blank".to_string(),
            ],
            Some(n) if n.trim().is_empty() => vec!["Name can not be blank".to_string()],
            Some(_) => Vec::new(),
        };

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::field_violations(&violations))
        }
    }
}

impl From<&Genre> for GenreDto {
    fn from(genre: &Genre) -> Self {
        Self {
            id: Some(genre.id),
            name: Some(genre.name.clone()),
        }
    }
}

impl From<Genre> for GenreDto {
    fn from(genre: Genre) -> Self {
        GenreDto::from(&genre)
    }
}
