// src/dto/actor_dto.rs

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::Actor;
use crate::error::{AppError, AppResult};
use crate::util::parse_birth_date;

/// Actor as seen by clients
///
/// `birthDate` travels as a `yyyy-MM-dd` string. It is parsed on demand so a
/// malformed value surfaces as its own error, ahead of any field violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl ActorDto {
    /// `Ok(None)` when no date was sent
    pub fn parsed_birth_date(&self) -> AppResult<Option<NaiveDate>> {
        self.birth_date.as_deref().map(parse_birth_date).transpose()
    }

    pub fn validate(&self) -> AppResult<()> {
        let birth_date = self.parsed_birth_date()?;
        let mut violations = Vec::new();

        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            violations.push("Name can not be blank".to_string());
        }

        match birth_date {
            None => violations.push("Birthdate can not be null".to_string()),
            Some(date) if date > Local::now().date_naive() => {
                violations.push("Birth date must be in the past or present.".to_string())
            }
            Some(_) => {}
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::field_violations(&violations))
        }
    }
}

impl From<&Actor> for ActorDto {
    fn from(actor: &Actor) -> Self {
        Self {
            id: Some(actor.id),
            name: Some(actor.name.clone()),
            birth_date: Some(actor.birth_date.clone()),
        }
    }
}

impl From<Actor> for ActorDto {
    fn from(actor: Actor) -> Self {
        ActorDto::from(&actor)
    }
}
