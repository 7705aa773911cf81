use super::entity::Actor;
use crate::domain::{DomainError, DomainResult};
use chrono::Local;

/// Validates all Actor invariants
pub fn validate_actor(actor: &Actor) -> DomainResult<()> {
    validate_name(&actor.name)?;
    validate_birth_date(actor)?;
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Name can not be blank".to_string(),
        ));
    }
    Ok(())
}

/// The stored string must be a real calendar date, no later than today
fn validate_birth_date(actor: &Actor) -> DomainResult<()> {
    let birth_date = actor.parsed_birth_date().map_err(|_| {
        DomainError::InvariantViolation(format!(
            "Birth date '{}' is not an ISO-8601 date",
            actor.birth_date
        ))
    })?;

    if birth_date > Local::now().date_naive() {
        return Err(DomainError::InvariantViolation(
            "Birth date must be in the past or present.".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for Actor domain:
///
/// 1. Name cannot be blank
/// 2. Birth date is stored as yyyy-MM-dd and is a valid calendar date
/// 3. Birth date is never in the future
/// 4. (name, birth date) pairs are unique; checked by the service at creation
/// 5. The movies of an actor are derived from the movie side of the association

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_valid_actor() {
        let date = NaiveDate::from_ymd_opt(1980, 5, 1).unwrap();
        let actor = Actor::new("Jane Doe".to_string(), date);
        assert_eq!(actor.birth_date, "1980-05-01");
        assert!(validate_actor(&actor).is_ok());
    }

    #[test]
    fn test_blank_name_fails() {
        let date = NaiveDate::from_ymd_opt(1980, 5, 1).unwrap();
        let actor = Actor::new("   ".to_string(), date);
        assert!(validate_actor(&actor).is_err());
    }

    #[test]
    fn test_future_birth_date_fails() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let actor = Actor::new("Jane Doe".to_string(), tomorrow);
        assert!(validate_actor(&actor).is_err());
    }

    #[test]
    fn test_garbage_birth_date_fails() {
        let mut actor = Actor::new(
            "Jane Doe".to_string(),
            NaiveDate::from_ymd_opt(1980, 5, 1).unwrap(),
        );
        actor.birth_date = "1980-13-01".to_string();
        assert!(validate_actor(&actor).is_err());
    }
}
