use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ISO-8601 calendar date layout used for stored birth dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// An actor appearing in movies
///
/// The birth date is kept as its canonical ISO-8601 string (`yyyy-MM-dd`);
/// it is parsed back into a calendar date at the DTO boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Store-assigned identifier (0 until inserted)
    pub id: i64,

    /// Full name
    pub name: String,

    /// Birth date, ISO-8601
    pub birth_date: String,
}

impl Actor {
    /// Create a transient Actor; the store assigns the id on insert
    pub fn new(name: String, birth_date: NaiveDate) -> Self {
        Self {
            id: 0,
            name,
            birth_date: birth_date.format(ISO_DATE_FORMAT).to_string(),
        }
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// Store the date in canonical ISO form
    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = birth_date.format(ISO_DATE_FORMAT).to_string();
    }

    /// Parse the stored ISO string back into a date
    pub fn parsed_birth_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(&self.birth_date, ISO_DATE_FORMAT)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.birth_date)
    }
}
