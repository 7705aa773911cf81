use serde::{Deserialize, Serialize};

/// A movie genre
/// Genres are referenced by movies; the genre row itself knows nothing about them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Store-assigned identifier (0 until inserted)
    pub id: i64,

    /// Display name
    pub name: String,
}

impl Genre {
    /// Create a transient Genre; the store assigns the id on insert
    pub fn new(name: String) -> Self {
        Self { id: 0, name }
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
