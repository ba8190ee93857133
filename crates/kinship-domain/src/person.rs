//! Person module - the individuals a family tree is drawn from

use crate::{BirthYear, HouseId};
use std::fmt;

/// Stable identifier for a person, supplied by the caller
///
/// Identifiers are opaque strings; ordering is lexicographic and is only used
/// to break ties deterministically.
///
/// # Examples
///
/// ```
/// use kinship_domain::PersonId;
///
/// let id = PersonId::from("aegon-i");
/// assert_eq!(id.as_str(), "aegon-i");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(String);

impl PersonId {
    /// Create a new PersonId
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person record
///
/// Owned by the application's persistence layer. The engine treats people as
/// read-only for the duration of one computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Display name (output only, never used by the engine)
    pub name: Option<String>,

    /// House affiliation, if any
    pub house_id: Option<HouseId>,

    /// Parsed birth-year token
    pub date_of_birth: BirthYear,

    /// Raw death-year token, if recorded
    pub date_of_death: Option<String>,
}

impl Person {
    /// Create a new person with a birth token and no death record
    pub fn new(id: impl Into<PersonId>, house_id: Option<HouseId>, date_of_birth: &str) -> Self {
        Self {
            id: id.into(),
            name: None,
            house_id,
            date_of_birth: BirthYear::parse(date_of_birth),
            date_of_death: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the death-year token
    pub fn with_death(mut self, date_of_death: impl Into<String>) -> Self {
        self.date_of_death = Some(date_of_death.into());
        self
    }

    /// Check whether this person belongs to the given house
    pub fn belongs_to(&self, house: &HouseId) -> bool {
        self.house_id.as_ref() == Some(house)
    }

    /// Name for display, falling back to the identifier
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}
