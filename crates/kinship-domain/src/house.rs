//! House module - lineage groupings and cadet branches

use std::fmt;

/// Stable identifier for a house, supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HouseId(String);

impl HouseId {
    /// Create a new HouseId
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HouseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for HouseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for HouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A house record
///
/// Houses form a forest through `parent_house_id`: a house with a parent is a
/// cadet house of that parent. The parent relation is assumed acyclic, but
/// nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    /// Unique identifier
    pub id: HouseId,

    /// Display name (output only)
    pub name: Option<String>,

    /// Parent house, when this house is a cadet branch
    pub parent_house_id: Option<HouseId>,
}

impl House {
    /// Create a main (non-cadet) house
    pub fn new(id: impl Into<HouseId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            parent_house_id: None,
        }
    }

    /// Create a cadet house of `parent`
    pub fn cadet_of(id: impl Into<HouseId>, parent: impl Into<HouseId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            parent_house_id: Some(parent.into()),
        }
    }

    /// Check if this house is a direct cadet of `parent`
    pub fn is_cadet_of(&self, parent: &HouseId) -> bool {
        self.parent_house_id.as_ref() == Some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadet_relationship() {
        let main = House::new("lannister");
        let cadet = House::cadet_of("lannister-of-lannisport", "lannister");

        assert!(cadet.is_cadet_of(&main.id));
        assert!(!main.is_cadet_of(&cadet.id));
        assert!(main.parent_house_id.is_none());
    }
}
