//! Relationship module (pairwise edges between people only)

use crate::PersonId;

/// Type of relationship between two people
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    /// Marriage or partnership; undirected
    Spousal,

    /// `person1` is the child, `person2` the parent
    ParentChild,

    /// Known but unconnected ancestry: `person1` descends from `person2`
    /// through generations that are not recorded
    LineageGap,
}

impl RelationshipType {
    /// Get the wire name of the relationship type
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Spousal => "spousal",
            RelationshipType::ParentChild => "parent-child",
            RelationshipType::LineageGap => "lineage-gap",
        }
    }

    /// Parse a relationship type from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spousal" => Some(RelationshipType::Spousal),
            "parent-child" => Some(RelationshipType::ParentChild),
            "lineage-gap" => Some(RelationshipType::LineageGap),
            _ => None,
        }
    }
}

/// A pairwise relationship between two people
///
/// Endpoints are not validated against any person list; a relationship that
/// names an unknown person simply never becomes a visible connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship {
    /// First endpoint (child / descendant side for directed types)
    pub person1_id: PersonId,

    /// Second endpoint (parent / ancestor side for directed types)
    pub person2_id: PersonId,

    /// Type of relationship
    pub relationship_type: RelationshipType,
}

impl Relationship {
    /// Create a new relationship
    pub fn new(
        person1_id: impl Into<PersonId>,
        person2_id: impl Into<PersonId>,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            person1_id: person1_id.into(),
            person2_id: person2_id.into(),
            relationship_type,
        }
    }

    /// Spousal edge between `a` and `b`
    pub fn spousal(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self::new(a, b, RelationshipType::Spousal)
    }

    /// Parent-child edge from `child` up to `parent`
    pub fn parent_child(child: impl Into<PersonId>, parent: impl Into<PersonId>) -> Self {
        Self::new(child, parent, RelationshipType::ParentChild)
    }

    /// Lineage-gap edge from `descendant` up to `ancestor`
    pub fn lineage_gap(descendant: impl Into<PersonId>, ancestor: impl Into<PersonId>) -> Self {
        Self::new(descendant, ancestor, RelationshipType::LineageGap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        for kind in [
            RelationshipType::Spousal,
            RelationshipType::ParentChild,
            RelationshipType::LineageGap,
        ] {
            assert_eq!(RelationshipType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(RelationshipType::parse("Parent-Child"), Some(RelationshipType::ParentChild));
        assert_eq!(RelationshipType::parse("sibling"), None);
    }

    #[test]
    fn test_constructors_keep_direction() {
        let rel = Relationship::parent_child("child", "parent");
        assert_eq!(rel.person1_id.as_str(), "child");
        assert_eq!(rel.person2_id.as_str(), "parent");
        assert_eq!(rel.relationship_type, RelationshipType::ParentChild);

        let gap = Relationship::lineage_gap("descendant", "ancestor");
        assert_eq!(gap.person1_id.as_str(), "descendant");
        assert_eq!(gap.relationship_type, RelationshipType::LineageGap);
    }
}
