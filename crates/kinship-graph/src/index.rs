//! Relationship index: spouse, parent and children lookups

use kinship_domain::{PersonId, Relationship, RelationshipType};
use std::collections::{BTreeSet, HashMap};

/// Lookup maps derived from a flat relationship list
///
/// Built once per computation with [`RelationshipIndex::build`] and passed
/// explicitly to every operation that needs it. Relationships naming unknown
/// people are indexed anyway; the index never validates against a person list.
///
/// Spouses are kept as a set so that remarriage is representable. The
/// single-slot view [`RelationshipIndex::spouse_of`] resolves conflicts by
/// last write.
#[derive(Debug, Clone, Default)]
pub struct RelationshipIndex {
    spouses: HashMap<PersonId, BTreeSet<PersonId>>,
    last_spouse: HashMap<PersonId, PersonId>,
    parents: HashMap<PersonId, BTreeSet<PersonId>>,
    children: HashMap<PersonId, BTreeSet<PersonId>>,
}

impl RelationshipIndex {
    /// Build the index from relationships
    ///
    /// Lineage-gap edges are skipped: they never create adjacency.
    pub fn build<'a, I>(relationships: I) -> Self
    where
        I: IntoIterator<Item = &'a Relationship>,
    {
        let mut index = Self::default();

        for rel in relationships {
            let (a, b) = (&rel.person1_id, &rel.person2_id);
            match rel.relationship_type {
                RelationshipType::Spousal => {
                    index.spouses.entry(a.clone()).or_default().insert(b.clone());
                    index.spouses.entry(b.clone()).or_default().insert(a.clone());
                    index.last_spouse.insert(a.clone(), b.clone());
                    index.last_spouse.insert(b.clone(), a.clone());
                }
                RelationshipType::ParentChild => {
                    index.parents.entry(a.clone()).or_default().insert(b.clone());
                    index.children.entry(b.clone()).or_default().insert(a.clone());
                }
                RelationshipType::LineageGap => {}
            }
        }

        index
    }

    /// All recorded spouses of a person
    pub fn spouses<'a>(&'a self, id: &PersonId) -> impl Iterator<Item = &'a PersonId> + 'a {
        self.spouses.get(id).into_iter().flatten()
    }

    /// The last recorded spouse of a person (single-slot view)
    pub fn spouse_of(&self, id: &PersonId) -> Option<&PersonId> {
        self.last_spouse.get(id)
    }

    /// Number of distinct recorded spouses
    pub fn spouse_count(&self, id: &PersonId) -> usize {
        self.spouses.get(id).map_or(0, BTreeSet::len)
    }

    /// Recorded parents of a person
    pub fn parents<'a>(&'a self, id: &PersonId) -> impl Iterator<Item = &'a PersonId> + 'a {
        self.parents.get(id).into_iter().flatten()
    }

    /// Recorded children of a person
    pub fn children<'a>(&'a self, id: &PersonId) -> impl Iterator<Item = &'a PersonId> + 'a {
        self.children.get(id).into_iter().flatten()
    }

    /// Whether at least one parent is recorded for the person
    pub fn has_parent(&self, id: &PersonId) -> bool {
        self.parents.get(id).is_some_and(|parents| !parents.is_empty())
    }

    /// Every person adjacent through a spouse, parent or child edge
    pub fn neighbors<'a>(&'a self, id: &PersonId) -> impl Iterator<Item = &'a PersonId> + 'a {
        self.spouses(id)
            .chain(self.parents(id))
            .chain(self.children(id))
    }

    /// People with at least one recorded parent
    pub fn people_with_parents(&self) -> impl Iterator<Item = &PersonId> {
        self.parents.keys()
    }

    /// People with more than one recorded spouse, sorted by ID
    pub fn people_with_multiple_spouses(&self) -> Vec<(&PersonId, &BTreeSet<PersonId>)> {
        let mut found: Vec<_> = self
            .spouses
            .iter()
            .filter(|(_, spouses)| spouses.len() > 1)
            .collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        found
    }
}
