//! Lineage-gap bridges between fragments

use crate::{Fragment, PeopleById};
use kinship_domain::{PersonId, Relationship, RelationshipType};
use std::collections::{HashMap, HashSet};

/// A soft link between two otherwise disconnected fragments
///
/// Bridges annotate the fragment list; they never merge fragments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineageBridge {
    /// Descendant endpoint (`person1` of the lineage-gap edge)
    pub descendant: PersonId,

    /// Ancestor endpoint (`person2` of the lineage-gap edge)
    pub ancestor: PersonId,

    /// Index of the fragment containing the descendant
    pub descendant_fragment: usize,

    /// Index of the fragment containing the ancestor
    pub ancestor_fragment: usize,
}

/// Report lineage-gap edges whose endpoints sit in different fragments
///
/// Edges whose endpoints share a fragment carry no topological information
/// and are dropped, as are edges naming a person that is unknown or outside
/// every fragment. Repeated edges yield a single bridge.
pub fn lineage_gap_connections(
    fragments: &[Fragment],
    relationships: &[Relationship],
    people_by_id: &PeopleById<'_>,
) -> Vec<LineageBridge> {
    let mut fragment_of: HashMap<&PersonId, usize> = HashMap::new();
    for (position, fragment) in fragments.iter().enumerate() {
        for id in &fragment.members {
            fragment_of.insert(id, position);
        }
    }

    let locate = |id: &PersonId| {
        if !people_by_id.contains_key(id) {
            return None;
        }
        fragment_of.get(id).copied()
    };

    let mut seen: HashSet<(&PersonId, &PersonId)> = HashSet::new();
    let mut bridges = Vec::new();

    for rel in relationships
        .iter()
        .filter(|rel| rel.relationship_type == RelationshipType::LineageGap)
    {
        let (Some(descendant_fragment), Some(ancestor_fragment)) =
            (locate(&rel.person1_id), locate(&rel.person2_id))
        else {
            continue;
        };
        if descendant_fragment == ancestor_fragment {
            continue;
        }
        if !seen.insert((&rel.person1_id, &rel.person2_id)) {
            continue;
        }
        bridges.push(LineageBridge {
            descendant: rel.person1_id.clone(),
            ancestor: rel.person2_id.clone(),
            descendant_fragment,
            ancestor_fragment,
        });
    }

    bridges
}
