//! Root selection for scoped and fragment-local person sets

use crate::{PeopleById, RelationshipIndex};
use kinship_domain::{BirthKey, PersonId};
use std::collections::BTreeSet;

/// Pick the anchor person for rendering `scoped_ids`
///
/// 1. An explicit center in scope always wins
/// 2. Otherwise the earliest-born person with no recorded parent
/// 3. Otherwise the earliest-born person overall
///
/// Only IDs with a person record are candidates; an unknown ID pulled into
/// scope by a dangling reference is never chosen. Returns `None` when no
/// scoped ID has a record.
pub fn find_root(
    scoped_ids: &BTreeSet<PersonId>,
    people_by_id: &PeopleById<'_>,
    index: &RelationshipIndex,
    explicit_center: Option<&PersonId>,
) -> Option<PersonId> {
    if let Some(center) = explicit_center
        .filter(|&center| scoped_ids.contains(center) && people_by_id.contains_key(center))
    {
        return Some(center.clone());
    }

    let earliest = |parentless_only: bool| {
        scoped_ids
            .iter()
            .filter_map(|id| people_by_id.get(id).copied())
            .filter(|person| !parentless_only || !index.has_parent(&person.id))
            .min_by_key(|person| BirthKey::of(*person))
            .map(|person| person.id.clone())
    };

    earliest(true).or_else(|| earliest(false))
}
