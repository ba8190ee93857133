//! House scope resolution
//!
//! Computes the set of people visible in a house view from four sources:
//! 1. Direct members of the target house (and its direct cadets, on request)
//! 2. Spouses of anyone in scope
//! 3. Ancestors of direct members, gated on house membership
//! 4. Descendants of house members, gated on house membership
//!
//! The gate lets each walk surface exactly one generation past the house
//! boundary: a non-member parent or child is shown with their spouses, but
//! their own parents or children are not explored.

use crate::houses::houses_in_scope;
use crate::RelationshipIndex;
use kinship_domain::{House, HouseId, Person, PersonId};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Resolve the visible person IDs for a house view
///
/// # Arguments
/// * `target` - The house being viewed
/// * `people` - All person records
/// * `houses` - All house records (used for cadet lookup)
/// * `index` - Relationship index built from the same snapshot
/// * `include_cadets` - Also treat members of direct cadet houses as members
///
/// Repeated calls on the same inputs return the same set.
pub fn resolve_scope(
    target: &HouseId,
    people: &[Person],
    houses: &[House],
    index: &RelationshipIndex,
    include_cadets: bool,
) -> BTreeSet<PersonId> {
    let house_ids = houses_in_scope(target, houses, include_cadets);

    let mut house_of: HashMap<&PersonId, Option<&HouseId>> = HashMap::with_capacity(people.len());
    for person in people {
        house_of.entry(&person.id).or_insert(person.house_id.as_ref());
    }
    let is_member = |id: &PersonId| {
        house_of
            .get(id)
            .copied()
            .flatten()
            .is_some_and(|house| house_ids.contains(house))
    };

    // Repeated IDs resolve to their first record, same as `is_member`
    let mut seen: HashSet<&PersonId> = HashSet::with_capacity(people.len());
    let direct_members: Vec<&PersonId> = people
        .iter()
        .map(|person| &person.id)
        .filter(|&id| seen.insert(id) && is_member(id))
        .collect();

    let mut scope = ScopeBuilder::new(index);

    for &member in &direct_members {
        scope.add_with_spouses(member);
    }

    // Ancestor closure: members keep climbing, non-members are surfaced once
    let mut visited: HashSet<PersonId> = HashSet::new();
    for &member in &direct_members {
        let mut stack = vec![member.clone()];
        while let Some(current) = stack.pop() {
            for parent in index.parents(&current) {
                if !visited.insert(parent.clone()) {
                    continue;
                }
                scope.add_with_spouses(parent);
                if is_member(parent) {
                    stack.push(parent.clone());
                }
            }
        }
    }

    // Descendant closure from direct members, then from every member in scope
    let mut visited: HashSet<PersonId> = HashSet::new();
    let mut starts: Vec<PersonId> = direct_members.iter().map(|&id| id.clone()).collect();
    starts.extend(scope.ids.iter().filter(|id| is_member(*id)).cloned());

    for start in starts {
        if !is_member(&start) {
            continue;
        }
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for child in index.children(&current) {
                if !visited.insert(child.clone()) {
                    continue;
                }
                scope.add_with_spouses(child);
                if is_member(child) {
                    stack.push(child.clone());
                }
            }
        }
    }

    tracing::trace!(
        house = %target,
        direct = direct_members.len(),
        visible = scope.ids.len(),
        "resolved house scope"
    );

    scope.ids
}

/// Accumulates the scope set; every insertion closes over spousal edges
struct ScopeBuilder<'a> {
    index: &'a RelationshipIndex,
    ids: BTreeSet<PersonId>,
}

impl<'a> ScopeBuilder<'a> {
    fn new(index: &'a RelationshipIndex) -> Self {
        Self {
            index,
            ids: BTreeSet::new(),
        }
    }

    /// Add a person together with every spouse reachable through spousal edges
    fn add_with_spouses(&mut self, id: &PersonId) {
        if self.ids.contains(id) {
            return;
        }
        let mut frontier = vec![id.clone()];
        self.ids.insert(id.clone());
        while let Some(current) = frontier.pop() {
            for spouse in self.index.spouses(&current) {
                if self.ids.insert(spouse.clone()) {
                    frontier.push(spouse.clone());
                }
            }
        }
    }
}
