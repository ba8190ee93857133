//! Fragment detection: connected kinship components of a population

use crate::RelationshipIndex;
use kinship_domain::{birth_order, BirthKey, Person, PersonId};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

/// A maximal connected group of people under spouse/parent/child edges
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Member IDs
    pub members: BTreeSet<PersonId>,

    /// Anchor person for rendering this fragment
    pub root: PersonId,

    /// Number of members
    pub member_count: usize,

    /// Member records, earliest born first
    pub people: Vec<Person>,
}

impl Fragment {
    /// Whether the person belongs to this fragment
    pub fn contains(&self, id: &PersonId) -> bool {
        self.members.contains(id)
    }

    /// The root's record
    pub fn root_person(&self) -> Option<&Person> {
        self.people.iter().find(|person| person.id == self.root)
    }
}

/// Position of the fragment containing `id`, if any
pub fn fragment_index_of(fragments: &[Fragment], id: &PersonId) -> Option<usize> {
    fragments.iter().position(|fragment| fragment.contains(id))
}

/// Partition a population into connected fragments
///
/// Only edges between members of `population` are followed. Every person ends
/// up in exactly one fragment; duplicate records are collapsed (first wins).
///
/// Each fragment is rooted at its earliest-born member without a recorded
/// parent (falling back to its earliest-born member), and fragments are
/// returned ordered by their root's birth.
pub fn detect_fragments<'a, I>(population: I, index: &RelationshipIndex) -> Vec<Fragment>
where
    I: IntoIterator<Item = &'a Person>,
{
    let mut by_id: BTreeMap<&PersonId, &Person> = BTreeMap::new();
    for person in population {
        by_id.entry(&person.id).or_insert(person);
    }

    // Undirected adjacency restricted to the population
    let adjacency: BTreeMap<&PersonId, BTreeSet<&PersonId>> = by_id
        .keys()
        .map(|&id| {
            let neighbors = index
                .neighbors(id)
                .filter_map(|n| by_id.get_key_value(n).map(|(&k, _)| k))
                .filter(|&n| n != id)
                .collect();
            (id, neighbors)
        })
        .collect();

    let mut visited: HashSet<&PersonId> = HashSet::with_capacity(by_id.len());
    let mut fragments = Vec::new();

    for &start in by_id.keys() {
        if !visited.insert(start) {
            continue;
        }

        let mut members: BTreeSet<PersonId> = BTreeSet::new();
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            members.insert(current.clone());
            for &next in adjacency.get(current).into_iter().flatten() {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        let mut people: Vec<Person> = members.iter().map(|id| by_id[id].clone()).collect();
        people.sort_by(birth_order);

        let root = select_fragment_root(&people, index);
        fragments.push(Fragment {
            member_count: members.len(),
            members,
            root,
            people,
        });
    }

    fragments.sort_by(|a, b| {
        a.root_person()
            .map(BirthKey::of)
            .cmp(&b.root_person().map(BirthKey::of))
    });

    tracing::trace!(fragments = fragments.len(), people = by_id.len(), "detected fragments");

    fragments
}

/// Earliest parentless member, else earliest member; `people` is sorted
fn select_fragment_root(people: &[Person], index: &RelationshipIndex) -> PersonId {
    people
        .iter()
        .find(|person| !index.has_parent(&person.id))
        .or_else(|| people.first())
        .map(|person| person.id.clone())
        .unwrap_or_else(|| PersonId::new(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_domain::Relationship;

    fn ids(fragment: &Fragment) -> Vec<&str> {
        fragment.members.iter().map(PersonId::as_str).collect()
    }

    #[test]
    fn test_single_component() {
        let people = vec![
            Person::new("a", None, "900"),
            Person::new("b", None, "920"),
            Person::new("c", None, "945"),
        ];
        let rels = vec![
            Relationship::spousal("a", "b"),
            Relationship::parent_child("c", "a"),
        ];
        let index = RelationshipIndex::build(&rels);

        let fragments = detect_fragments(&people, &index);
        assert_eq!(fragments.len(), 1);
        assert_eq!(ids(&fragments[0]), vec!["a", "b", "c"]);
        assert_eq!(fragments[0].member_count, 3);
        assert_eq!(fragments[0].root.as_str(), "a");
    }

    #[test]
    fn test_ordering_by_root_birth() {
        let people = vec![
            Person::new("late", None, "1200"),
            Person::new("early", None, "800"),
            Person::new("mystery", None, "unknown"),
        ];
        let index = RelationshipIndex::default();

        let fragments = detect_fragments(&people, &index);
        let roots: Vec<&str> = fragments.iter().map(|f| f.root.as_str()).collect();
        assert_eq!(roots, vec!["early", "late", "mystery"]);
    }

    #[test]
    fn test_edges_outside_population_not_followed() {
        // a and c are only connected through b, which is not in the population
        let people = vec![Person::new("a", None, "900"), Person::new("c", None, "950")];
        let rels = vec![
            Relationship::parent_child("b", "a"),
            Relationship::parent_child("c", "b"),
        ];
        let index = RelationshipIndex::build(&rels);

        let fragments = detect_fragments(&people, &index);
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn test_root_falls_back_when_every_member_has_parent() {
        // parents live outside the population
        let people = vec![Person::new("x", None, "960"), Person::new("y", None, "955")];
        let rels = vec![
            Relationship::spousal("x", "y"),
            Relationship::parent_child("x", "outside-1"),
            Relationship::parent_child("y", "outside-2"),
        ];
        let index = RelationshipIndex::build(&rels);

        let fragments = detect_fragments(&people, &index);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].root.as_str(), "y");
    }

    #[test]
    fn test_parentless_preferred_over_earlier_child() {
        // data error: the child's year precedes the parent's
        let people = vec![Person::new("parent", None, "950"), Person::new("child", None, "900")];
        let rels = vec![Relationship::parent_child("child", "parent")];
        let index = RelationshipIndex::build(&rels);

        let fragments = detect_fragments(&people, &index);
        assert_eq!(fragments[0].root.as_str(), "parent");
    }

    #[test]
    fn test_duplicate_records_collapse() {
        let people = vec![Person::new("a", None, "900"), Person::new("a", None, "901")];
        let fragments = detect_fragments(&people, &RelationshipIndex::default());
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].member_count, 1);
        assert_eq!(fragments[0].people[0].date_of_birth.year(), Some(900));
    }

    #[test]
    fn test_cycles_terminate() {
        let people = vec![Person::new("a", None, "1"), Person::new("b", None, "2")];
        let rels = vec![
            Relationship::parent_child("a", "b"),
            Relationship::parent_child("b", "a"),
            Relationship::spousal("a", "a"),
        ];
        let index = RelationshipIndex::build(&rels);

        let fragments = detect_fragments(&people, &index);
        assert_eq!(fragments.len(), 1);
        // everyone has a parent, so the earliest-born wins
        assert_eq!(fragments[0].root.as_str(), "a");
    }

    #[test]
    fn test_fragment_index_lookup() {
        let people = vec![Person::new("a", None, "1"), Person::new("b", None, "2")];
        let fragments = detect_fragments(&people, &RelationshipIndex::default());

        assert_eq!(fragment_index_of(&fragments, &PersonId::from("b")), Some(1));
        assert_eq!(fragment_index_of(&fragments, &PersonId::from("z")), None);
    }

    #[test]
    fn test_empty_population() {
        let fragments = detect_fragments(&Vec::<Person>::new(), &RelationshipIndex::default());
        assert!(fragments.is_empty());
    }
}
