//! Data-quality diagnostics
//!
//! Genealogical data is frequently incomplete, and the engine tolerates bad
//! records silently. This pass lists what it tolerated so callers can log it.
//! It never alters any graph computation.

use crate::houses::house_ancestry;
use crate::{Dataset, EngineConfig, RelationshipIndex};
use kinship_domain::{HouseId, PersonId, RelationshipType};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

/// A single data-quality finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataIssue {
    /// A relationship names a person with no record
    DanglingRelationship {
        /// Position in the relationship list
        position: usize,
        /// Relationship type
        relationship_type: RelationshipType,
        /// The unknown person
        missing: PersonId,
    },

    /// A person names a house with no record
    UnknownHouse {
        /// The person
        person: PersonId,
        /// The unknown house
        house: HouseId,
    },

    /// A house names a parent house with no record
    UnknownParentHouse {
        /// The cadet house
        house: HouseId,
        /// The unknown parent
        parent: HouseId,
    },

    /// Walking the house-parent relation revisits a house or exceeds the bound
    HouseCycle {
        /// House the walk started from
        house: HouseId,
    },

    /// A person has more than one recorded spouse
    MultipleSpouses {
        /// The person
        person: PersonId,
        /// All recorded spouses
        spouses: Vec<PersonId>,
    },

    /// A person is recorded as their own ancestor
    AncestryCycle {
        /// A person on the cycle
        person: PersonId,
    },

    /// A birth token is not a numeric year
    UnparseableBirthYear {
        /// The person
        person: PersonId,
        /// The raw token
        token: String,
    },
}

impl DataIssue {
    /// Short label for the kind of finding
    pub fn kind(&self) -> &'static str {
        match self {
            DataIssue::DanglingRelationship { .. } => "dangling-relationship",
            DataIssue::UnknownHouse { .. } => "unknown-house",
            DataIssue::UnknownParentHouse { .. } => "unknown-parent-house",
            DataIssue::HouseCycle { .. } => "house-cycle",
            DataIssue::MultipleSpouses { .. } => "multiple-spouses",
            DataIssue::AncestryCycle { .. } => "ancestry-cycle",
            DataIssue::UnparseableBirthYear { .. } => "unparseable-birth-year",
        }
    }
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataIssue::DanglingRelationship {
                position,
                relationship_type,
                missing,
            } => write!(
                f,
                "relationship #{} ({}) references unknown person '{}'",
                position,
                relationship_type.as_str(),
                missing
            ),
            DataIssue::UnknownHouse { person, house } => {
                write!(f, "person '{}' belongs to unknown house '{}'", person, house)
            }
            DataIssue::UnknownParentHouse { house, parent } => {
                write!(f, "house '{}' names unknown parent house '{}'", house, parent)
            }
            DataIssue::HouseCycle { house } => {
                write!(f, "house '{}' has a cyclic or unbounded parent chain", house)
            }
            DataIssue::MultipleSpouses { person, spouses } => {
                let names: Vec<&str> = spouses.iter().map(PersonId::as_str).collect();
                write!(f, "person '{}' has {} spouses: {}", person, spouses.len(), names.join(", "))
            }
            DataIssue::AncestryCycle { person } => {
                write!(f, "person '{}' is recorded as their own ancestor", person)
            }
            DataIssue::UnparseableBirthYear { person, token } => {
                write!(f, "person '{}' has non-numeric birth year '{}'", person, token)
            }
        }
    }
}

/// Findings of one diagnostics pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataReport {
    /// Every finding, grouped by kind in a stable order
    pub issues: Vec<DataIssue>,
}

impl DataReport {
    /// Whether nothing was found
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of findings
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the report has no findings
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return "No data issues found".to_string();
        }
        let mut lines = vec![format!("{} data issue(s) found", self.issues.len())];
        lines.extend(self.issues.iter().map(|issue| format!("  - {}", issue)));
        lines.join("\n")
    }
}

/// Inspect a dataset for references and structures the engine tolerates
pub fn diagnose(dataset: &Dataset, config: &EngineConfig) -> DataReport {
    let mut issues = Vec::new();

    let person_ids: HashSet<&PersonId> = dataset.people.iter().map(|p| &p.id).collect();
    let house_ids: HashSet<&HouseId> = dataset.houses.iter().map(|h| &h.id).collect();

    for (position, rel) in dataset.relationships.iter().enumerate() {
        let mut missing: Vec<&PersonId> = Vec::new();
        for id in [&rel.person1_id, &rel.person2_id] {
            if !person_ids.contains(id) && !missing.contains(&id) {
                missing.push(id);
            }
        }
        issues.extend(missing.into_iter().map(|id| DataIssue::DanglingRelationship {
            position,
            relationship_type: rel.relationship_type,
            missing: id.clone(),
        }));
    }

    for person in &dataset.people {
        if let Some(house) = &person.house_id {
            if !house_ids.contains(house) {
                issues.push(DataIssue::UnknownHouse {
                    person: person.id.clone(),
                    house: house.clone(),
                });
            }
        }
    }

    for house in &dataset.houses {
        let ancestry = house_ancestry(&house.id, &dataset.houses, config.max_house_depth);
        // a missing grandparent is reported on the parent house instead
        if let (true, [parent]) = (ancestry.dangling, ancestry.chain.as_slice()) {
            issues.push(DataIssue::UnknownParentHouse {
                house: house.id.clone(),
                parent: parent.clone(),
            });
        }
        if ancestry.cycle || ancestry.truncated {
            issues.push(DataIssue::HouseCycle {
                house: house.id.clone(),
            });
        }
    }

    let index = dataset.index();

    if config.report_multiple_spouses {
        issues.extend(index.people_with_multiple_spouses().into_iter().map(
            |(person, spouses)| DataIssue::MultipleSpouses {
                person: person.clone(),
                spouses: spouses.iter().cloned().collect(),
            },
        ));
    }

    issues.extend(
        ancestry_cycles(&index)
            .into_iter()
            .map(|person| DataIssue::AncestryCycle { person }),
    );

    if config.report_unparseable_birth_years {
        for person in &dataset.people {
            if !person.date_of_birth.is_known() {
                issues.push(DataIssue::UnparseableBirthYear {
                    person: person.id.clone(),
                    token: person.date_of_birth.to_string(),
                });
            }
        }
    }

    if !issues.is_empty() {
        tracing::warn!(issues = issues.len(), "dataset has data-quality issues");
    }

    DataReport { issues }
}

/// People lying on a parent-child cycle, sorted by ID
///
/// Peels off acyclic people with a topological sort over parent edges; only
/// people left over can be on a cycle, and each is checked by walking upward
/// until it meets itself.
fn ancestry_cycles(index: &RelationshipIndex) -> Vec<PersonId> {
    let mut nodes: BTreeSet<&PersonId> = BTreeSet::new();
    for child in index.people_with_parents() {
        nodes.insert(child);
        nodes.extend(index.parents(child));
    }

    let mut unresolved_parents: HashMap<&PersonId, usize> = nodes
        .iter()
        .map(|&id| (id, index.parents(id).count()))
        .collect();
    let mut queue: VecDeque<&PersonId> = unresolved_parents
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(&id, _)| id)
        .collect();
    let mut resolved: HashSet<&PersonId> = HashSet::new();

    while let Some(id) = queue.pop_front() {
        resolved.insert(id);
        for child in index.children(id) {
            if let Some(count) = unresolved_parents.get_mut(child) {
                *count -= 1;
                if *count == 0 {
                    queue.push_back(child);
                }
            }
        }
    }

    nodes
        .into_iter()
        .filter(|id| !resolved.contains(id))
        .filter(|&id| reaches_itself(id, index))
        .cloned()
        .collect()
}

fn reaches_itself(start: &PersonId, index: &RelationshipIndex) -> bool {
    let mut visited: HashSet<&PersonId> = HashSet::new();
    let mut stack: Vec<&PersonId> = index.parents(start).collect();
    while let Some(current) = stack.pop() {
        if current == start {
            return true;
        }
        if visited.insert(current) {
            stack.extend(index.parents(current));
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_domain::{House, Person, Relationship};

    fn clean_dataset() -> Dataset {
        Dataset::new(
            vec![
                Person::new("a", Some(HouseId::from("h")), "900"),
                Person::new("b", None, "920"),
                Person::new("c", Some(HouseId::from("h")), "945"),
            ],
            vec![House::new("h"), House::cadet_of("k", "h")],
            vec![
                Relationship::spousal("a", "b"),
                Relationship::parent_child("c", "a"),
                Relationship::parent_child("c", "b"),
            ],
        )
    }

    #[test]
    fn test_clean_dataset() {
        let report = diagnose(&clean_dataset(), &EngineConfig::strict());
        assert!(report.is_clean(), "{}", report.summary());
        assert_eq!(report.summary(), "No data issues found");
    }

    #[test]
    fn test_dangling_references() {
        let mut dataset = clean_dataset();
        dataset.relationships.push(Relationship::parent_child("ghost", "ghost"));
        dataset.houses.push(House::cadet_of("orphan", "nowhere"));
        dataset.people.push(Person::new("d", Some(HouseId::from("lost")), "1"));

        let report = diagnose(&dataset, &EngineConfig::default());
        assert!(report.issues.contains(&DataIssue::DanglingRelationship {
            position: 3,
            relationship_type: RelationshipType::ParentChild,
            missing: PersonId::from("ghost"),
        }));
        // reported once even though both endpoints are the same person
        let dangling = report
            .issues
            .iter()
            .filter(|i| matches!(i, DataIssue::DanglingRelationship { .. }))
            .count();
        assert_eq!(dangling, 1);
        assert!(report.issues.contains(&DataIssue::UnknownParentHouse {
            house: HouseId::from("orphan"),
            parent: HouseId::from("nowhere"),
        }));
        assert!(report.issues.contains(&DataIssue::UnknownHouse {
            person: PersonId::from("d"),
            house: HouseId::from("lost"),
        }));
    }

    #[test]
    fn test_unknown_parent_house_reported_once() {
        let mut dataset = clean_dataset();
        dataset.houses.push(House::cadet_of("middle", "nowhere"));
        dataset.houses.push(House::cadet_of("leaf", "middle"));

        let report = diagnose(&dataset, &EngineConfig::default());
        let unknown: Vec<&DataIssue> = report
            .issues
            .iter()
            .filter(|i| matches!(i, DataIssue::UnknownParentHouse { .. }))
            .collect();
        assert_eq!(
            unknown,
            vec![&DataIssue::UnknownParentHouse {
                house: HouseId::from("middle"),
                parent: HouseId::from("nowhere"),
            }]
        );
    }

    #[test]
    fn test_house_cycle() {
        let mut dataset = clean_dataset();
        dataset.houses = vec![House::cadet_of("x", "y"), House::cadet_of("y", "x")];
        dataset.people.clear();

        let report = diagnose(&dataset, &EngineConfig::default());
        let cycles = report
            .issues
            .iter()
            .filter(|i| matches!(i, DataIssue::HouseCycle { .. }))
            .count();
        assert_eq!(cycles, 2);
    }

    #[test]
    fn test_multiple_spouses_respects_config() {
        let mut dataset = clean_dataset();
        dataset.people.push(Person::new("e", None, "930"));
        dataset.relationships.push(Relationship::spousal("a", "e"));

        let report = diagnose(&dataset, &EngineConfig::default());
        assert!(report.issues.contains(&DataIssue::MultipleSpouses {
            person: PersonId::from("a"),
            spouses: vec![PersonId::from("b"), PersonId::from("e")],
        }));

        let report = diagnose(&dataset, &EngineConfig::permissive());
        assert!(report.is_clean());
    }

    #[test]
    fn test_ancestry_cycle() {
        let mut dataset = clean_dataset();
        // a -> c -> a, plus a descendant of the cycle that is not on it
        dataset.relationships.push(Relationship::parent_child("a", "c"));
        dataset.people.push(Person::new("z", None, "1000"));
        dataset.relationships.push(Relationship::parent_child("z", "c"));

        let report = diagnose(&dataset, &EngineConfig::permissive());
        let on_cycle: Vec<&PersonId> = report
            .issues
            .iter()
            .filter_map(|i| match i {
                DataIssue::AncestryCycle { person } => Some(person),
                _ => None,
            })
            .collect();
        assert_eq!(on_cycle, vec![&PersonId::from("a"), &PersonId::from("c")]);
    }

    #[test]
    fn test_unparseable_birth_year_only_when_enabled() {
        let mut dataset = clean_dataset();
        dataset.people.push(Person::new("u", None, "unknown"));

        assert!(diagnose(&dataset, &EngineConfig::default()).is_clean());

        let report = diagnose(&dataset, &EngineConfig::strict());
        assert_eq!(
            report.issues,
            vec![DataIssue::UnparseableBirthYear {
                person: PersonId::from("u"),
                token: "unknown".to_string(),
            }]
        );
        assert_eq!(report.issues[0].kind(), "unparseable-birth-year");
        assert!(report.summary().contains("non-numeric birth year 'unknown'"));
    }
}
