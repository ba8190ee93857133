//! Input snapshot bundling people, houses and relationships

use crate::RelationshipIndex;
use kinship_domain::{House, HouseId, Person, PersonId, Relationship};
use std::collections::HashMap;

/// Borrowed lookup from person ID to record
pub type PeopleById<'a> = HashMap<&'a PersonId, &'a Person>;

/// Build a person lookup; on duplicate IDs the first record wins
pub fn people_by_id(people: &[Person]) -> PeopleById<'_> {
    let mut map = HashMap::with_capacity(people.len());
    for person in people {
        map.entry(&person.id).or_insert(person);
    }
    map
}

/// An immutable snapshot of the records one computation runs over
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// All people
    pub people: Vec<Person>,

    /// All houses
    pub houses: Vec<House>,

    /// All relationships
    pub relationships: Vec<Relationship>,
}

impl Dataset {
    /// Create a new dataset
    pub fn new(people: Vec<Person>, houses: Vec<House>, relationships: Vec<Relationship>) -> Self {
        Self {
            people,
            houses,
            relationships,
        }
    }

    /// Person lookup over this dataset
    pub fn people_by_id(&self) -> PeopleById<'_> {
        people_by_id(&self.people)
    }

    /// Fresh relationship index over this dataset
    pub fn index(&self) -> RelationshipIndex {
        RelationshipIndex::build(&self.relationships)
    }

    /// Find a house by ID
    pub fn house(&self, id: &HouseId) -> Option<&House> {
        self.houses.iter().find(|house| &house.id == id)
    }

    /// Find a person by ID
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|person| &person.id == id)
    }
}
