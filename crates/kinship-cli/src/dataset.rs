//! Dataset file loading.
//!
//! A dataset is a JSON document with `people`, `houses` and `relationships`
//! arrays, using camelCase field names:
//!
//! ```json
//! {
//!   "people": [{ "id": "eddard", "houseId": "stark", "dateOfBirth": 263 }],
//!   "houses": [{ "id": "stark", "name": "House Stark" }],
//!   "relationships": [
//!     { "person1Id": "robb", "person2Id": "eddard", "relationshipType": "parent-child" }
//!   ]
//! }
//! ```
//!
//! Birth and death years may be numbers or strings. Missing optional fields
//! are treated as absent; references to unknown people or houses are kept for
//! the engine to tolerate.

use crate::error::{CliError, Result};
use kinship_domain::{House, HouseId, Person, Relationship, RelationshipType};
use kinship_graph::Dataset;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level dataset document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetFile {
    /// Person records
    #[serde(default)]
    pub people: Vec<PersonRecord>,

    /// House records
    #[serde(default)]
    pub houses: Vec<HouseRecord>,

    /// Relationship records
    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
}

/// A person as stored in a dataset file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Person identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// House affiliation
    #[serde(default)]
    pub house_id: Option<String>,

    /// Birth-year token
    #[serde(default)]
    pub date_of_birth: Option<YearToken>,

    /// Death-year token
    #[serde(default)]
    pub date_of_death: Option<YearToken>,
}

/// A house as stored in a dataset file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRecord {
    /// House identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Parent house for cadet branches
    #[serde(default)]
    pub parent_house_id: Option<String>,
}

/// A relationship as stored in a dataset file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipRecord {
    /// Spouse, child or descendant
    pub person1_id: String,

    /// Spouse, parent or ancestor
    pub person2_id: String,

    /// `spousal`, `parent-child` or `lineage-gap`
    pub relationship_type: String,
}

/// Year token that may be written as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum YearToken {
    /// Numeric year
    Number(i64),
    /// Free text such as `"unknown"` or `"283"`
    Text(String),
}

impl YearToken {
    /// Token text as the domain model expects it
    pub fn into_text(self) -> String {
        match self {
            YearToken::Number(year) => year.to_string(),
            YearToken::Text(text) => text,
        }
    }
}

impl DatasetFile {
    /// Parse a dataset document from a JSON string.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Convert the records into the engine's dataset.
    ///
    /// Fails only on a relationship type that is not recognised.
    pub fn into_dataset(self) -> Result<Dataset> {
        let people = self
            .people
            .into_iter()
            .map(|record| {
                let birth = record
                    .date_of_birth
                    .map(YearToken::into_text)
                    .unwrap_or_default();
                let mut person = Person::new(record.id, record.house_id.map(HouseId::from), &birth);
                person.name = record.name;
                person.date_of_death = record.date_of_death.map(YearToken::into_text);
                person
            })
            .collect();

        let houses = self
            .houses
            .into_iter()
            .map(|record| House {
                id: HouseId::from(record.id),
                name: record.name,
                parent_house_id: record.parent_house_id.map(HouseId::from),
            })
            .collect();

        let relationships = self
            .relationships
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                let relationship_type = RelationshipType::parse(&record.relationship_type)
                    .ok_or_else(|| {
                        CliError::Dataset(format!(
                            "relationship #{} has unknown type '{}'",
                            position, record.relationship_type
                        ))
                    })?;
                Ok(Relationship::new(
                    record.person1_id,
                    record.person2_id,
                    relationship_type,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Dataset::new(people, houses, relationships))
    }
}

/// Read and convert a dataset file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::Dataset(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let file = DatasetFile::from_json_str(&contents)?;
    let dataset = file.into_dataset()?;

    tracing::info!(
        path = %path.display(),
        people = dataset.people.len(),
        houses = dataset.houses.len(),
        relationships = dataset.relationships.len(),
        "dataset loaded"
    );
    Ok(dataset)
}
