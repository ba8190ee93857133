//! Kinship Domain Layer
//!
//! This crate contains the record types shared by every other layer of Kinship.
//! It has ZERO external dependencies and defines the people, houses and
//! relationships the graph engine computes over, plus the one birth-year
//! ordering every component sorts with.
//!
//! ## Key Concepts
//!
//! - **Person**: an immutable record with an optional house affiliation
//! - **House**: a lineage grouping, optionally a cadet branch of a parent house
//! - **Relationship**: a spousal, parent-child or lineage-gap edge between two people
//! - **Birth year**: a raw token parsed once into a totally ordered value
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Records are plain data, owned by the caller's persistence layer
//! - Graph algorithms live in `kinship-graph`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod birth_year;
pub mod house;
pub mod person;
pub mod relationship;

// Re-exports for convenience
pub use birth_year::{birth_order, BirthKey, BirthYear};
pub use house::{House, HouseId};
pub use person::{Person, PersonId};
pub use relationship::{Relationship, RelationshipType};
