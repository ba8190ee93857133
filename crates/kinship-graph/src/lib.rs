//! Kinship Graph
//!
//! Scoping and connectivity engine for genealogy graphs.
//!
//! # Overview
//!
//! Given people linked by parent/child and spousal relationships, the engine
//! determines:
//! - **Scope**: which people are visible in a requested house view
//! - **Fragments**: how a population splits into disconnected kinship components
//! - **Bridges**: which lineage-gap edges softly connect two fragments
//! - **Root**: which person anchors hierarchical rendering
//!
//! # Architecture
//!
//! Every computation is a pure function over borrowed, immutable records.
//! Derived structures (the [`RelationshipIndex`], scope sets, fragments) are
//! rebuilt for each call and never cached between calls.
//!
//! ```text
//! relationships ──▶ RelationshipIndex ──▶ resolve_scope ──▶ detect_fragments
//!                                                               │
//!                               find_root ◀─────────────────────┤
//!                                                               ▼
//!                                                lineage_gap_connections
//! ```
//!
//! # Usage
//!
//! ```
//! use kinship_domain::{House, HouseId, Person, Relationship};
//! use kinship_graph::{Dataset, HouseView, ViewOptions};
//!
//! let stark = HouseId::from("stark");
//! let dataset = Dataset::new(
//!     vec![
//!         Person::new("rickard", Some(stark.clone()), "230"),
//!         Person::new("eddard", Some(stark.clone()), "263"),
//!         Person::new("catelyn", None, "264"),
//!     ],
//!     vec![House::new("stark")],
//!     vec![
//!         Relationship::parent_child("eddard", "rickard"),
//!         Relationship::spousal("eddard", "catelyn"),
//!     ],
//! );
//!
//! let view = HouseView::build(&dataset, &stark, &ViewOptions::default());
//! assert_eq!(view.scope.len(), 3);
//! assert_eq!(view.fragments.len(), 1);
//! assert_eq!(view.root.as_ref().map(|id| id.as_str()), Some("rickard"));
//! ```
//!
//! # Configuration
//!
//! Engine defaults can be loaded from TOML:
//!
//! ```toml
//! include_cadets = false
//! max_house_depth = 64
//! report_multiple_spouses = true
//! report_unparseable_birth_years = false
//! ```

#![warn(missing_docs)]

mod config;
mod dataset;
mod diagnostics;
mod error;
mod fragments;
mod houses;
mod index;
mod lineage_gap;
mod root;
mod scope;
mod view;

pub use config::EngineConfig;
pub use dataset::{people_by_id, Dataset, PeopleById};
pub use diagnostics::{diagnose, DataIssue, DataReport};
pub use error::EngineError;
pub use fragments::{detect_fragments, fragment_index_of, Fragment};
pub use houses::{house_ancestry, houses_in_scope, HouseAncestry};
pub use index::RelationshipIndex;
pub use lineage_gap::{lineage_gap_connections, LineageBridge};
pub use root::find_root;
pub use scope::resolve_scope;
pub use view::{HouseView, ViewOptions};
