//! House view: the full scope → fragments → bridges → root pipeline

use crate::{
    detect_fragments, find_root, lineage_gap_connections, resolve_scope, Dataset, EngineConfig,
    Fragment, LineageBridge, RelationshipIndex,
};
use kinship_domain::{HouseId, PersonId};
use std::collections::BTreeSet;

/// Options for building a view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Treat members of direct cadet houses as house members
    pub include_cadets: bool,

    /// Preferred root; ignored unless it is in scope and has a record
    pub center: Option<PersonId>,
}

impl ViewOptions {
    /// Options seeded from engine defaults
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            include_cadets: config.include_cadets,
            center: None,
        }
    }

    /// Set the include-cadets flag
    pub fn with_cadets(mut self, include_cadets: bool) -> Self {
        self.include_cadets = include_cadets;
        self
    }

    /// Set the preferred root
    pub fn with_center(mut self, center: Option<PersonId>) -> Self {
        self.center = center;
        self
    }
}

/// Everything a renderer needs to draw one view
///
/// The renderer must not alter these sets; it only positions them.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseView {
    /// The house viewed, or `None` for the whole population
    pub house: Option<HouseId>,

    /// Visible person IDs
    pub scope: BTreeSet<PersonId>,

    /// Connected fragments of the visible population, ordered by root birth
    pub fragments: Vec<Fragment>,

    /// Lineage-gap bridges between fragments
    pub bridges: Vec<LineageBridge>,

    /// Anchor person of the whole view
    pub root: Option<PersonId>,
}

impl HouseView {
    /// Build the view of one house
    pub fn build(dataset: &Dataset, house: &HouseId, options: &ViewOptions) -> Self {
        let index = dataset.index();
        let scope = resolve_scope(
            house,
            &dataset.people,
            &dataset.houses,
            &index,
            options.include_cadets,
        );
        tracing::debug!(house = %house, visible = scope.len(), "scope resolved");

        Self::assemble(dataset, &index, Some(house.clone()), scope, options)
    }

    /// Build a view over every person in the dataset
    pub fn whole_population(dataset: &Dataset, options: &ViewOptions) -> Self {
        let scope = dataset.people.iter().map(|person| person.id.clone()).collect();
        Self::assemble(dataset, &dataset.index(), None, scope, options)
    }

    fn assemble(
        dataset: &Dataset,
        index: &RelationshipIndex,
        house: Option<HouseId>,
        scope: BTreeSet<PersonId>,
        options: &ViewOptions,
    ) -> Self {
        let people_by_id = dataset.people_by_id();

        let population = scope.iter().filter_map(|id| people_by_id.get(id).copied());
        let fragments = detect_fragments(population, index);
        tracing::debug!(fragments = fragments.len(), "fragments detected");

        let bridges = lineage_gap_connections(&fragments, &dataset.relationships, &people_by_id);
        tracing::debug!(bridges = bridges.len(), "lineage gaps resolved");

        let root = find_root(&scope, &people_by_id, index, options.center.as_ref());
        tracing::debug!(root = ?root, "root selected");

        Self {
            house,
            scope,
            fragments,
            bridges,
            root,
        }
    }

    /// Root of the fragment at `position`
    pub fn fragment_root(&self, position: usize) -> Option<&PersonId> {
        self.fragments.get(position).map(|fragment| &fragment.root)
    }

    /// Number of visible people
    pub fn visible_count(&self) -> usize {
        self.scope.len()
    }
}
