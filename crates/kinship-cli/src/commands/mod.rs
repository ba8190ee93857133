//! Command implementations.

pub mod check;
pub mod fragments;
pub mod gaps;
pub mod root;
pub mod scope;
pub mod view;

pub use self::check::execute_check;
pub use self::fragments::execute_fragments;
pub use self::gaps::execute_gaps;
pub use self::root::execute_root;
pub use self::scope::execute_scope;
pub use self::view::execute_view;

use crate::error::{CliError, Result};
use kinship_domain::{HouseId, PersonId};
use kinship_graph::{Dataset, HouseView, ViewOptions};

/// Validate a house argument.
pub(crate) fn parse_house(value: &str) -> Result<HouseId> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CliError::InvalidInput("House ID must not be empty".to_string()));
    }
    Ok(HouseId::from(value))
}

/// Validate a person argument.
pub(crate) fn parse_person(value: &str) -> Result<PersonId> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CliError::InvalidInput("Person ID must not be empty".to_string()));
    }
    Ok(PersonId::from(value))
}

/// Build the view of one house, or of every person when no house is given.
pub(crate) fn build_view(
    dataset: &Dataset,
    house: Option<&HouseId>,
    options: &ViewOptions,
) -> HouseView {
    match house {
        Some(house) => {
            if dataset.house(house).is_none() {
                tracing::warn!(house = %house, "house has no record");
            }
            HouseView::build(dataset, house, options)
        }
        None => HouseView::whole_population(dataset, options),
    }
}
