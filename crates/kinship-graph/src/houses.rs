//! House-parent relation: cadet inclusion and bounded ancestry

use kinship_domain::{House, HouseId};
use std::collections::HashSet;

/// Houses whose members count as house members for a scope query
///
/// The target house, plus its direct cadets when `include_cadets` is set.
/// Only one level is followed: cadets of cadets stay out.
pub fn houses_in_scope<'a>(
    target: &'a HouseId,
    houses: &'a [House],
    include_cadets: bool,
) -> HashSet<&'a HouseId> {
    let mut ids = HashSet::from([target]);
    if include_cadets {
        ids.extend(
            houses
                .iter()
                .filter(|house| house.is_cadet_of(target))
                .map(|house| &house.id),
        );
    }
    ids
}

/// Chain of parent houses above a house
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseAncestry {
    /// Parent, grandparent, ... (nearest first); excludes the starting house
    pub chain: Vec<HouseId>,

    /// A house reappeared while walking (the parent relation is cyclic)
    pub cycle: bool,

    /// The walk stopped at `max_depth` before reaching a main house
    pub truncated: bool,

    /// The last parent named in the chain has no house record
    pub dangling: bool,
}

/// Walk the parent relation upward from `house`, bounded by `max_depth`
pub fn house_ancestry(house: &HouseId, houses: &[House], max_depth: usize) -> HouseAncestry {
    let parent_of = |id: &HouseId| {
        houses
            .iter()
            .find(|h| &h.id == id)
            .map(|h| h.parent_house_id.clone())
    };

    let mut ancestry = HouseAncestry {
        chain: Vec::new(),
        cycle: false,
        truncated: false,
        dangling: false,
    };
    let mut seen: HashSet<HouseId> = HashSet::from([house.clone()]);
    let mut current = house.clone();

    loop {
        let parent = match parent_of(&current) {
            Some(Some(parent)) => parent,
            Some(None) => break,
            None => {
                ancestry.dangling = current != *house;
                break;
            }
        };
        if ancestry.chain.len() >= max_depth {
            ancestry.truncated = true;
            break;
        }
        if !seen.insert(parent.clone()) {
            ancestry.cycle = true;
            break;
        }
        ancestry.chain.push(parent.clone());
        current = parent;
    }

    ancestry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn houses() -> Vec<House> {
        vec![
            House::new("a"),
            House::cadet_of("b", "a"),
            House::cadet_of("c", "b"),
            House::cadet_of("d", "a"),
        ]
    }

    #[test]
    fn test_one_level_of_cadets() {
        let houses = houses();
        let target = HouseId::from("a");

        let with = houses_in_scope(&target, &houses, true);
        assert!(with.contains(&HouseId::from("a")));
        assert!(with.contains(&HouseId::from("b")));
        assert!(with.contains(&HouseId::from("d")));
        assert!(!with.contains(&HouseId::from("c")));

        let without = houses_in_scope(&target, &houses, false);
        assert_eq!(without.len(), 1);
    }

    #[test]
    fn test_ancestry_chain() {
        let ancestry = house_ancestry(&HouseId::from("c"), &houses(), 64);
        assert_eq!(ancestry.chain, vec![HouseId::from("b"), HouseId::from("a")]);
        assert!(!ancestry.cycle && !ancestry.truncated && !ancestry.dangling);
    }

    #[test]
    fn test_ancestry_cycle_terminates() {
        let houses = vec![House::cadet_of("x", "y"), House::cadet_of("y", "x")];
        let ancestry = house_ancestry(&HouseId::from("x"), &houses, 64);
        assert!(ancestry.cycle);
        assert_eq!(ancestry.chain, vec![HouseId::from("y")]);
    }

    #[test]
    fn test_ancestry_depth_bound() {
        let ancestry = house_ancestry(&HouseId::from("c"), &houses(), 1);
        assert!(ancestry.truncated);
        assert_eq!(ancestry.chain.len(), 1);
    }

    #[test]
    fn test_unknown_parent_is_dangling() {
        let houses = vec![House::cadet_of("x", "ghost")];
        let ancestry = house_ancestry(&HouseId::from("x"), &houses, 64);
        assert_eq!(ancestry.chain, vec![HouseId::from("ghost")]);
        assert!(ancestry.dangling);

        let houses = vec![House::cadet_of("x", "y"), House::cadet_of("y", "ghost")];
        let ancestry = house_ancestry(&HouseId::from("x"), &houses, 64);
        assert_eq!(ancestry.chain, vec![HouseId::from("y"), HouseId::from("ghost")]);
        assert!(ancestry.dangling);

        let ancestry = house_ancestry(&HouseId::from("missing"), &houses, 64);
        assert!(ancestry.chain.is_empty() && !ancestry.dangling);
    }
}
