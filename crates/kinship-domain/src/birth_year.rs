//! Birth-year tokens and the shared birth ordering
//!
//! Genealogical dates are frequently incomplete, so birth years arrive as raw
//! string tokens ("900", "unknown", ""). A token is parsed once into a
//! [`BirthYear`]; everything that sorts people by age goes through
//! [`BirthKey`] / [`birth_order`], which define a total order:
//!
//! 1. known years ascending,
//! 2. then unknown tokens,
//! 3. ties (equal years, or both unknown) broken by person ID ascending.

use crate::{Person, PersonId};
use std::cmp::Ordering;
use std::fmt;

/// A parsed birth-year token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BirthYear {
    /// The token parsed as an integer year
    Known(i64),

    /// The token could not be parsed; the raw text is kept for display
    Unknown(String),
}

impl BirthYear {
    /// Parse a raw birth-year token
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::BirthYear;
    ///
    /// assert_eq!(BirthYear::parse(" 900 "), BirthYear::Known(900));
    /// assert!(!BirthYear::parse("unknown").is_known());
    /// ```
    pub fn parse(token: &str) -> Self {
        match token.trim().parse::<i64>() {
            Ok(year) => BirthYear::Known(year),
            Err(_) => BirthYear::Unknown(token.to_string()),
        }
    }

    /// The numeric year, if known
    pub fn year(&self) -> Option<i64> {
        match self {
            BirthYear::Known(year) => Some(*year),
            BirthYear::Unknown(_) => None,
        }
    }

    /// Whether the token parsed as a year
    pub fn is_known(&self) -> bool {
        matches!(self, BirthYear::Known(_))
    }
}

impl Default for BirthYear {
    fn default() -> Self {
        BirthYear::Unknown(String::new())
    }
}

impl fmt::Display for BirthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthYear::Known(year) => write!(f, "{}", year),
            BirthYear::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Sort key implementing the shared birth ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BirthKey<'a> {
    unknown: bool,
    year: i64,
    id: &'a PersonId,
}

impl<'a> BirthKey<'a> {
    /// Build a key from a person record
    pub fn of(person: &'a Person) -> Self {
        let id = &person.id;
        match person.date_of_birth.year() {
            Some(year) => Self { unknown: false, year, id },
            None => Self { unknown: true, year: 0, id },
        }
    }
}

/// Total birth ordering between two people (earliest born first)
pub fn birth_order(a: &Person, b: &Person) -> Ordering {
    BirthKey::of(a).cmp(&BirthKey::of(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(BirthYear::parse("945"), BirthYear::Known(945));
        assert_eq!(BirthYear::parse("-30"), BirthYear::Known(-30));
        assert_eq!(BirthYear::parse("unknown"), BirthYear::Unknown("unknown".to_string()));
        assert_eq!(BirthYear::parse(""), BirthYear::Unknown(String::new()));
        assert_eq!(BirthYear::parse("9x0").year(), None);
    }

    #[test]
    fn test_unknown_sorts_last() {
        let known = Person::new("z", None, "1200");
        let unknown = Person::new("a", None, "?");

        assert_eq!(birth_order(&known, &unknown), Ordering::Less);
        assert_eq!(birth_order(&unknown, &known), Ordering::Greater);
        // unknown tokens never compare equal across different people
        let other = Person::new("b", None, "n/a");
        assert_eq!(birth_order(&unknown, &other), Ordering::Less);
    }

    #[test]
    fn test_ties_broken_by_id() {
        let a = Person::new("a", None, "900");
        let b = Person::new("b", None, "900");
        assert_eq!(birth_order(&a, &b), Ordering::Less);

        let x = Person::new("x", None, "unknown");
        let y = Person::new("y", None, "");
        assert_eq!(birth_order(&y, &x), Ordering::Greater);
    }

    #[test]
    fn test_display_keeps_raw_token() {
        assert_eq!(BirthYear::parse("unknown").to_string(), "unknown");
        assert_eq!(BirthYear::parse(" 42").to_string(), "42");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn person_strategy() -> impl Strategy<Value = Person> {
        ("[a-e]{1,3}", prop_oneof!["-?[0-9]{1,4}", "unknown", ""])
            .prop_map(|(id, token)| Person::new(id.as_str(), None, &token))
    }

    proptest! {
        /// Property: birth ordering is antisymmetric
        #[test]
        fn test_order_antisymmetric(a in person_strategy(), b in person_strategy()) {
            prop_assert_eq!(birth_order(&a, &b), birth_order(&b, &a).reverse());
        }

        /// Property: sorting never panics and yields a non-decreasing sequence
        #[test]
        fn test_sort_is_total(mut people in proptest::collection::vec(person_strategy(), 0..20)) {
            people.sort_by(birth_order);
            for pair in people.windows(2) {
                prop_assert_ne!(birth_order(&pair[0], &pair[1]), Ordering::Greater);
            }
        }

        /// Property: a known year always precedes an unknown one
        #[test]
        fn test_known_before_unknown(year: i32, id_a in "[a-z]{1,4}", id_b in "[a-z]{1,4}") {
            let known = Person::new(id_a.as_str(), None, &year.to_string());
            let unknown = Person::new(id_b.as_str(), None, "unknown");
            prop_assert_eq!(birth_order(&known, &unknown), Ordering::Less);
        }
    }
}
