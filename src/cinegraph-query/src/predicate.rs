//! Composable filter predicates over catalog entities.
//!
//! Predicates are stateless, side-effect-free and infallible: an absent
//! attribute (e.g. a missing birth date) evaluates to `false` against any
//! predicate rather than failing.

use chrono::Datelike;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cinegraph_core::{Actor, Country, Director, Film, Role};

/// A single attribute value borrowed from an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attr<'a> {
    /// The entity carries no value for the requested attribute.
    Absent,
    /// A string attribute.
    Text(&'a str),
    /// An integer calendar-year attribute.
    Year(i32),
    /// A date attribute; year predicates extract its calendar year.
    Date(NaiveDate),
}

/// Attribute access used by predicate evaluation.
pub trait Attributed {
    /// Look up an attribute by key; unknown keys yield `Attr::Absent`.
    fn attribute(&self, key: &str) -> Attr<'_>;
}

impl Attributed for Actor {
    fn attribute(&self, key: &str) -> Attr<'_> {
        match key {
            "name" => Attr::Text(&self.name),
            "birth_date" => self.birth_date.map_or(Attr::Absent, Attr::Date),
            _ => Attr::Absent,
        }
    }
}

impl Attributed for Film {
    fn attribute(&self, key: &str) -> Attr<'_> {
        match key {
            "title" => Attr::Text(&self.title),
            "year" => Attr::Year(self.year),
            _ => Attr::Absent,
        }
    }
}

impl Attributed for Role {
    fn attribute(&self, key: &str) -> Attr<'_> {
        match key {
            "character" => Attr::Text(&self.character),
            _ => Attr::Absent,
        }
    }
}

impl Attributed for Director {
    fn attribute(&self, key: &str) -> Attr<'_> {
        match key {
            "name" => Attr::Text(&self.name),
            _ => Attr::Absent,
        }
    }
}

impl Attributed for Country {
    fn attribute(&self, key: &str) -> Attr<'_> {
        match key {
            "name" => Attr::Text(&self.name),
            _ => Attr::Absent,
        }
    }
}

/// A unary predicate over a single entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Case-sensitive full-string equality on a text attribute.
    TextEquals {
        /// Attribute key.
        attr: String,
        /// Expected value.
        value: String,
    },
    /// Calendar-year equality. Applies directly to `Year` attributes and
    /// extracts the year component from `Date` attributes.
    YearEquals {
        /// Attribute key.
        attr: String,
        /// Expected year.
        year: i32,
    },
    /// Inclusive calendar-year range (`low <= year <= high`).
    YearBetween {
        /// Attribute key.
        attr: String,
        /// Lower bound, inclusive.
        low: i32,
        /// Upper bound, inclusive.
        high: i32,
    },
    /// Logical AND over sub-predicates; the empty conjunction is true.
    All(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate this predicate against an entity.
    pub fn eval<E: Attributed>(&self, entity: &E) -> bool {
        match self {
            Self::TextEquals { attr, value } => match entity.attribute(attr) {
                Attr::Text(text) => text == value,
                _ => false,
            },
            Self::YearEquals { attr, year } => {
                year_of(entity.attribute(attr)) == Some(*year)
            }
            Self::YearBetween { attr, low, high } => {
                year_of(entity.attribute(attr)).is_some_and(|y| *low <= y && y <= *high)
            }
            Self::All(predicates) => predicates.iter().all(|p| p.eval(entity)),
        }
    }

    /// Combine with another predicate under logical AND, flattening nested
    /// conjunctions.
    #[must_use]
    pub fn and(self, other: Predicate) -> Predicate {
        match self {
            Self::All(mut predicates) => {
                predicates.push(other);
                Self::All(predicates)
            }
            p => Self::All(vec![p, other]),
        }
    }
}

/// Extract the calendar year carried by an attribute, if any.
fn year_of(attr: Attr<'_>) -> Option<i32> {
    match attr {
        Attr::Year(year) => Some(year),
        Attr::Date(date) => Some(date.year()),
        Attr::Absent | Attr::Text(_) => None,
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextEquals { attr, value } => write!(f, "{attr} = '{value}'"),
            Self::YearEquals { attr, year } => write!(f, "year({attr}) = {year}"),
            Self::YearBetween { attr, low, high } => {
                write!(f, "year({attr}) BETWEEN {low} AND {high}")
            }
            Self::All(predicates) => {
                let parts: Vec<_> = predicates.iter().map(ToString::to_string).collect();
                write!(f, "({})", parts.join(" AND "))
            }
        }
    }
}

/// Exact-match predicate on a text attribute.
pub fn text_eq(attr: impl Into<String>, value: impl Into<String>) -> Predicate {
    Predicate::TextEquals {
        attr: attr.into(),
        value: value.into(),
    }
}

/// Year-equality predicate.
pub fn year_eq(attr: impl Into<String>, year: i32) -> Predicate {
    Predicate::YearEquals {
        attr: attr.into(),
        year,
    }
}

/// Inclusive year-range predicate.
pub fn year_between(attr: impl Into<String>, low: i32, high: i32) -> Predicate {
    Predicate::YearBetween {
        attr: attr.into(),
        low,
        high,
    }
}

/// Conjunction of predicates.
pub fn all(predicates: Vec<Predicate>) -> Predicate {
    Predicate::All(predicates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_with_birth_date() -> Actor {
        Actor::new("nm0001837", "Marion Cotillard")
            .with_birth_date(NaiveDate::from_ymd_opt(1975, 9, 30).unwrap())
    }

    #[test]
    fn test_text_equality_is_exact_and_case_sensitive() {
        let actor = actor_with_birth_date();
        assert!(text_eq("name", "Marion Cotillard").eval(&actor));
        assert!(!text_eq("name", "marion cotillard").eval(&actor));
        assert!(!text_eq("name", "Marion").eval(&actor));
    }

    #[test]
    fn test_year_extraction_from_date() {
        let actor = actor_with_birth_date();
        assert!(year_eq("birth_date", 1975).eval(&actor));
        assert!(!year_eq("birth_date", 1976).eval(&actor));
    }

    #[test]
    fn test_absent_date_evaluates_false() {
        let actor = Actor::new("nm9000001", "Aaron Ash");
        assert!(!year_eq("birth_date", 1975).eval(&actor));
        assert!(!year_between("birth_date", 1900, 2100).eval(&actor));
    }

    #[test]
    fn test_year_on_integer_attribute() {
        let film = Film::new("tt3659388", "The Martian", 2015);
        assert!(year_eq("year", 2015).eval(&film));
        assert!(!year_eq("year", 2016).eval(&film));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let low = Film::new("f1", "Low", 2010);
        let mid = Film::new("f2", "Mid", 2015);
        let high = Film::new("f3", "High", 2020);
        let outside = Film::new("f4", "Outside", 2021);

        let range = year_between("year", 2010, 2020);
        assert!(range.eval(&low));
        assert!(range.eval(&mid));
        assert!(range.eval(&high));
        assert!(!range.eval(&outside));
    }

    #[test]
    fn test_conjunction() {
        let film = Film::new("tt0137523", "Fight Club", 1999);
        assert!(all(vec![text_eq("title", "Fight Club"), year_eq("year", 1999)]).eval(&film));
        assert!(!all(vec![text_eq("title", "Fight Club"), year_eq("year", 2000)]).eval(&film));
        // Empty conjunction is true.
        assert!(all(vec![]).eval(&film));
    }

    #[test]
    fn test_and_flattens() {
        let p = text_eq("title", "Fight Club")
            .and(year_eq("year", 1999))
            .and(year_between("year", 1990, 2000));
        match p {
            Predicate::All(parts) => assert_eq!(parts.len(), 3),
            other => panic!("expected flattened conjunction, got {other}"),
        }
    }

    #[test]
    fn test_unknown_attribute_is_absent() {
        let role = Role::new("Tyler Durden", "a1", "f1");
        assert!(!text_eq("name", "Tyler Durden").eval(&role));
        assert!(text_eq("character", "Tyler Durden").eval(&role));
    }

    #[test]
    fn test_display() {
        assert_eq!(text_eq("name", "France").to_string(), "name = 'France'");
        assert_eq!(
            year_between("year", 2010, 2020).to_string(),
            "year(year) BETWEEN 2010 AND 2020"
        );
        assert_eq!(
            all(vec![text_eq("name", "France"), year_eq("year", 2017)]).to_string(),
            "(name = 'France' AND year(year) = 2017)"
        );
    }
}
