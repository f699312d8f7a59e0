//! Walk plans for role-based traversal.

use serde::{Deserialize, Serialize};

use crate::predicate::Predicate;

/// A declarative join path starting at the role table.
///
/// The role table is the only path between actors and films, so every
/// multi-hop question is expressed as a walk outward from roles: resolve
/// the role's film, then check the film's countries and directors against
/// the hop predicates. Hops without a predicate are unconstrained; the
/// empty walk matches every role.
///
/// The country and director hops are membership checks: they are satisfied
/// when ANY associated entity matches, and a film with zero associations
/// never satisfies them (vacuous non-match, not an error).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleWalk {
    /// Predicate on the role join row itself.
    pub role: Option<Predicate>,
    /// Predicate on the resolved film.
    pub film: Option<Predicate>,
    /// Predicate on the film's countries of origin.
    pub country: Option<Predicate>,
    /// Predicate on the film's directors.
    pub director: Option<Predicate>,
}

impl RoleWalk {
    /// Create an unconstrained walk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the role hop. Repeated calls combine under AND.
    #[must_use]
    pub fn with_role(mut self, predicate: Predicate) -> Self {
        self.role = merge(self.role, predicate);
        self
    }

    /// Constrain the film hop. Repeated calls combine under AND.
    #[must_use]
    pub fn with_film(mut self, predicate: Predicate) -> Self {
        self.film = merge(self.film, predicate);
        self
    }

    /// Constrain the country hop. Repeated calls combine under AND.
    #[must_use]
    pub fn with_country(mut self, predicate: Predicate) -> Self {
        self.country = merge(self.country, predicate);
        self
    }

    /// Constrain the director hop. Repeated calls combine under AND.
    #[must_use]
    pub fn with_director(mut self, predicate: Predicate) -> Self {
        self.director = merge(self.director, predicate);
        self
    }
}

fn merge(existing: Option<Predicate>, incoming: Predicate) -> Option<Predicate> {
    Some(match existing {
        None => incoming,
        Some(p) => p.and(incoming),
    })
}

impl std::fmt::Display for RoleWalk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(p) = &self.role {
            parts.push(format!("role: {p}"));
        }
        if let Some(p) = &self.film {
            parts.push(format!("film: {p}"));
        }
        if let Some(p) = &self.country {
            parts.push(format!("country: {p}"));
        }
        if let Some(p) = &self.director {
            parts.push(format!("director: {p}"));
        }
        write!(f, "RoleWalk({})", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{text_eq, year_eq, Predicate};

    #[test]
    fn test_empty_walk_has_no_constraints() {
        let walk = RoleWalk::new();
        assert!(walk.role.is_none());
        assert!(walk.film.is_none());
        assert!(walk.country.is_none());
        assert!(walk.director.is_none());
    }

    #[test]
    fn test_repeated_film_constraints_combine() {
        let walk = RoleWalk::new()
            .with_film(year_eq("year", 2017))
            .with_film(text_eq("title", "Le Redoutable"));

        match walk.film {
            Some(Predicate::All(parts)) => assert_eq!(parts.len(), 2),
            other => panic!("expected conjunction, got {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        let walk = RoleWalk::new()
            .with_country(text_eq("name", "France"))
            .with_film(year_eq("year", 2017));
        assert_eq!(
            walk.to_string(),
            "RoleWalk(film: year(year) = 2017, country: name = 'France')"
        );
    }
}
