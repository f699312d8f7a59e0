//! Traversal execution over the catalog graph.

use common_error::{CatalogError, CatalogResult};
use tracing::debug;

use cinegraph_core::{Actor, Catalog, Director, Film, RoleIdx};

use crate::plan::RoleWalk;
use crate::predicate::Predicate;

/// Executes walk plans against a borrowed catalog.
///
/// Traversal emits multisets: an actor reachable through several matching
/// roles or films appears once per path. Deduplication is deliberately
/// left to [`crate::finalize`] so the two concerns stay independently
/// testable.
#[derive(Debug, Clone, Copy)]
pub struct Traversal<'a> {
    catalog: &'a Catalog,
}

impl<'a> Traversal<'a> {
    /// Create a traversal over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Collect actors satisfying the predicate; `None` selects all actors.
    pub fn actors_matching(&self, predicate: Option<&Predicate>) -> Vec<&'a Actor> {
        self.catalog
            .actors()
            .filter(|actor| predicate.map_or(true, |p| p.eval(*actor)))
            .collect()
    }

    /// Walk the role table and emit the actors of every role whose path
    /// satisfies all hop predicates.
    ///
    /// Candidate roles are seeded from the adjacency indexes when a
    /// selective hop is present, so the full role table is only scanned
    /// for walks constrained at the role hop alone.
    pub fn actors_via_roles(&self, walk: &RoleWalk) -> CatalogResult<Vec<&'a Actor>> {
        let candidates = self.seed_roles(walk);
        debug!(candidates = candidates.len(), walk = %walk, "seeded role candidates");

        let mut emitted = Vec::new();
        for idx in candidates {
            let role = self
                .catalog
                .role(idx)
                .ok_or_else(|| CatalogError::internal(format!("missing role index {idx}")))?;
            if !walk.role.as_ref().map_or(true, |p| p.eval(role)) {
                continue;
            }

            let film = self.resolve_film(&role.film)?;
            if !walk.film.as_ref().map_or(true, |p| p.eval(film)) {
                continue;
            }
            if let Some(predicate) = &walk.country {
                if !self.any_country_matches(film, predicate) {
                    continue;
                }
            }
            if let Some(predicate) = &walk.director {
                if !self.any_director_matches(film, predicate) {
                    continue;
                }
            }

            let actor = self.catalog.actor(&role.actor).ok_or_else(|| {
                CatalogError::internal(format!("role references missing actor '{}'", role.actor))
            })?;
            emitted.push(actor);
        }
        Ok(emitted)
    }

    /// Reverse walk: from matching actors through their roles to the
    /// directors of the films they appeared in.
    pub fn directors_via_actor(&self, predicate: &Predicate) -> CatalogResult<Vec<&'a Director>> {
        let mut emitted = Vec::new();
        for actor in self.actors_matching(Some(predicate)) {
            for &idx in self.catalog.roles_of_actor(&actor.id) {
                let role = self.catalog.role(idx).ok_or_else(|| {
                    CatalogError::internal(format!("missing role index {idx}"))
                })?;
                let film = self.resolve_film(&role.film)?;
                for director_id in &film.directors {
                    let director = self.catalog.director(director_id).ok_or_else(|| {
                        CatalogError::internal(format!(
                            "film '{}' references missing director '{director_id}'",
                            film.id
                        ))
                    })?;
                    emitted.push(director);
                }
            }
        }
        Ok(emitted)
    }

    /// Seed candidate role indexes, narrowing through the most selective
    /// available hop: country and director filters reach roles through the
    /// membership lists and the film-to-roles index; a film filter goes
    /// through the film collection; otherwise the whole role table is the
    /// candidate set.
    fn seed_roles(&self, walk: &RoleWalk) -> Vec<RoleIdx> {
        let mut candidates: Vec<RoleIdx> = if let Some(predicate) = &walk.country {
            self.catalog
                .countries()
                .filter(|country| predicate.eval(*country))
                .flat_map(|country| country.films.iter())
                .flat_map(|film| self.catalog.roles_of_film(film))
                .copied()
                .collect()
        } else if let Some(predicate) = &walk.director {
            self.catalog
                .directors()
                .filter(|director| predicate.eval(*director))
                .flat_map(|director| director.films.iter())
                .flat_map(|film| self.catalog.roles_of_film(film))
                .copied()
                .collect()
        } else if let Some(predicate) = &walk.film {
            self.catalog
                .films()
                .filter(|film| predicate.eval(*film))
                .flat_map(|film| self.catalog.roles_of_film(&film.id))
                .copied()
                .collect()
        } else {
            (0..self.catalog.role_count()).collect()
        };

        // A role may be seeded through several paths; each role is a
        // candidate at most once.
        candidates.sort_unstable();
        candidates.dedup();
        candidates
    }

    fn resolve_film(&self, film_id: &str) -> CatalogResult<&'a Film> {
        self.catalog.film(film_id).ok_or_else(|| {
            CatalogError::internal(format!("role references missing film '{film_id}'"))
        })
    }

    fn any_country_matches(&self, film: &Film, predicate: &Predicate) -> bool {
        film.countries
            .iter()
            .any(|id| self.catalog.country(id).is_some_and(|c| predicate.eval(c)))
    }

    fn any_director_matches(&self, film: &Film, predicate: &Predicate) -> bool {
        film.directors
            .iter()
            .any(|id| self.catalog.director(id).is_some_and(|d| predicate.eval(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{text_eq, year_eq};
    use cinegraph_core::testing::movie_catalog;

    #[test]
    fn test_actors_matching_all() {
        let catalog = movie_catalog();
        let traversal = Traversal::new(&catalog);
        assert_eq!(traversal.actors_matching(None).len(), 11);
    }

    #[test]
    fn test_walk_by_role_character() {
        let catalog = movie_catalog();
        let traversal = Traversal::new(&catalog);

        let walk = RoleWalk::new().with_role(text_eq("character", "Harley Quinn"));
        let actors = traversal.actors_via_roles(&walk).unwrap();
        assert_eq!(actors.len(), 1);
        assert_eq!(actors[0].name, "Margot Robbie");
    }

    #[test]
    fn test_walk_emits_multiset() {
        let catalog = movie_catalog();
        let traversal = Traversal::new(&catalog);

        // France reaches Jean Dujardin and Marion Cotillard through two
        // films each and Brad Pitt through one; duplicates survive the
        // traversal and are collapsed downstream.
        let walk = RoleWalk::new().with_country(text_eq("name", "France"));
        let actors = traversal.actors_via_roles(&walk).unwrap();
        assert_eq!(actors.len(), 5);
    }

    #[test]
    fn test_film_with_no_countries_never_matches_country_hop() {
        let catalog = movie_catalog();
        let traversal = Traversal::new(&catalog);

        // Morgan Freeman only appears in Se7en, which has no countries.
        let walk = RoleWalk::new().with_country(text_eq("name", "United States"));
        let actors = traversal.actors_via_roles(&walk).unwrap();
        assert!(actors.iter().all(|a| a.name != "Morgan Freeman"));
    }

    #[test]
    fn test_seeding_through_film_year() {
        let catalog = movie_catalog();
        let traversal = Traversal::new(&catalog);

        let walk = RoleWalk::new().with_film(year_eq("year", 2017));
        let actors = traversal.actors_via_roles(&walk).unwrap();
        // All the Money in the World, Le Redoutable, Blade Runner 2049.
        assert_eq!(actors.len(), 4);
    }

    #[test]
    fn test_directors_via_actor_preserves_fan_out() {
        let catalog = movie_catalog();
        let traversal = Traversal::new(&catalog);

        // Brad Pitt: Scott once, Fincher twice (Fight Club and Se7en).
        let directors = traversal
            .directors_via_actor(&text_eq("name", "Brad Pitt"))
            .unwrap();
        assert_eq!(directors.len(), 3);
    }

    #[test]
    fn test_unknown_country_yields_empty() {
        let catalog = movie_catalog();
        let traversal = Traversal::new(&catalog);

        let walk = RoleWalk::new().with_country(text_eq("name", "Atlantis"));
        assert!(traversal.actors_via_roles(&walk).unwrap().is_empty());
    }
}
