//! Repository facade: one operation per supported question.

use common_error::{CatalogError, CatalogResult};

use cinegraph_core::Catalog;

use crate::engine::Traversal;
use crate::finalize::{finalize, Order};
use crate::plan::RoleWalk;
use crate::predicate::{text_eq, year_between, year_eq};
use crate::records::{ActorRecord, DirectorRecord};

/// The stable set of catalog query operations.
///
/// Each operation validates its parameters, assembles a predicate/walk
/// plan, delegates to [`Traversal`] and [`finalize`], and maps the result
/// to flat output records. An empty result sequence is a successful
/// answer; only malformed input fails, before any traversal begins.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRepository<'a> {
    engine: Traversal<'a>,
}

impl<'a> CatalogRepository<'a> {
    /// Create a repository over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            engine: Traversal::new(catalog),
        }
    }

    /// All actors, ascending by name with the id tie-break.
    pub fn actors_sorted_by_name(&self) -> CatalogResult<Vec<ActorRecord>> {
        let actors = self.engine.actors_matching(None);
        Ok(to_actor_records(finalize(actors, Order::ByName)))
    }

    /// The actor with exactly the given name, if any. When several actors
    /// share the name, the one with the smallest identifier is returned.
    pub fn actor_by_name(&self, name: &str) -> CatalogResult<Option<ActorRecord>> {
        require_param(name, "name")?;
        let predicate = text_eq("name", name);
        let matches = finalize(self.engine.actors_matching(Some(&predicate)), Order::ByName);
        Ok(matches.first().map(|actor| ActorRecord::from(*actor)))
    }

    /// Actors born in the given calendar year. Actors without a recorded
    /// birth date never match.
    pub fn actors_by_birth_year(&self, year: i32) -> CatalogResult<Vec<ActorRecord>> {
        let predicate = year_eq("birth_date", year);
        let actors = self.engine.actors_matching(Some(&predicate));
        Ok(to_actor_records(finalize(actors, Order::Unordered)))
    }

    /// Distinct actors who played the given character in any film.
    pub fn actors_by_role(&self, character: &str) -> CatalogResult<Vec<ActorRecord>> {
        require_param(character, "character")?;
        let walk = RoleWalk::new().with_role(text_eq("character", character));
        self.run_role_walk(&walk)
    }

    /// Distinct actors appearing in films released in the given year.
    pub fn actors_by_film_year(&self, year: i32) -> CatalogResult<Vec<ActorRecord>> {
        let walk = RoleWalk::new().with_film(year_eq("year", year));
        self.run_role_walk(&walk)
    }

    /// Distinct actors appearing in films from the given country.
    pub fn actors_by_country(&self, country: &str) -> CatalogResult<Vec<ActorRecord>> {
        require_param(country, "country")?;
        let walk = RoleWalk::new().with_country(text_eq("name", country));
        self.run_role_walk(&walk)
    }

    /// Distinct actors appearing in films from the given country released
    /// in the given year.
    pub fn actors_by_country_and_year(
        &self,
        country: &str,
        year: i32,
    ) -> CatalogResult<Vec<ActorRecord>> {
        require_param(country, "country")?;
        let walk = RoleWalk::new()
            .with_country(text_eq("name", country))
            .with_film(year_eq("year", year));
        self.run_role_walk(&walk)
    }

    /// Distinct actors appearing in films by the given director released
    /// within the inclusive year range.
    pub fn actors_by_director_between(
        &self,
        director: &str,
        low: i32,
        high: i32,
    ) -> CatalogResult<Vec<ActorRecord>> {
        require_param(director, "director")?;
        let walk = RoleWalk::new()
            .with_director(text_eq("name", director))
            .with_film(year_between("year", low, high));
        self.run_role_walk(&walk)
    }

    /// Distinct directors of any film the given actor appeared in.
    pub fn directors_by_actor(&self, name: &str) -> CatalogResult<Vec<DirectorRecord>> {
        require_param(name, "name")?;
        let directors = self.engine.directors_via_actor(&text_eq("name", name))?;
        Ok(finalize(directors, Order::Unordered)
            .into_iter()
            .map(DirectorRecord::from)
            .collect())
    }

    fn run_role_walk(&self, walk: &RoleWalk) -> CatalogResult<Vec<ActorRecord>> {
        let actors = self.engine.actors_via_roles(walk)?;
        Ok(to_actor_records(finalize(actors, Order::Unordered)))
    }
}

fn to_actor_records(actors: Vec<&cinegraph_core::Actor>) -> Vec<ActorRecord> {
    actors.into_iter().map(ActorRecord::from).collect()
}

fn require_param(value: &str, what: &str) -> CatalogResult<()> {
    if value.is_empty() {
        return Err(CatalogError::invalid_parameter(format!(
            "{what} must not be empty"
        )));
    }
    Ok(())
}
