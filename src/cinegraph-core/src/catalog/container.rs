//! Catalog container - the read-only entity graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Actor, ActorId, Country, CountryId, Director, DirectorId, Film, FilmId, Role, RoleIdx};

/// The fully-loaded, immutable movie catalog graph.
///
/// A `Catalog` holds every entity collection keyed by identifier, the role
/// table joining actors to films, and the adjacency indexes built once at
/// construction time. All methods take `&self`; nothing is created,
/// mutated or destroyed after `CatalogBuilder::build` returns.
///
/// Because the container owns plain data it is `Send + Sync`, and any
/// number of queries may run concurrently without coordination.
///
/// ## Example
///
/// ```rust
/// use cinegraph_core::{Actor, CatalogBuilder, Film, Role};
///
/// let mut builder = CatalogBuilder::new();
/// builder.add_actor(Actor::new("nm1", "Ada Aster"));
/// builder.add_film(Film::new("tt1", "First Light", 2019));
/// builder.add_role(Role::new("The Pilot", "nm1", "tt1"));
/// let catalog = builder.build().unwrap();
///
/// assert_eq!(catalog.actor_count(), 1);
/// assert_eq!(catalog.roles_of_film("tt1").len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub(super) actors: HashMap<ActorId, Actor>,
    pub(super) films: HashMap<FilmId, Film>,
    pub(super) directors: HashMap<DirectorId, Director>,
    pub(super) countries: HashMap<CountryId, Country>,
    /// Role table; roles are addressed by index.
    pub(super) roles: Vec<Role>,
    /// Adjacency index: actor id to the roles it performs.
    pub(super) roles_by_actor: HashMap<ActorId, Vec<RoleIdx>>,
    /// Adjacency index: film id to the roles it contains.
    pub(super) roles_by_film: HashMap<FilmId, Vec<RoleIdx>>,
}

impl Catalog {
    /// Get an actor by identifier.
    pub fn actor(&self, id: &str) -> Option<&Actor> {
        self.actors.get(id)
    }

    /// Get a film by identifier.
    pub fn film(&self, id: &str) -> Option<&Film> {
        self.films.get(id)
    }

    /// Get a director by identifier.
    pub fn director(&self, id: &str) -> Option<&Director> {
        self.directors.get(id)
    }

    /// Get a country by identifier.
    pub fn country(&self, id: &str) -> Option<&Country> {
        self.countries.get(id)
    }

    /// Get a role by index.
    pub fn role(&self, idx: RoleIdx) -> Option<&Role> {
        self.roles.get(idx)
    }

    /// Iterate over all actors.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// Iterate over all films.
    pub fn films(&self) -> impl Iterator<Item = &Film> {
        self.films.values()
    }

    /// Iterate over all directors.
    pub fn directors(&self) -> impl Iterator<Item = &Director> {
        self.directors.values()
    }

    /// Iterate over all countries.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    /// The full role table.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Roles performed by the given actor.
    pub fn roles_of_actor(&self, actor: &str) -> &[RoleIdx] {
        self.roles_by_actor.get(actor).map_or(&[], Vec::as_slice)
    }

    /// Roles contained in the given film.
    pub fn roles_of_film(&self, film: &str) -> &[RoleIdx] {
        self.roles_by_film.get(film).map_or(&[], Vec::as_slice)
    }

    /// Number of actors in the catalog.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Number of films in the catalog.
    pub fn film_count(&self) -> usize {
        self.films.len()
    }

    /// Number of directors in the catalog.
    pub fn director_count(&self) -> usize {
        self.directors.len()
    }

    /// Number of countries in the catalog.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of roles in the catalog.
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}
