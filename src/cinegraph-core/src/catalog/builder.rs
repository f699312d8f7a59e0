//! Validated construction of the catalog graph.

use std::collections::HashMap;

use common_error::{integrity_err, CatalogError, CatalogResult};
use tracing::info;

use super::{Actor, ActorId, Catalog, Country, Director, Film, FilmId, Role, RoleIdx};

/// One-shot builder for `Catalog`.
///
/// Collects entities in any order, then `build` enforces the graph
/// invariants:
///
/// - identifiers are unique within each collection
/// - every role references an existing actor and an existing film
/// - every film's country and director references resolve
/// - many-to-many membership is mirrored onto countries and directors,
///   so traversal from either side yields consistent results
///
/// Violations surface as `CatalogError::Integrity`; a catalog that builds
/// successfully is guaranteed consistent for the lifetime of the process.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    actors: Vec<Actor>,
    films: Vec<Film>,
    directors: Vec<Director>,
    countries: Vec<Country>,
    roles: Vec<Role>,
}

impl CatalogBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actor.
    pub fn add_actor(&mut self, actor: Actor) -> &mut Self {
        self.actors.push(actor);
        self
    }

    /// Add a film. Its country and director id lists are resolved and
    /// mirrored at build time.
    pub fn add_film(&mut self, film: Film) -> &mut Self {
        self.films.push(film);
        self
    }

    /// Add a director. Its `films` list is rebuilt from the film side.
    pub fn add_director(&mut self, director: Director) -> &mut Self {
        self.directors.push(director);
        self
    }

    /// Add a country. Its `films` list is rebuilt from the film side.
    pub fn add_country(&mut self, country: Country) -> &mut Self {
        self.countries.push(country);
        self
    }

    /// Add a role joining an actor to a film.
    pub fn add_role(&mut self, role: Role) -> &mut Self {
        self.roles.push(role);
        self
    }

    /// Validate the collected entities and assemble the catalog.
    pub fn build(self) -> CatalogResult<Catalog> {
        let actors = unique_by_id(self.actors, "actor", |a| a.id.clone())?;
        let directors = unique_by_id(self.directors, "director", |d| d.id.clone())?;
        let countries = unique_by_id(self.countries, "country", |c| c.id.clone())?;
        let mut films = unique_by_id(self.films, "film", |f| f.id.clone())?;

        // Resolve film-side membership and collect the mirrored lists.
        let mut films_by_country: HashMap<String, Vec<FilmId>> = HashMap::new();
        let mut films_by_director: HashMap<String, Vec<FilmId>> = HashMap::new();
        for film in films.values_mut() {
            dedup_in_order(&mut film.countries);
            dedup_in_order(&mut film.directors);
            for country in &film.countries {
                if !countries.contains_key(country) {
                    integrity_err!(
                        "film '{}' references unknown country '{}'",
                        film.id,
                        country
                    );
                }
                films_by_country
                    .entry(country.clone())
                    .or_default()
                    .push(film.id.clone());
            }
            for director in &film.directors {
                if !directors.contains_key(director) {
                    integrity_err!(
                        "film '{}' references unknown director '{}'",
                        film.id,
                        director
                    );
                }
                films_by_director
                    .entry(director.clone())
                    .or_default()
                    .push(film.id.clone());
            }
        }

        let mut countries = countries;
        for (id, films) in films_by_country {
            if let Some(country) = countries.get_mut(&id) {
                country.films = films;
            }
        }
        let mut directors = directors;
        for (id, films) in films_by_director {
            if let Some(director) = directors.get_mut(&id) {
                director.films = films;
            }
        }

        // Validate roles and build the adjacency indexes.
        let mut roles_by_actor: HashMap<ActorId, Vec<RoleIdx>> = HashMap::new();
        let mut roles_by_film: HashMap<FilmId, Vec<RoleIdx>> = HashMap::new();
        for (idx, role) in self.roles.iter().enumerate() {
            if !actors.contains_key(&role.actor) {
                integrity_err!(
                    "role '{}' references unknown actor '{}'",
                    role.character,
                    role.actor
                );
            }
            if !films.contains_key(&role.film) {
                integrity_err!(
                    "role '{}' references unknown film '{}'",
                    role.character,
                    role.film
                );
            }
            roles_by_actor.entry(role.actor.clone()).or_default().push(idx);
            roles_by_film.entry(role.film.clone()).or_default().push(idx);
        }

        let catalog = Catalog {
            actors,
            films,
            directors,
            countries,
            roles: self.roles,
            roles_by_actor,
            roles_by_film,
        };

        info!(
            actors = catalog.actor_count(),
            films = catalog.film_count(),
            directors = catalog.director_count(),
            countries = catalog.country_count(),
            roles = catalog.role_count(),
            "catalog built"
        );

        Ok(catalog)
    }
}

fn unique_by_id<T>(
    items: Vec<T>,
    kind: &str,
    id_of: impl Fn(&T) -> String,
) -> CatalogResult<HashMap<String, T>> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let id = id_of(&item);
        if map.insert(id.clone(), item).is_some() {
            return Err(CatalogError::integrity(format!(
                "duplicate {kind} id '{id}'"
            )));
        }
    }
    Ok(map)
}

fn dedup_in_order(ids: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}
