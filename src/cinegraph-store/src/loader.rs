//! Catalog loading from JSON documents.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use common_error::CatalogResult;
use tracing::{info, warn};

use cinegraph_core::{Actor, Catalog, CatalogBuilder, Country, Director, Film, Role};

use crate::document::CatalogDocument;

/// Loader configuration.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Whether a role referencing a missing actor or film fails the load.
    /// When `false`, such roles are dropped with a warning instead.
    /// Duplicate identifiers fail the load in either mode.
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl LoadOptions {
    /// Options that drop roles with dangling references instead of
    /// failing the load.
    pub fn permissive() -> Self {
        Self { strict: false }
    }
}

/// Loads catalog documents and builds the entity graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    options: LoadOptions,
}

impl Loader {
    /// Create a loader with strict reference validation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom options.
    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Load a catalog from a JSON string.
    pub fn from_str(&self, json: &str) -> CatalogResult<Catalog> {
        let document = serde_json::from_str(json)?;
        self.build(document)
    }

    /// Load a catalog from a reader.
    pub fn from_reader<R: Read>(&self, reader: R) -> CatalogResult<Catalog> {
        let document = serde_json::from_reader(reader)?;
        self.build(document)
    }

    /// Load a catalog from a file path.
    pub fn from_path(&self, path: impl AsRef<Path>) -> CatalogResult<Catalog> {
        let file = File::open(path.as_ref())?;
        self.from_reader(BufReader::new(file))
    }

    /// Build the entity graph from a deserialized document.
    pub fn build(&self, document: CatalogDocument) -> CatalogResult<Catalog> {
        let mut builder = CatalogBuilder::new();

        for row in &document.actors {
            let mut actor = Actor::new(&row.id, &row.name);
            actor.birth_date = row.birth_date;
            actor.url = row.url.clone();
            builder.add_actor(actor);
        }
        for row in &document.directors {
            builder.add_director(Director::new(&row.id, &row.name));
        }
        for row in &document.countries {
            builder.add_country(Country::new(&row.id, &row.name));
        }
        for row in &document.films {
            let mut film = Film::new(&row.id, &row.title, row.year);
            film.countries = row.countries.clone();
            film.directors = row.directors.clone();
            builder.add_film(film);
        }

        let mut skipped = 0usize;
        for row in &document.roles {
            if !self.options.strict && self.is_dangling(&document, row) {
                warn!(
                    character = %row.character,
                    actor = %row.actor,
                    film = %row.film,
                    "skipping role with dangling reference"
                );
                skipped += 1;
                continue;
            }
            builder.add_role(Role::new(&row.character, &row.actor, &row.film));
        }

        let catalog = builder.build()?;
        info!(
            actors = catalog.actor_count(),
            films = catalog.film_count(),
            roles = catalog.role_count(),
            skipped_roles = skipped,
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn is_dangling(&self, document: &CatalogDocument, role: &crate::document::RoleRow) -> bool {
        let actor_known = document.actors.iter().any(|a| a.id == role.actor);
        let film_known = document.films.iter().any(|f| f.id == role.film);
        !(actor_known && film_known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_error::CatalogError;

    const DOCUMENT: &str = r#"{
        "actors": [
            {"id": "nm0000354", "name": "Matt Damon", "birth_date": "1970-10-08"},
            {"id": "nm0000093", "name": "Brad Pitt"}
        ],
        "directors": [{"id": "nm0000631", "name": "Ridley Scott"}],
        "countries": [{"id": "us", "name": "United States"}],
        "films": [
            {"id": "tt3659388", "title": "The Martian", "year": 2015,
             "countries": ["us"], "directors": ["nm0000631"]}
        ],
        "roles": [
            {"character": "Mark Watney", "actor": "nm0000354", "film": "tt3659388"}
        ]
    }"#;

    #[test]
    fn test_load_document() {
        let catalog = Loader::new().from_str(DOCUMENT).unwrap();
        assert_eq!(catalog.actor_count(), 2);
        assert_eq!(catalog.film_count(), 1);
        assert_eq!(catalog.role_count(), 1);
        assert_eq!(
            catalog.actor("nm0000354").unwrap().birth_date.unwrap().to_string(),
            "1970-10-08"
        );
        // Mirrored membership is rebuilt at load time.
        assert_eq!(catalog.country("us").unwrap().films, vec!["tt3659388"]);
    }

    #[test]
    fn test_strict_load_rejects_dangling_role() {
        let json = r#"{
            "actors": [{"id": "a1", "name": "Someone"}],
            "roles": [{"character": "Ghost", "actor": "a1", "film": "missing"}]
        }"#;
        let err = Loader::new().from_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::Integrity(_)));
    }

    #[test]
    fn test_permissive_load_skips_dangling_role() {
        let json = r#"{
            "actors": [{"id": "a1", "name": "Someone"}],
            "films": [{"id": "f1", "title": "Kept", "year": 2000}],
            "roles": [
                {"character": "Ghost", "actor": "a1", "film": "missing"},
                {"character": "Kept", "actor": "a1", "film": "f1"}
            ]
        }"#;
        let catalog = Loader::with_options(LoadOptions::permissive())
            .from_str(json)
            .unwrap();
        assert_eq!(catalog.role_count(), 1);
        assert_eq!(catalog.roles()[0].character, "Kept");
    }

    #[test]
    fn test_duplicate_ids_fail_in_either_mode() {
        let json = r#"{
            "actors": [
                {"id": "a1", "name": "First"},
                {"id": "a1", "name": "Second"}
            ]
        }"#;
        assert!(Loader::new().from_str(json).is_err());
        assert!(Loader::with_options(LoadOptions::permissive())
            .from_str(json)
            .is_err());
    }

    #[test]
    fn test_malformed_json_is_a_serde_error() {
        let err = Loader::new().from_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::SerdeJsonError(_)));
    }
}
