//! Shared identity surface for catalog entities.

use crate::catalog::{Actor, Country, Director, Film};

/// Common surface over the entities query results are expressed in.
///
/// `key` is the stable identifier used for deduplication and as the sort
/// tie-break; `name` is the display attribute used as the primary sort key.
pub trait CatalogEntity {
    /// Stable unique identifier within the entity's collection.
    fn key(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;
}

impl CatalogEntity for Actor {
    fn key(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntity for Director {
    fn key(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntity for Country {
    fn key(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntity for Film {
    fn key(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_keys_and_names() {
        let actor = Actor::new("nm0000093", "Brad Pitt");
        assert_eq!(actor.key(), "nm0000093");
        assert_eq!(actor.name(), "Brad Pitt");

        let film = Film::new("tt0137523", "Fight Club", 1999);
        assert_eq!(film.key(), "tt0137523");
        assert_eq!(film.name(), "Fight Club");
    }
}
