//! Director representation.

use serde::{Deserialize, Serialize};

use super::{DirectorId, FilmId};

/// A director entity associated with one or more films.
///
/// `films` is the mirrored side of `Film::directors`, maintained by
/// `CatalogBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    /// Unique director identifier.
    pub id: DirectorId,
    /// Display name.
    pub name: String,
    /// Films directed.
    pub films: Vec<FilmId>,
}

impl Director {
    /// Create a new director with no films.
    pub fn new(id: impl Into<DirectorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            films: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_creation() {
        let director = Director::new("nm0000631", "Ridley Scott");
        assert_eq!(director.name, "Ridley Scott");
        assert!(director.films.is_empty());
    }
}
