//! Country representation.

use serde::{Deserialize, Serialize};

use super::{CountryId, FilmId};

/// A geographic origin entity associated with one or more films.
///
/// `films` is the mirrored side of `Film::countries`, maintained by
/// `CatalogBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Unique country identifier.
    pub id: CountryId,
    /// Display name.
    pub name: String,
    /// Films originating from this country.
    pub films: Vec<FilmId>,
}

impl Country {
    /// Create a new country with no films.
    pub fn new(id: impl Into<CountryId>, name: impl Into<String>) -> Self {
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
    fn test_country_creation() {
        let country = Country::new("fr", "France");
        assert_eq!(country.id, "fr");
        assert_eq!(country.name, "France");
        assert!(country.films.is_empty());
    }
}
