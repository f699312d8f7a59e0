//! Film representation.

use serde::{Deserialize, Serialize};

use super::{CountryId, DirectorId, FilmId};

/// A movie entity with a release year, countries of origin and directors.
///
/// Membership in `countries` and `directors` is the film-side half of the
/// two many-to-many relationships; `CatalogBuilder` mirrors it onto the
/// country and director entities so traversal from either side agrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// Unique film identifier.
    pub id: FilmId,
    /// Title.
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Countries of origin.
    pub countries: Vec<CountryId>,
    /// Directors.
    pub directors: Vec<DirectorId>,
}

impl Film {
    /// Create a new film with no countries or directors.
    pub fn new(id: impl Into<FilmId>, title: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            countries: Vec::new(),
            directors: Vec::new(),
        }
    }

    /// Add a country of origin.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<CountryId>) -> Self {
        self.countries.push(country.into());
        self
    }

    /// Add a director.
    #[must_use]
    pub fn with_director(mut self, director: impl Into<DirectorId>) -> Self {
        self.directors.push(director.into());
        self
    }

    /// Check whether the film originates from the given country.
    pub fn has_country(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    /// Check whether the film was directed by the given director.
    pub fn has_director(&self, director: &str) -> bool {
        self.directors.iter().any(|d| d == director)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_creation() {
        let film = Film::new("tt3659388", "The Martian", 2015)
            .with_country("us")
            .with_director("nm0000631");

        assert_eq!(film.year, 2015);
        assert!(film.has_country("us"));
        assert!(!film.has_country("fr"));
        assert!(film.has_director("nm0000631"));
    }

    #[test]
    fn test_film_without_associations() {
        let film = Film::new("tt0114369", "Se7en", 1995);
        assert!(film.countries.is_empty());
        assert!(!film.has_country("us"));
        assert!(!film.has_director("nm0000399"));
    }
}
