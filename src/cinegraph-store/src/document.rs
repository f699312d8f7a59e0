//! JSON catalog document model.
//!
//! The on-disk shape mirrors the entity graph: flat entity sections plus a
//! role section joining actors to films. Membership lists live on the film
//! rows; the mirrored sides are rebuilt at load time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level catalog document. All sections default to empty so partial
/// documents deserialize cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Actor rows.
    #[serde(default)]
    pub actors: Vec<ActorRow>,
    /// Film rows.
    #[serde(default)]
    pub films: Vec<FilmRow>,
    /// Director rows.
    #[serde(default)]
    pub directors: Vec<DirectorRow>,
    /// Country rows.
    #[serde(default)]
    pub countries: Vec<CountryRow>,
    /// Role rows.
    #[serde(default)]
    pub roles: Vec<RoleRow>,
}

/// A single actor row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorRow {
    /// Actor identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Birth date as `YYYY-MM-DD`, when known.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Reference link, when known.
    #[serde(default)]
    pub url: Option<String>,
}

/// A single film row carrying the film-side membership lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmRow {
    /// Film identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Country identifiers.
    #[serde(default)]
    pub countries: Vec<String>,
    /// Director identifiers.
    #[serde(default)]
    pub directors: Vec<String>,
}

/// A single director row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorRow {
    /// Director identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A single country row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRow {
    /// Country identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A single role row joining an actor to a film.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRow {
    /// Name of the character played.
    pub character: String,
    /// Actor identifier.
    pub actor: String,
    /// Film identifier.
    pub film: String,
}
