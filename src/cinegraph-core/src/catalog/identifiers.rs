//! Type identifiers for catalog entities.

/// Actor identifier (stable string key, e.g. an IMDB id like `nm0000093`).
pub type ActorId = String;

/// Film identifier.
pub type FilmId = String;

/// Director identifier.
pub type DirectorId = String;

/// Country identifier.
pub type CountryId = String;

/// Index into the catalog's role table.
///
/// A role is a join row between one actor and one film and carries no
/// natural key of its own; it is addressed by position.
pub type RoleIdx = usize;
