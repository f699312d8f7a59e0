//! Catalog loading for Cinegraph.
//!
//! This crate is the loading collaborator that populates the entity graph
//! before any query runs: it deserializes a JSON catalog document,
//! optionally drops records with dangling references (permissive mode),
//! and hands the rows to `CatalogBuilder` for validated construction.
//!
//! Loading happens once per process; the resulting `Catalog` is immutable.

pub mod document;
pub mod loader;

// Re-export commonly used types
pub use document::{
    ActorRow, CatalogDocument, CountryRow, DirectorRow, FilmRow, RoleRow,
};
pub use loader::{LoadOptions, Loader};
