//! Core data model for the Cinegraph movie catalog.
//!
//! This crate provides the fundamental types for the catalog entity graph:
//! - `Actor`, `Film`, `Role`, `Director`, `Country` entities
//! - `Catalog` as the immutable, fully-loaded graph container
//! - `CatalogBuilder` for validated construction with adjacency indexes
//! - `CatalogEntity` for the shared identity/display-name surface
//!
//! The graph is constructed once, before any query executes, and is never
//! mutated afterwards: `Catalog` exposes only `&self` reads.

pub mod catalog;
pub mod entity;
pub mod testing;

// Re-export commonly used types
pub use catalog::{
    Actor, ActorId, Catalog, CatalogBuilder, Country, CountryId, Director, DirectorId, Film,
    FilmId, Role, RoleIdx,
};
pub use entity::CatalogEntity;
