//! Catalog entity graph.
//!
//! This module provides the catalog primitives:
//! - `Actor`, `Film`, `Role`, `Director`, `Country` entities
//! - `Catalog` as the read-only container with adjacency indexes
//! - `CatalogBuilder` for validated, one-shot construction

mod actor;
mod builder;
mod container;
mod country;
mod director;
mod film;
mod identifiers;
mod role;

pub use actor::Actor;
pub use builder::CatalogBuilder;
pub use container::Catalog;
pub use country::Country;
pub use director::Director;
pub use film::Film;
pub use identifiers::{ActorId, CountryId, DirectorId, FilmId, RoleIdx};
pub use role::Role;
