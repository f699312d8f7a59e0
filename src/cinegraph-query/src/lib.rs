//! Query layer for the Cinegraph movie catalog.
//!
//! This crate provides the read-oriented query engine over the immutable
//! entity graph from `cinegraph-core`:
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │ CatalogRepository│ ──▶ │    Traversal    │ ──▶ │    finalize     │
//! │ (typed queries)  │     │ (role walking)  │     │ (distinct/sort) │
//! └──────────────────┘     └─────────────────┘     └─────────────────┘
//!         │                        │
//!         ▼                        ▼
//!     Predicate              Catalog graph
//! ```
//!
//! # Key Components
//!
//! - [`Predicate`]: composable filter primitives (exact text match,
//!   calendar-year extraction, inclusive ranges, conjunction) evaluated
//!   against any [`Attributed`] entity
//! - [`RoleWalk`]: a declarative join path starting at the role table,
//!   with optional predicates at the role, film, country and director hops
//! - [`Traversal`]: executes walks against the catalog, seeding candidate
//!   roles from the adjacency indexes and emitting a result multiset
//! - [`finalize`]: collapses the multiset by identifier and applies the
//!   deterministic name/id ordering when requested
//! - [`CatalogRepository`]: one operation per supported question, mapping
//!   results to flat [`ActorRecord`] / [`DirectorRecord`] projections
//!
//! All queries are synchronous, side-effect-free reads; an empty result is
//! a successful answer, never an error.
//!
//! [`Predicate`]: predicate::Predicate
//! [`Attributed`]: predicate::Attributed
//! [`RoleWalk`]: plan::RoleWalk
//! [`Traversal`]: engine::Traversal
//! [`finalize`]: finalize::finalize
//! [`CatalogRepository`]: repository::CatalogRepository
//! [`ActorRecord`]: records::ActorRecord
//! [`DirectorRecord`]: records::DirectorRecord

pub mod engine;
pub mod finalize;
pub mod plan;
pub mod predicate;
pub mod records;
pub mod repository;

// Re-export commonly used types
pub use engine::Traversal;
pub use finalize::{distinct, finalize, sorted_by_name, Order};
pub use plan::RoleWalk;
pub use predicate::{all, text_eq, year_between, year_eq, Attr, Attributed, Predicate};
pub use records::{ActorRecord, DirectorRecord};
pub use repository::CatalogRepository;
