//! Error types and result aliases for Cinegraph.
//!
//! This module provides the core error handling infrastructure shared by
//! every crate in the workspace.

mod error;

pub use error::{CatalogError, CatalogResult};
