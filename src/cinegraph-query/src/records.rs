//! Flat output projections for query results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cinegraph_core::{Actor, Director};

/// Flat actor projection returned by repository operations.
///
/// Carries the actor's public fields and no relationships; produced only
/// as an output shape, never consumed as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRecord {
    /// Actor identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Birth date, when known.
    pub birth_date: Option<NaiveDate>,
    /// Reference link, when known.
    pub url: Option<String>,
}

impl From<&Actor> for ActorRecord {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.clone(),
            name: actor.name.clone(),
            birth_date: actor.birth_date,
            url: actor.url.clone(),
        }
    }
}

/// Flat director projection returned by the director query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorRecord {
    /// Director identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl From<&Director> for DirectorRecord {
    fn from(director: &Director) -> Self {
        Self {
            id: director.id.clone(),
            name: director.name.clone(),
        }
    }
}
