//! Role representation.

use serde::{Deserialize, Serialize};

use super::{ActorId, FilmId};

/// The join entity recording that an actor played a character in a film.
///
/// A role never exists without both references resolved; `CatalogBuilder`
/// rejects roles pointing at missing actors or films.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Name of the character played.
    pub character: String,
    /// The performing actor.
    pub actor: ActorId,
    /// The film the performance belongs to.
    pub film: FilmId,
}

impl Role {
    /// Create a new role.
    pub fn new(
        character: impl Into<String>,
        actor: impl Into<ActorId>,
        film: impl Into<FilmId>,
    ) -> Self {
        Self {
            character: character.into(),
            actor: actor.into(),
            film: film.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_creation() {
        let role = Role::new("Harley Quinn", "nm3053338", "tt1386697");
        assert_eq!(role.character, "Harley Quinn");
        assert_eq!(role.actor, "nm3053338");
        assert_eq!(role.film, "tt1386697");
    }
}
