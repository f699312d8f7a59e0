//! Actor representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ActorId;

/// A performer entity, the leaf most queries ultimately resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique actor identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Birth date, when known.
    pub birth_date: Option<NaiveDate>,
    /// Reference link, when known.
    pub url: Option<String>,
}

impl Actor {
    /// Create a new actor with no birth date or reference link.
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_date: None,
            url: None,
        }
    }

    /// Set the birth date.
    #[must_use]
    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Set the reference link.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_creation() {
        let actor = Actor::new("nm0000093", "Brad Pitt")
            .with_birth_date(NaiveDate::from_ymd_opt(1963, 12, 18).unwrap())
            .with_url("https://www.imdb.com/name/nm0000093/");

        assert_eq!(actor.id, "nm0000093");
        assert_eq!(actor.name, "Brad Pitt");
        assert!(actor.birth_date.is_some());
        assert!(actor.url.is_some());
    }

    #[test]
    fn test_actor_optional_fields_default_to_none() {
        let actor = Actor::new("nm9000001", "Aaron Ash");
        assert!(actor.birth_date.is_none());
        assert!(actor.url.is_none());
    }
}
