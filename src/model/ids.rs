use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier. Users carry uids issued by the authentication
/// provider; standalone contacts get locally generated ones. A contact's
/// uid may literally be a user's uid, so all ids share one string space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(String);

impl Uid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh local id for entities the provider never sees.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_creates_unique_ids() {
        let id1 = Uid::generate();
        let id2 = Uid::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn provider_ids_compare_by_value() {
        let id1 = Uid::new("fq1e3Q5ZshWuOvAKZrIO3JgJNio2");
        let id2 = Uid::new("fq1e3Q5ZshWuOvAKZrIO3JgJNio2");
        assert_eq!(id1, id2);
    }

    #[test]
    fn serde_roundtrip_is_transparent() {
        let id = Uid::new("abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");
        let deserialized: Uid = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
