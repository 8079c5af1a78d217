use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque stable identifier for an entity within the source database.
///
/// Distinct from the externally visible record id (`I1`, `S2`, ...):
/// handles identify storage slots, record ids appear in the GEDCOM
/// output as `@id@` cross-references.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Handle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_is_transparent_in_json() {
        let handle = Handle::new("e4f2a1");
        let json = serde_json::to_string(&handle).unwrap();
        assert_eq!(json, "\"e4f2a1\"");
        let round: Handle = serde_json::from_str(&json).unwrap();
        assert_eq!(round, handle);
    }
}
