//! Newtype wrapper for workspace object references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque workspace object reference (UPA).
///
/// The internal structure of the reference (e.g. `"1/2/3"`) belongs to the
/// workspace naming scheme; this layer never parses or validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Upa(String);

impl Upa {
    /// Create a new Upa from a string.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Upa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Upa {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Upa {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upa_display() {
        let upa = Upa::new("11/22/33");
        assert_eq!(format!("{}", upa), "11/22/33");
    }

    #[test]
    fn test_upa_is_uninterpreted() {
        // Anything string-shaped is carried verbatim.
        let upa = Upa::from("not a real reference");
        assert_eq!(upa.as_str(), "not a real reference");
        assert_eq!(upa.into_inner(), "not a real reference");
    }

    #[test]
    fn test_upa_serde_transparent() {
        let upa = Upa::new("1/2/3");
        let encoded = serde_json::to_string(&upa).unwrap();
        assert_eq!(encoded, "\"1/2/3\"");
        let decoded: Upa = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, upa);
    }
}
