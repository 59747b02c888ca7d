//! Sensitive data marker for automatic redaction
//!
//! Lead and request records carry contact details. Wrapping them in
//! `Sensitive<T>` keeps them out of `Debug`/`Display` output (and so out of
//! logs) while still serializing the real value to storage.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use flyangt_core_types::Sensitive;
///
/// let email = Sensitive::new("pilot@example.com");
/// assert_eq!(format!("{:?}", email), "***REDACTED***");
/// assert_eq!(email.expose(), &"pilot@example.com");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Serialize> Serialize for Sensitive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sensitive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Sensitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_debug_redaction() {
        let secret = Sensitive::new("+7 900 000-00-00");
        let debug_str = format!("{:?}", secret);
        assert_eq!(debug_str, "***REDACTED***");
        assert!(!debug_str.contains("900"));
    }

    #[test]
    fn test_sensitive_in_struct_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Lead {
            id: String,
            email: Sensitive<String>,
        }

        let lead = Lead {
            id: "lead-1".to_string(),
            email: Sensitive::new("pilot@example.com".to_string()),
        };

        let debug_str = format!("{:?}", lead);
        assert!(debug_str.contains("lead-1"));
        assert!(!debug_str.contains("pilot@example.com"));
    }

    #[test]
    fn test_sensitive_serializes_transparently() {
        let email = Sensitive::new("pilot@example.com".to_string());
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"pilot@example.com\"");

        let back: Sensitive<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.expose(), "pilot@example.com");
    }
}
