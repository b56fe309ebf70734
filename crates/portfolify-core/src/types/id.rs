//! Resource identifier type.

use serde::de::{self, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// An opaque identifier for a user or resource.
///
/// The backend issues string object ids, but numeric ids survive in older
/// payloads, so deserialization accepts either and normalizes to a string.
///
/// # Example
///
/// ```
/// use portfolify_core::Id;
///
/// let id = Id::new("64f1c9a2e13d5b0007a1b2c3").unwrap();
/// assert_eq!(id.as_str(), "64f1c9a2e13d5b0007a1b2c3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Id(String);

impl Id {
    /// Create a new id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains characters that
    /// cannot appear in a URL path segment.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        // Ids are embedded in request paths, so only accept characters
        // that cannot alter the route
        if s.is_empty() {
            return Err(InvalidInputError::Id {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        for c in s.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                return Err(InvalidInputError::Id {
                    value: s.to_string(),
                    reason: format!("contains invalid character '{}'", c),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Id {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(IdVisitor)
    }
}

struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = Id;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
        Id::new(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
        Ok(Id(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
        Id::new(v.to_string()).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_object_id() {
        let id = Id::new("64f1c9a2e13d5b0007a1b2c3").unwrap();
        assert_eq!(id.as_str(), "64f1c9a2e13d5b0007a1b2c3");
    }

    #[test]
    fn invalid_empty() {
        assert!(Id::new("").is_err());
    }

    #[test]
    fn invalid_path_separator() {
        assert!(Id::new("abc/def").is_err());
    }

    #[test]
    fn deserializes_string_id() {
        let id: Id = serde_json::from_str("\"64f1c9a2e13d5b0007a1b2c3\"").unwrap();
        assert_eq!(id.as_str(), "64f1c9a2e13d5b0007a1b2c3");
    }

    #[test]
    fn deserializes_numeric_id() {
        let id: Id = serde_json::from_str("1").unwrap();
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn serializes_as_string() {
        let id = Id::new("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
