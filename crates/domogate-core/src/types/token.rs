//! Newtype wrapper for guest link tokens.
//!
//! A `LinkToken` is the bearer capability embedded in a guest URL:
//! possession of the token is both identification and authorization, so it
//! must come from a cryptographically strong random source. Generation
//! lives in `domogate-service`; this type only carries the value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, unguessable identifier of a guest share link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkToken(String);

impl LinkToken {
    /// Wrap an already-generated token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LinkToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LinkToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
