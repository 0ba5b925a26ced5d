//! Domain identifier types with validation
//!
//! This module provides a newtype wrapper for instrument identifiers.
//! The store assigns identity; this type only guarantees that an identifier
//! taken from a request path is non-empty before it reaches the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instrument identifier newtype wrapper
///
/// Represents the store-assigned identity of an instrument record
/// (the `_id` field of the document).
///
/// # Examples
///
/// ```
/// use bandstand::domain::ids::InstrumentId;
/// use std::str::FromStr;
///
/// let id = InstrumentId::from_str("instrument_accordion_hohner").unwrap();
/// assert_eq!(id.as_str(), "instrument_accordion_hohner");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentId(String);

impl InstrumentId {
    /// Creates a new InstrumentId from a string
    ///
    /// # Arguments
    ///
    /// * `id` - The instrument identifier string
    ///
    /// # Returns
    ///
    /// Returns `Ok(InstrumentId)` if the ID is non-empty, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Instrument ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the instrument ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InstrumentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for InstrumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
