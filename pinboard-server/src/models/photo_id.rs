//! Photo id validation
//!
//! Ids are assigned by the provider and otherwise opaque: any non-empty
//! string is accepted.

use std::fmt;

use serde_json::Value;

use super::{FieldError, Location, ValidationError};

const FIELD: &str = "photoId";

/// Validated provider photo id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoId(String);

impl PhotoId {
    /// Create a photo id, rejecting empty strings.
    ///
    /// # Example
    /// ```
    /// use pinboard_server::models::PhotoId;
    ///
    /// assert!(PhotoId::new("Dwu85P9SOIk").is_ok());
    /// assert!(PhotoId::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: FIELD });
        }
        Ok(Self(s.to_owned()))
    }

    /// Read `photoId` out of a decoded JSON request body.
    ///
    /// A body that isn't an object counts as a missing field.
    pub fn from_body(body: &Value) -> Result<Self, FieldError> {
        let raw = body.get(FIELD).ok_or_else(|| {
            FieldError::new(Location::Body, ValidationError::Missing { field: FIELD }, None)
        })?;

        let s = raw.as_str().ok_or_else(|| {
            FieldError::new(
                Location::Body,
                ValidationError::NotAString { field: FIELD },
                Some(raw.clone()),
            )
        })?;

        Self::new(s).map_err(|e| FieldError::new(Location::Body, e, Some(raw.clone())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PhotoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
