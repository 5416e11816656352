//! Validation error types

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Validation error for a single request field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent
    Missing { field: &'static str },

    /// Field is present but not a string
    NotAString { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field is not a decimal number
    NotNumeric { field: &'static str },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotAString { field }
            | Self::Empty { field }
            | Self::NotNumeric { field } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::NotAString { field } => write!(f, "{} must be a string", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NotNumeric { field } => write!(f, "{} must be numeric", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Where a request field was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Query,
}

/// Wire shape of one entry in a `{"errors": [...]}` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub location: Location,
    pub param: &'static str,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldError {
    pub fn new(location: Location, error: ValidationError, value: Option<Value>) -> Self {
        Self {
            location,
            param: error.field(),
            msg: error.to_string(),
            value,
        }
    }
}
