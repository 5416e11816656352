//! Search query parameters
//!
//! `page` and `perPage` must look like decimal numbers. Once validated,
//! their integer part is used; anything that isn't a positive integer
//! falls back to the defaults.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::{FieldError, Location, ValidationError};

/// Page used when `page` has no positive integer part
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when `perPage` has no positive integer part
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Optional sign, optional integer part with a dot, then digits. No exponent.
static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("invalid numeric regex"));

/// Validated `/search` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

impl SearchParams {
    /// Validate raw query-string pairs.
    ///
    /// Every failing field is reported, in `query`, `page`, `perPage` order.
    pub fn from_query(raw: &HashMap<String, String>) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let query = match raw.get("query") {
            None => {
                errors.push(FieldError::new(
                    Location::Query,
                    ValidationError::Missing { field: "query" },
                    None,
                ));
                None
            }
            Some(q) if q.is_empty() => {
                errors.push(FieldError::new(
                    Location::Query,
                    ValidationError::Empty { field: "query" },
                    Some(Value::String(q.clone())),
                ));
                None
            }
            Some(q) => Some(q.clone()),
        };

        let page = numeric_param(raw, "page", DEFAULT_PAGE, &mut errors);
        let per_page = numeric_param(raw, "perPage", DEFAULT_PER_PAGE, &mut errors);

        match (query, page, per_page) {
            (Some(query), Some(page), Some(per_page)) if errors.is_empty() => Ok(Self {
                query,
                page,
                per_page,
            }),
            _ => Err(errors),
        }
    }
}

fn numeric_param(
    raw: &HashMap<String, String>,
    field: &'static str,
    default: u32,
    errors: &mut Vec<FieldError>,
) -> Option<u32> {
    let Some(value) = raw.get(field) else {
        errors.push(FieldError::new(
            Location::Query,
            ValidationError::Missing { field },
            None,
        ));
        return None;
    };

    if !is_numeric(value) {
        errors.push(FieldError::new(
            Location::Query,
            ValidationError::NotNumeric { field },
            Some(Value::String(value.clone())),
        ));
        return None;
    }

    Some(positive_int_or(value, default))
}

/// Whether `s` is a plain decimal number (`12`, `-3`, `+0.5`, `.5`).
pub fn is_numeric(s: &str) -> bool {
    NUMERIC_RE.is_match(s)
}

/// Integer part of a numeric string, or `default` when that part is
/// missing, zero, negative, or too large for a page number.
pub fn positive_int_or(s: &str, default: u32) -> u32 {
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = unsigned.split('.').next().unwrap_or_default();

    match digits.parse::<u32>() {
        Ok(n) if n > 0 && !negative => n,
        _ => default,
    }
}
