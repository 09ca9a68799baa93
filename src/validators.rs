//! Ready-made validators
//!
//! Each function returns a [`Validator`] for use with
//! [`PropertyDescriptor::shared_validator`](crate::PropertyDescriptor::shared_validator).
//! Values of a kind a validator does not understand are rejected.
//!
//! ```
//! use propcfg::{validators, PropertyDescriptor};
//!
//! let port = PropertyDescriptor::integer(8080)
//!     .shared_validator(validators::range(1.0, 65535.0));
//!
//! let email = PropertyDescriptor::text("user@example.com")
//!     .shared_validator(validators::pattern(r"^[\w.-]+@[\w.-]+\.\w+$")?);
//! # let _ = (port, email);
//! # Ok::<(), propcfg::Error>(())
//! ```

use crate::config::Validator;
use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::Arc;

/// Numbers greater than or equal to `min`
pub fn min(min: f64) -> Validator {
    Arc::new(move |value: &Value| value.as_f64().is_some_and(|n| n >= min))
}

/// Numbers less than or equal to `max`
pub fn max(max: f64) -> Validator {
    Arc::new(move |value: &Value| value.as_f64().is_some_and(|n| n <= max))
}

/// Numbers within `min..=max`
pub fn range(min: f64, max: f64) -> Validator {
    Arc::new(move |value: &Value| value.as_f64().is_some_and(|n| (min..=max).contains(&n)))
}

/// Strings matching a regex
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if `pattern` is not a valid regex.
pub fn pattern(pattern: &str) -> Result<Validator> {
    let re = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Arc::new(move |value: &Value| {
        value.as_str().is_some_and(|text| re.is_match(text))
    }))
}

/// Values equal to one of `options`
pub fn one_of(options: Vec<Value>) -> Validator {
    Arc::new(move |value: &Value| options.contains(value))
}

/// Non-empty strings, arrays and objects
pub fn non_empty() -> Validator {
    Arc::new(|value: &Value| match value {
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    })
}

/// Values accepted by every validator in `validators`
pub fn all(validators: Vec<Validator>) -> Validator {
    Arc::new(move |value: &Value| validators.iter().all(|validator| validator(value)))
}
