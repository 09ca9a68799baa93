//! Property descriptors
//!
//! A [`PropertyDescriptor`] backs one declared property: its current value, the
//! kinds a write may carry, and an optional validator.
//!
//! ```
//! use propcfg::{PropertyDescriptor, ValueKind};
//!
//! let verbose = PropertyDescriptor::toggle(false);
//!
//! let output = PropertyDescriptor::toggle(true)
//!     .types([ValueKind::String, ValueKind::Boolean]);
//!
//! let retries = PropertyDescriptor::integer(3)
//!     .validator(|v| v.as_i64().is_some_and(|n| n >= 0));
//! # let _ = (verbose, output, retries);
//! ```

use crate::error::{Error, Result};
use crate::kind::ValueKind;
use serde_json::{Number, Value, json};
use std::fmt;
use std::sync::Arc;

/// Predicate gating writes beyond the kind check
///
/// Called with the candidate value after it passed the kind check. The store
/// is not locked while a validator runs, so a validator may read the store it
/// guards. A value written concurrently by another thread is not visible to the
/// validator's decision about the candidate.
pub type Validator = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Descriptor for a single configuration property
#[derive(Clone)]
pub struct PropertyDescriptor {
    /// Current value
    pub(crate) value: Value,

    /// Accepted kinds (empty: match the current value's kind)
    pub(crate) types: Vec<ValueKind>,

    /// Custom validator, shared with whoever declared it
    pub(crate) validator: Option<Validator>,
}

impl PropertyDescriptor {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a descriptor holding `value`
    ///
    /// `f64` values go through serde_json's conversion, which turns NaN and
    /// infinities into `null`. Use [`number`](Self::number) for floats.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            types: Vec::new(),
            validator: None,
        }
    }

    /// Boolean property
    pub fn toggle(default: bool) -> Self {
        Self::new(Value::Bool(default))
    }

    /// String property
    pub fn text(default: impl Into<String>) -> Self {
        Self::new(Value::String(default.into()))
    }

    /// Floating point property
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteNumber`](crate::Error::NonFiniteNumber) for NaN
    /// or an infinity, which JSON numbers cannot hold.
    pub fn number(default: impl Into<f64>) -> Result<Self> {
        let default = default.into();
        let number = Number::from_f64(default).ok_or(Error::NonFiniteNumber(default))?;
        Ok(Self::new(Value::Number(number)))
    }

    /// Integer property
    pub fn integer(default: i64) -> Self {
        Self::new(json!(default))
    }

    /// List-of-strings property
    pub fn list(default: &[String]) -> Self {
        Self::new(json!(default))
    }

    /// Property holding an arbitrary JSON value
    pub fn any(default: Value) -> Self {
        Self::new(default)
    }

    // =========================================================================
    // Constraint setters (builder pattern)
    // =========================================================================

    /// Restrict writes to the given kinds
    ///
    /// Duplicates are dropped. An empty list keeps the default policy of
    /// matching the current value's kind.
    #[must_use]
    pub fn types(mut self, kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        for kind in kinds {
            if !self.types.contains(&kind) {
                self.types.push(kind);
            }
        }
        self
    }

    /// Restrict writes to kinds given by name (`"string"`, `"boolean"`, ...)
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`](crate::Error::UnknownKind) for a name that
    /// is not a known kind.
    pub fn type_names(self, names: &[&str]) -> Result<Self> {
        let kinds = names
            .iter()
            .map(|name| name.parse::<ValueKind>())
            .collect::<Result<Vec<_>>>()?;
        Ok(self.types(kinds))
    }

    /// Attach a custom validator
    #[must_use]
    pub fn validator<F>(self, validator: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.shared_validator(Arc::new(validator))
    }

    /// Attach an already shared validator
    #[must_use]
    pub fn shared_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Explicitly declared kinds (may be empty)
    pub fn declared_types(&self) -> &[ValueKind] {
        &self.types
    }

    /// Check if a validator is attached
    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Kinds the next write is checked against
    ///
    /// Without an explicit list this is the kind of the *current* value, so it
    /// follows the value rather than the one it was declared with.
    pub fn accepted_kinds(&self) -> Vec<ValueKind> {
        if self.types.is_empty() {
            vec![ValueKind::of(&self.value)]
        } else {
            self.types.clone()
        }
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("value", &self.value)
            .field("types", &self.types)
            .field("validator", &self.validator.as_ref().map(|_| "Some(Fn)"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_constructors() {
        assert_eq!(PropertyDescriptor::toggle(false).value(), &json!(false));
        assert_eq!(PropertyDescriptor::text("dark").value(), &json!("dark"));
        assert_eq!(
            PropertyDescriptor::number(14.0).unwrap().value(),
            &json!(14.0)
        );
        assert_eq!(PropertyDescriptor::integer(10).value(), &json!(10));
        assert_eq!(
            PropertyDescriptor::list(&["a".to_string()]).value(),
            &json!(["a"])
        );
        assert_eq!(PropertyDescriptor::any(Value::Null).value(), &Value::Null);
    }

    #[test]
    fn test_number_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = PropertyDescriptor::number(bad).unwrap_err();
            assert!(err.is_non_finite());
        }

        let descriptor = PropertyDescriptor::number(1.5).unwrap();
        assert_eq!(descriptor.accepted_kinds(), vec![ValueKind::Number]);
    }

    #[test]
    fn test_types_dedup() {
        let descriptor = PropertyDescriptor::toggle(true).types([
            ValueKind::String,
            ValueKind::Boolean,
            ValueKind::String,
        ]);
        assert_eq!(
            descriptor.declared_types(),
            &[ValueKind::String, ValueKind::Boolean]
        );
    }

    #[test]
    fn test_type_names() {
        let descriptor = PropertyDescriptor::toggle(true)
            .type_names(&["string", "boolean"])
            .unwrap();
        assert_eq!(
            descriptor.accepted_kinds(),
            vec![ValueKind::String, ValueKind::Boolean]
        );

        assert!(PropertyDescriptor::toggle(true)
            .type_names(&["str"])
            .is_err());
    }

    #[test]
    fn test_accepted_kinds_follow_current_value() {
        let mut descriptor = PropertyDescriptor::toggle(false);
        assert_eq!(descriptor.accepted_kinds(), vec![ValueKind::Boolean]);

        descriptor.value = json!("now a string");
        assert_eq!(descriptor.accepted_kinds(), vec![ValueKind::String]);
    }

    #[test]
    fn test_validator_is_shared() {
        let validator: Validator = Arc::new(|v: &Value| v.as_f64().is_some_and(|n| n >= 0.0));
        let a = PropertyDescriptor::integer(1).shared_validator(Arc::clone(&validator));
        let b = a.clone();

        assert!(a.has_validator());
        assert_eq!(Arc::strong_count(&validator), 3);
        drop(b);
        assert_eq!(Arc::strong_count(&validator), 2);
    }

    #[test]
    fn test_debug_hides_validator() {
        let descriptor = PropertyDescriptor::integer(1).validator(|_| true);
        let debug = format!("{descriptor:?}");
        assert!(debug.contains("Some(Fn)"));
    }
}
