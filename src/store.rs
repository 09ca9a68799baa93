//! The configuration store
//!
//! [`ConfigStore`] holds a fixed set of declared properties. Reads return
//! copies of current values; writes go through three checks, always in this
//! order:
//!
//! 1. the name must be declared ([`Error::NotFound`])
//! 2. the value's kind must be accepted ([`Error::TypeMismatch`])
//! 3. the validator, if any, must return `true` ([`Error::Validation`])
//!
//! A write that fails a check leaves the stored value untouched.

use crate::config::{ConfigSchema, PropertyDescriptor};
use crate::error::{Error, Result};
use crate::kind::{self, ValueKind};
use crate::sync::RwLockExt;

use log::debug;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

/// Store of declared configuration properties
///
/// # Example
///
/// ```
/// use propcfg::{properties, ConfigStore, PropertyDescriptor};
/// use serde_json::json;
///
/// let store = ConfigStore::new(properties! {
///     "a" => PropertyDescriptor::toggle(false),
/// });
///
/// assert_eq!(store.get("a")?, json!(false));
/// store.set("a", true)?;
/// assert_eq!(store.get("a")?, json!(true));
///
/// assert!(store.set("a", 2).unwrap_err().is_type_mismatch());
/// assert!(store.get("foo").unwrap_err().is_not_found());
/// # Ok::<(), propcfg::Error>(())
/// ```
pub struct ConfigStore {
    /// Descriptors by name. The key set never changes after construction.
    properties: RwLock<HashMap<String, PropertyDescriptor>>,
}

impl ConfigStore {
    /// Create a store from declared properties
    ///
    /// Initial values are taken as-is; they are not checked against their own
    /// kinds or validators.
    pub fn new(properties: HashMap<String, PropertyDescriptor>) -> Self {
        debug!(
            "Configuration store created with {} properties",
            properties.len()
        );
        Self {
            properties: RwLock::new(properties),
        }
    }

    /// Create a store from a schema type's declared properties
    pub fn from_schema<S: ConfigSchema>() -> Self {
        Self::new(S::properties())
    }

    // =========================================================================
    // Read path
    // =========================================================================

    /// Get the current value of a property
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `name` was never declared.
    pub fn get(&self, name: &str) -> Result<Value> {
        let properties = self.properties.read_recovered();
        properties
            .get(name)
            .map(|descriptor| descriptor.value.clone())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Get the current value of a property as `T`
    ///
    /// The stored value is not re-validated; this only narrows it to the type
    /// the caller expects.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` was never declared
    /// - The value cannot be deserialized to `T`
    pub fn get_as<T>(&self, name: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.get(name)?;
        serde_json::from_value(value).map_err(|e| Error::Parse(format!("{name}: {e}")))
    }

    /// Snapshot of every property's current value
    ///
    /// The returned map is a copy; changing it does not affect the store.
    pub fn get_all(&self) -> HashMap<String, Value> {
        let properties = self.properties.read_recovered();
        properties
            .iter()
            .map(|(name, descriptor)| (name.clone(), descriptor.value.clone()))
            .collect()
    }

    /// Read one property, or the whole configuration when `name` is `None`
    ///
    /// The whole configuration comes back as a JSON object keyed by property
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `name` is given but was never declared.
    pub fn lookup(&self, name: Option<&str>) -> Result<Value> {
        match name {
            Some(name) => self.get(name),
            None => Ok(Value::Object(self.get_all().into_iter().collect::<Map<_, _>>())),
        }
    }

    // =========================================================================
    // Write path
    // =========================================================================

    /// Set the value of a property
    ///
    /// Without an explicit kind list, `value` must have the same kind as the
    /// property's current value.
    ///
    /// The validator runs without holding the store's lock. The kind check is
    /// repeated when the value is stored, so a concurrent write that changed
    /// the current value's kind in between still rejects `value`.
    ///
    /// `value` is converted with serde_json's `From` impls, which turn a NaN or
    /// infinite `f64` into `null`. Use [`set_number`](Self::set_number) for
    /// floats.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` was never declared ([`Error::NotFound`])
    /// - The kind of `value` is not accepted ([`Error::TypeMismatch`])
    /// - The validator rejects `value` ([`Error::Validation`])
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();

        let validator = {
            let properties = self.properties.read_recovered();
            let descriptor = Self::declared(&properties, name)?;
            Self::check_kind(name, descriptor, &value)?;
            descriptor.validator.clone()
        };

        if let Some(validator) = validator {
            if !validator(&value) {
                debug!("Validator rejected value for {name}");
                return Err(Error::Validation {
                    key: name.to_string(),
                });
            }
        }

        let mut properties = self.properties.write_recovered();
        let Some(descriptor) = properties.get_mut(name) else {
            return Err(Error::NotFound(name.to_string()));
        };
        Self::check_kind(name, descriptor, &value)?;
        descriptor.value = value;
        Ok(())
    }

    /// Set a property to a float
    ///
    /// Same checks as [`set`](Self::set), but NaN and infinities are rejected
    /// instead of being stored as `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` was never declared ([`Error::NotFound`])
    /// - `value` is NaN or infinite ([`Error::NonFiniteNumber`])
    /// - Any check of [`set`](Self::set) fails
    pub fn set_number(&self, name: &str, value: f64) -> Result<()> {
        let Some(number) = Number::from_f64(value) else {
            Self::declared(&self.properties.read_recovered(), name)?;
            debug!("Rejected non-finite number {value} for {name}");
            return Err(Error::NonFiniteNumber(value));
        };
        self.set(name, Value::Number(number))
    }

    fn declared<'a>(
        properties: &'a HashMap<String, PropertyDescriptor>,
        name: &str,
    ) -> Result<&'a PropertyDescriptor> {
        properties.get(name).ok_or_else(|| {
            debug!("Rejected write to unknown property {name}");
            Error::NotFound(name.to_string())
        })
    }

    fn check_kind(name: &str, descriptor: &PropertyDescriptor, value: &Value) -> Result<()> {
        let accepted = descriptor.accepted_kinds();
        if accepted.iter().any(|kind| kind.matches(value)) {
            return Ok(());
        }
        let actual = ValueKind::of(value);
        debug!("Rejected {actual} value for {name}");
        Err(Error::TypeMismatch {
            key: name.to_string(),
            expected: kind::describe(&accepted),
            actual,
        })
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Check if a property is declared
    pub fn contains(&self, name: &str) -> bool {
        self.properties.read_recovered().contains_key(name)
    }

    /// Declared property names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.properties.read_recovered().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of declared properties
    pub fn len(&self) -> usize {
        self.properties.read_recovered().len()
    }

    /// Check if no properties are declared
    pub fn is_empty(&self) -> bool {
        self.properties.read_recovered().is_empty()
    }

    /// Kinds the next write to `name` is checked against
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `name` was never declared.
    pub fn accepted_kinds(&self, name: &str) -> Result<Vec<ValueKind>> {
        let properties = self.properties.read_recovered();
        properties
            .get(name)
            .map(PropertyDescriptor::accepted_kinds)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}

impl<K: Into<String>> FromIterator<(K, PropertyDescriptor)> for ConfigStore {
    fn from_iter<I: IntoIterator<Item = (K, PropertyDescriptor)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, d)| (k.into(), d)).collect())
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties = self.properties.read_recovered();
        f.debug_struct("ConfigStore")
            .field("properties", &*properties)
            .finish()
    }
}
