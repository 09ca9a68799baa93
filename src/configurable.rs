//! Shared `get_config` / `set_config` surface for configuration types
//!
//! A concrete configuration type owns a [`ConfigStore`] and implements
//! [`Configurable`] to expose it.
//!
//! ```
//! use propcfg::{properties, Configurable, ConfigStore, PropertyDescriptor};
//!
//! struct Renderer {
//!     config: ConfigStore,
//! }
//!
//! impl Renderer {
//!     fn new() -> Self {
//!         Self {
//!             config: ConfigStore::new(properties! {
//!                 "vsync" => PropertyDescriptor::toggle(true),
//!             }),
//!         }
//!     }
//! }
//!
//! impl Configurable for Renderer {
//!     fn config_store(&self) -> &ConfigStore {
//!         &self.config
//!     }
//! }
//!
//! let renderer = Renderer::new();
//! renderer.set_config("vsync", false)?;
//! assert!(!renderer.get_config_as::<bool>("vsync")?);
//! # Ok::<(), propcfg::Error>(())
//! ```

use crate::error::Result;
use crate::store::ConfigStore;
use serde_json::Value;
use std::collections::HashMap;

/// Types backed by a [`ConfigStore`]
pub trait Configurable {
    /// The backing store
    fn config_store(&self) -> &ConfigStore;

    /// See [`ConfigStore::get`]
    fn get_config(&self, name: &str) -> Result<Value> {
        self.config_store().get(name)
    }

    /// See [`ConfigStore::get_as`]
    fn get_config_as<T>(&self, name: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.config_store().get_as(name)
    }

    /// See [`ConfigStore::get_all`]
    fn get_all_config(&self) -> HashMap<String, Value> {
        self.config_store().get_all()
    }

    /// See [`ConfigStore::lookup`]
    fn lookup_config(&self, name: Option<&str>) -> Result<Value> {
        self.config_store().lookup(name)
    }

    /// See [`ConfigStore::set`]
    fn set_config(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.config_store().set(name, value)
    }

    /// See [`ConfigStore::set_number`]
    fn set_config_number(&self, name: &str, value: f64) -> Result<()> {
        self.config_store().set_number(name, value)
    }
}

impl Configurable for ConfigStore {
    fn config_store(&self) -> &ConfigStore {
        self
    }
}
