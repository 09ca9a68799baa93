//! # propcfg - declared configuration properties
//!
//! A small store for configuration types that declare a fixed set of named
//! properties, each with a default value, an optional list of accepted value
//! kinds, and an optional validator.
//!
//! ## Features
//!
//! - **Fixed key set**: every property is declared up front; unknown names are rejected
//! - **Kind checking**: writes must match a declared kind list, or the kind of the current value
//! - **Validators**: custom predicates that gate writes after the kind check
//! - **Typed reads**: narrow stored values with serde via `get_as`
//! - **Thread safe**: `ConfigStore` is `Send + Sync`; writes are serialized
//!
//! ## Quick Start
//!
//! ```rust
//! use propcfg::{properties, ConfigStore, Configurable, PropertyDescriptor, ValueKind};
//! use serde_json::json;
//!
//! struct AppConfig {
//!     store: ConfigStore,
//! }
//!
//! impl AppConfig {
//!     fn new() -> Self {
//!         Self {
//!             store: ConfigStore::new(properties! {
//!                 "debug" => PropertyDescriptor::toggle(false),
//!                 "output" => PropertyDescriptor::toggle(true)
//!                     .types([ValueKind::String, ValueKind::Boolean]),
//!                 "workers" => PropertyDescriptor::integer(10)
//!                     .validator(|v| v.as_i64().is_some_and(|n| n >= 0)),
//!             }),
//!         }
//!     }
//! }
//!
//! impl Configurable for AppConfig {
//!     fn config_store(&self) -> &ConfigStore {
//!         &self.store
//!     }
//! }
//!
//! let app = AppConfig::new();
//!
//! app.set_config("debug", true)?;
//! app.set_config("output", "/var/log/app.log")?;
//!
//! assert!(app.set_config("debug", 2).unwrap_err().is_type_mismatch());
//! assert!(app.set_config("workers", -1).unwrap_err().is_validation());
//! assert!(app.get_config("missing").unwrap_err().is_not_found());
//!
//! assert_eq!(app.get_config("debug")?, json!(true));
//! assert_eq!(app.get_all_config().len(), 3);
//! # Ok::<(), propcfg::Error>(())
//! ```
//!
//! ## Kind Policy
//!
//! A property declared without a kind list accepts writes of the same kind as
//! its *current* value. With a list, the value's kind must be in the list.

mod configurable;
mod error;
mod kind;
mod store;
mod sync;

pub mod config;
pub mod validators;

pub use config::{ConfigSchema, PropertyDescriptor, Validator};
pub use configurable::Configurable;
pub use error::{Error, Result};
pub use kind::ValueKind;
pub use store::ConfigStore;
