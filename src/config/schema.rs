//! Schema trait and declaration macro
//!
//! A concrete configuration type declares its properties once, either by
//! implementing [`ConfigSchema`] or by handing a map built with
//! [`properties!`](crate::properties) straight to [`ConfigStore::new`](crate::ConfigStore::new).
//!
//! ```
//! use propcfg::{properties, ConfigSchema, PropertyDescriptor, ValueKind};
//! use std::collections::HashMap;
//!
//! struct ServerConfig;
//!
//! impl ConfigSchema for ServerConfig {
//!     fn properties() -> HashMap<String, PropertyDescriptor> {
//!         properties! {
//!             "verbose" => PropertyDescriptor::toggle(false),
//!             "port" => PropertyDescriptor::integer(8080)
//!                 .validator(|v| v.as_u64().is_some_and(|p| (1..=65535).contains(&p))),
//!             "log_target" => PropertyDescriptor::text("stderr")
//!                 .types([ValueKind::String, ValueKind::Null]),
//!         }
//!     }
//! }
//!
//! assert_eq!(ServerConfig::properties().len(), 3);
//! ```

use crate::config::descriptor::PropertyDescriptor;
use std::collections::HashMap;

/// Trait for types that declare a fixed set of configuration properties
pub trait ConfigSchema {
    /// Declared properties with their defaults and constraints
    fn properties() -> HashMap<String, PropertyDescriptor>;

    /// Declared property names, sorted
    #[must_use]
    fn property_names() -> Vec<String> {
        let mut names: Vec<String> = Self::properties().into_keys().collect();
        names.sort();
        names
    }
}

// Allows an empty store
impl ConfigSchema for () {
    fn properties() -> HashMap<String, PropertyDescriptor> {
        HashMap::new()
    }
}

/// Macro for building a property map
///
/// A later entry with the same name replaces an earlier one.
///
/// # Example
/// ```rust
/// use propcfg::{properties, PropertyDescriptor};
///
/// let map = properties! {
///     "a" => PropertyDescriptor::toggle(false),
///     "b" => PropertyDescriptor::number(10.0)?.validator(|v| v.as_f64().is_some_and(|n| n >= 0.0)),
/// };
/// assert!(map.contains_key("a"));
/// # Ok::<(), propcfg::Error>(())
/// ```
#[macro_export]
macro_rules! properties {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map: std::collections::HashMap<String, $crate::PropertyDescriptor> =
            std::collections::HashMap::new();
        $(
            map.insert($key.to_string(), $value);
        )*
        map
    }};
}
