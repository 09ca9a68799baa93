//! Common test utilities for propcfg integration tests
//!
//! Provides a shared configuration type and fixture helpers.

#![allow(dead_code)]

use propcfg::{
    ConfigSchema, ConfigStore, Configurable, PropertyDescriptor, ValueKind, properties, validators,
};
use serde_json::json;
use std::collections::HashMap;

// =============================================================================
// Test Configuration Type
// =============================================================================

/// A configuration type covering every way a property can be declared
pub struct TestConfig {
    store: ConfigStore,
}

impl ConfigSchema for TestConfig {
    fn properties() -> HashMap<String, PropertyDescriptor> {
        properties! {
            // No kind list, no validator
            "verbose" => PropertyDescriptor::toggle(false),

            // Explicit kind list
            "output" => PropertyDescriptor::toggle(true)
                .types([ValueKind::String, ValueKind::Boolean]),

            // Validator only
            "retries" => PropertyDescriptor::integer(10)
                .validator(|v| v.as_f64().is_some_and(|n| n >= 0.0)),

            // Kind list and validator
            "theme" => PropertyDescriptor::text("dark")
                .types([ValueKind::String])
                .shared_validator(validators::one_of(vec![
                    json!("light"),
                    json!("dark"),
                    json!("system"),
                ])),

            "tags" => PropertyDescriptor::list(&["default".to_string()])
                .shared_validator(validators::non_empty()),
        }
    }
}

impl Configurable for TestConfig {
    fn config_store(&self) -> &ConfigStore {
        &self.store
    }
}

impl TestConfig {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::from_schema::<Self>(),
        }
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Store with a single property named "a"
pub fn single(descriptor: PropertyDescriptor) -> ConfigStore {
    ConfigStore::new(properties! { "a" => descriptor })
}

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
