// Basic usage example for propcfg
//
// Run with: RUST_LOG=debug cargo run --example basic_usage

use propcfg::{
    ConfigSchema, ConfigStore, Configurable, PropertyDescriptor, ValueKind, properties,
};
use std::collections::HashMap;

// A configuration type owns a store seeded from its schema
struct AppConfig {
    store: ConfigStore,
}

impl ConfigSchema for AppConfig {
    fn properties() -> HashMap<String, PropertyDescriptor> {
        properties! {
            "app.name" => PropertyDescriptor::text("My App"),

            "app.dark_mode" => PropertyDescriptor::toggle(false),

            // Either a file path or `false` to disable the log file
            "app.log_file" => PropertyDescriptor::toggle(false)
                .types([ValueKind::String, ValueKind::Boolean]),

            "network.allowed_origins" => PropertyDescriptor::list(&[
                "http://localhost:3000".to_string(),
            ]),
        }
    }
}

impl Configurable for AppConfig {
    fn config_store(&self) -> &ConfigStore {
        &self.store
    }
}

impl AppConfig {
    fn new() -> Self {
        Self {
            store: ConfigStore::from_schema::<Self>(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::new();

    println!("📋 Declared properties: {:?}\n", config.config_store().names());

    // Read a typed value
    let name: String = config.get_config_as("app.name")?;
    println!("App name: {name}");

    // Write values
    config.set_config("app.dark_mode", true)?;
    config.set_config("app.log_file", "/var/log/my-app.log")?;
    println!("Dark mode: {}", config.get_config("app.dark_mode")?);
    println!("Log file: {}\n", config.get_config("app.log_file")?);

    // Wrong kind
    match config.set_config("app.dark_mode", "yes") {
        Ok(()) => println!("Unexpected success"),
        Err(e) => println!("Expected error: {e}"),
    }

    // Unknown property
    match config.set_config("app.colour", "blue") {
        Ok(()) => println!("Unexpected success"),
        Err(e) => println!("Expected error: {e}\n"),
    }

    // Whole configuration
    let all = config.lookup_config(None)?;
    println!("Current configuration:\n{}", serde_json::to_string_pretty(&all)?);

    Ok(())
}
