// Validation example for propcfg
//
// Run with: cargo run --example with_validation

use propcfg::{ConfigStore, PropertyDescriptor, ValueKind, properties, validators};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store = ConfigStore::new(properties! {
        "user.email" => PropertyDescriptor::text("user@example.com")
            .shared_validator(validators::pattern(
                r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
            )?),

        "user.username" => PropertyDescriptor::text("guest")
            .shared_validator(validators::pattern(r"^[a-zA-Z0-9_]{3,20}$")?),

        "network.port" => PropertyDescriptor::integer(3000)
            .types([ValueKind::Number])
            .shared_validator(validators::range(1024.0, 65535.0)),

        "ui.theme" => PropertyDescriptor::text("dark")
            .shared_validator(validators::one_of(vec![json!("light"), json!("dark")])),
    });

    println!("🔍 propcfg Validation Example\n");

    let attempts = [
        ("user.email", json!("john@example.com")),
        ("user.email", json!("not-an-email")),
        ("user.username", json!("john_doe")),
        ("user.username", json!("ab")),
        ("network.port", json!(8080)),
        ("network.port", json!(80)),
        ("network.port", json!("8080")),
        ("ui.theme", json!("solarized")),
    ];

    for (name, value) in attempts {
        match store.set(name, value.clone()) {
            Ok(()) => println!("✅ {name} = {value}"),
            Err(e) => println!("❌ {name} = {value}: {e}"),
        }
    }

    println!("\nFinal values:");
    for name in store.names() {
        println!("   {name}: {}", store.get(&name)?);
    }

    println!("\n✨ Validation example complete!");

    Ok(())
}
