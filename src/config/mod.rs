//! Property declaration types
//!
//! - `PropertyDescriptor` - Value, accepted kinds and validator of one property
//! - `ConfigSchema` - Trait for types that declare their properties
//! - `properties!` - Macro for building a property map

mod descriptor;
mod schema;

pub use descriptor::{PropertyDescriptor, Validator};
pub use schema::ConfigSchema;
