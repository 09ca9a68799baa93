//! Property-based tests for the store's rejection rules

mod common;

use common::TestConfig;
use propcfg::{Configurable, PropertyDescriptor, ValueKind};
use proptest::prelude::*;
use serde_json::{Value, json};

const DECLARED: [&str; 5] = ["verbose", "output", "retries", "theme", "tags"];

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
        prop::collection::vec("[a-z]{1,4}", 0..3).prop_map(|v| json!(v)),
    ]
}

proptest! {
    #[test]
    fn undeclared_names_are_rejected(name in "[a-z_]{1,12}", value in any_value()) {
        prop_assume!(!DECLARED.contains(&name.as_str()));
        let config = TestConfig::new();

        prop_assert!(config.get_config(&name).unwrap_err().is_not_found());
        prop_assert!(config.set_config(&name, value).unwrap_err().is_not_found());
    }

    #[test]
    fn rejected_writes_leave_value_untouched(value in any_value()) {
        let config = TestConfig::new();
        let before = config.get_config("retries").unwrap();

        if config.set_config("retries", value.clone()).is_err() {
            prop_assert_eq!(config.get_config("retries").unwrap(), before);
        } else {
            prop_assert_eq!(config.get_config("retries").unwrap(), value);
        }
    }

    #[test]
    fn writes_outside_kind_list_are_mismatches(value in any_value()) {
        let store = common::single(
            PropertyDescriptor::toggle(true).types([ValueKind::String, ValueKind::Boolean]),
        );
        let kind = ValueKind::of(&value);
        let result = store.set("a", value);

        if kind == ValueKind::String || kind == ValueKind::Boolean {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.unwrap_err().is_type_mismatch());
        }
    }
}
