mod common;

use common::TestConfig;
use propcfg::{ConfigStore, Configurable, PropertyDescriptor, properties};
use serde_json::json;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_access() {
    let config = Arc::new(TestConfig::new());
    let barrier = Arc::new(Barrier::new(10));
    let mut handles = vec![];

    for i in 0..10 {
        let c = Arc::clone(&config);
        let b = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            b.wait();
            // Perform mixed reads and writes
            if i % 2 == 0 {
                let all = c.get_all_config();
                assert_eq!(all.len(), 5);
            } else {
                c.set_config("retries", i).unwrap();
                assert!(c.set_config("retries", -i).unwrap_err().is_validation());
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let retries = config.get_config_as::<i64>("retries").unwrap();
    assert!([1, 3, 5, 7, 9].contains(&retries));
}

#[test]
fn test_concurrent_writes_to_separate_properties() {
    let store = Arc::new(
        (0..8)
            .map(|i| (format!("slot_{i}"), PropertyDescriptor::integer(0)))
            .collect::<ConfigStore>(),
    );
    let barrier = Arc::new(Barrier::new(8));
    let mut handles = vec![];

    for i in 0..8 {
        let s = Arc::clone(&store);
        let b = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            b.wait();
            let name = format!("slot_{i}");
            for n in 1..=100 {
                s.set(&name, n).unwrap();
                // Wrong kinds never land, even under contention
                assert!(s.set(&name, "x").unwrap_err().is_type_mismatch());
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    for (name, value) in store.get_all() {
        assert_eq!(value, json!(100), "{name}");
    }
}

#[test]
fn test_store_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigStore>();

    let store = ConfigStore::new(properties! { "a" => PropertyDescriptor::toggle(false) });
    thread::scope(|scope| {
        scope.spawn(|| store.set("a", true).unwrap());
    });
    assert_eq!(store.get("a").unwrap(), json!(true));
}
