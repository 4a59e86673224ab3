//! Property tests for the extraction pass.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use portalmap::{extract_portals, ExtractOptions};

const FIELDS: [&str; 2] = ["published_in", "connected_to"];

fn reference() -> impl Strategy<Value = Value> {
    // Small name pool so collisions (and overwrites) are common.
    let name = prop::sample::select(vec!["A", "B", "C", "D", "E"]);
    prop_oneof![
        6 => (name, any::<i32>()).prop_map(|(n, id)| json!({"name": n, "id": id})),
        1 => any::<i32>().prop_map(|id| json!({"id": id})),
        1 => Just(json!("not a reference")),
    ]
}

fn reference_field() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        2 => Just(None),
        6 => prop::collection::vec(reference(), 0..5).prop_map(|items| Some(Value::Array(items))),
        1 => Just(Some(json!("not a list"))),
    ]
}

fn entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        8 => (reference_field(), reference_field()).prop_map(|(published, connected)| {
            let mut entry = Map::new();
            entry.insert("title".to_string(), json!("paper"));
            if let Some(v) = published {
                entry.insert("published_in".to_string(), v);
            }
            if let Some(v) = connected {
                entry.insert("connected_to".to_string(), v);
            }
            Value::Object(entry)
        }),
        1 => Just(json!(null)),
    ]
}

/// Straight replay of every assignment in scan order.
fn model(entries: &[Value]) -> Map<String, Value> {
    let mut portals = Map::new();
    for entry in entries.iter().filter_map(Value::as_object) {
        for field in FIELDS {
            let Some(items) = entry.get(field).and_then(Value::as_array) else {
                continue;
            };
            for item in items.iter().filter_map(Value::as_object) {
                if let Some(Value::String(name)) = item.get("name") {
                    portals.insert(name.clone(), item["id"].clone());
                }
            }
        }
    }
    portals
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the map equals a replay of all assignments, order included.
    #[test]
    fn property_extraction_matches_replay(entries in prop::collection::vec(entry(), 0..12)) {
        let result = extract_portals(&entries, &ExtractOptions::default()).unwrap();
        let expected = model(&entries);

        let names: Vec<&str> = result.portals.names().collect();
        let expected_names: Vec<&str> = expected.keys().map(String::as_str).collect();
        prop_assert_eq!(names, expected_names);
        prop_assert_eq!(Value::from(result.portals), Value::Object(expected));
    }

    /// PROPERTY: every assignment either adds a name or overwrites one.
    #[test]
    fn property_references_split_into_new_and_overwritten(
        entries in prop::collection::vec(entry(), 0..12)
    ) {
        let result = extract_portals(&entries, &ExtractOptions::default()).unwrap();

        prop_assert_eq!(result.stats.entries, entries.len());
        prop_assert_eq!(
            result.stats.references,
            result.portals.len() + result.stats.overwritten
        );
    }

    /// PROPERTY: appending an entry that names X with id v makes X map to v.
    #[test]
    fn property_last_entry_wins(
        entries in prop::collection::vec(entry(), 0..8),
        id in any::<i64>()
    ) {
        let mut entries = entries;
        entries.push(json!({"connected_to": [{"name": "A", "id": id}]}));

        let result = extract_portals(&entries, &ExtractOptions::default()).unwrap();
        prop_assert_eq!(result.portals.get("A"), Some(&json!(id)));
    }
}
