//! Property tests for writing the portal map and reading it back.

use proptest::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

use portalmap::domain::ports::PortalSink;
use portalmap::infrastructure::JsonPortalSink;
use portalmap::PortalMap;

fn identifier() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z0-9:/._-]{0,16}".prop_map(|s| json!(s)),
        Just(Value::Null),
        any::<bool>().prop_map(|b| json!(b)),
    ]
}

fn portal_map() -> impl Strategy<Value = PortalMap> {
    prop::collection::vec(("\\PC{0,12}", identifier()), 0..16).prop_map(|pairs| {
        let mut map = PortalMap::new();
        for (name, id) in pairs {
            map.insert(name, id);
        }
        map
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: writing then reading yields the same keys, values and order.
    #[test]
    fn property_write_read_round_trips(map in portal_map(), pretty in any::<bool>()) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_portals.json");

        JsonPortalSink::pretty(pretty).write(&map, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: PortalMap = serde_json::from_str(&content).unwrap();

        let names: Vec<&str> = loaded.names().collect();
        let expected: Vec<&str> = map.names().collect();
        prop_assert_eq!(names, expected);
        prop_assert_eq!(loaded.as_map(), map.as_map());
    }
}
