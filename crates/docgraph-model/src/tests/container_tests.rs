use super::*;
use serde_json::json;

#[test]
fn test_ordered_map_encodes_as_tagged_pairs() {
    let map: OrderedMap<u32> = [("b", 2), ("a", 1)].into_iter().collect();
    let tree = serde_json::to_value(&map).unwrap();
    assert_eq!(tree, json!({ "$map": [["b", 2], ["a", 1]] }));
}

#[test]
fn test_ordered_map_decode_keeps_order() {
    let tree = json!({ "$map": [["z", 1], ["y", 2], ["x", 3]] });
    let map: OrderedMap<u32> = serde_json::from_value(tree).unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "y", "x"]);
}

#[test]
fn test_ordered_map_equality_is_order_sensitive() {
    let forward: OrderedMap<u32> = [("a", 1), ("b", 2)].into_iter().collect();
    let backward: OrderedMap<u32> = [("b", 2), ("a", 1)].into_iter().collect();
    assert_ne!(forward, backward);
    assert_eq!(forward, forward.clone());
}

#[test]
fn test_ordered_map_rejects_set_tag() {
    let tree = json!({ "$set": ["a"] });
    let err = serde_json::from_value::<OrderedMap<u32>>(tree).unwrap_err();
    assert!(err.to_string().contains(CONTAINER_MISMATCH), "{err}");
}

#[test]
fn test_ordered_map_rejects_bare_array() {
    let tree = json!([["a", 1]]);
    let err = serde_json::from_value::<OrderedMap<u32>>(tree).unwrap_err();
    assert!(err.to_string().contains(CONTAINER_MISMATCH), "{err}");
}

#[test]
fn test_ordered_map_rejects_extra_fields() {
    let tree = json!({ "$map": [], "other": 1 });
    let err = serde_json::from_value::<OrderedMap<u32>>(tree).unwrap_err();
    assert!(err.to_string().contains("extra field"), "{err}");
}

#[test]
fn test_ordered_map_rejects_duplicate_keys() {
    let tree = json!({ "$map": [["a", 1], ["a", 2]] });
    let err = serde_json::from_value::<OrderedMap<u32>>(tree).unwrap_err();
    assert!(err.to_string().contains(DUPLICATE_KEY), "{err}");
}

#[test]
fn test_empty_ordered_map() {
    let map: OrderedMap<u32> = OrderedMap::new();
    let tree = serde_json::to_value(&map).unwrap();
    assert_eq!(tree, json!({ "$map": [] }));
    let back: OrderedMap<u32> = serde_json::from_value(tree).unwrap();
    assert!(back.is_empty());
}

#[test]
fn test_source_set_round_trip() {
    let set: SourceSet = ["/src/b.ts", "/src/a.ts", "/src/b.ts"].into_iter().collect();
    assert_eq!(set.len(), 2);

    let tree = serde_json::to_value(&set).unwrap();
    assert_eq!(tree, json!({ "$set": ["/src/b.ts", "/src/a.ts"] }));

    let back: SourceSet = serde_json::from_value(tree).unwrap();
    assert_eq!(back, set);
}

#[test]
fn test_source_set_rejects_map_tag() {
    let tree = json!({ "$map": [] });
    let err = serde_json::from_value::<SourceSet>(tree).unwrap_err();
    assert!(err.to_string().contains(CONTAINER_MISMATCH), "{err}");
}
