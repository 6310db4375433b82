#![cfg(feature = "serde")]

//! Integration tests for serde support in idset.

use idset::combine::{CombinationMode, IdentifierSet};
use idset::search::SortedKeyMap;
use rstest::rstest;

// =============================================================================
// CombinationMode
// =============================================================================

#[rstest]
#[case(CombinationMode::Intersect, "\"intersect\"")]
#[case(CombinationMode::Union, "\"union\"")]
fn test_mode_json_representation(#[case] mode: CombinationMode, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&mode).unwrap(), json);
    assert_eq!(serde_json::from_str::<CombinationMode>(json).unwrap(), mode);
}

// =============================================================================
// IdentifierSet
// =============================================================================

#[rstest]
fn test_identifier_set_serializes_sorted() {
    let set: IdentifierSet = [9, 1, 5].into_iter().collect();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[1,5,9]");
}

#[rstest]
fn test_identifier_set_json_roundtrip() {
    let set: IdentifierSet = (0..100).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: IdentifierSet = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_identifier_set_deserialize_collapses_duplicates() {
    let restored: IdentifierSet = serde_json::from_str("[3,3,1]").unwrap();
    assert_eq!(restored.into_sorted_vec(), vec![1, 3]);
}

// =============================================================================
// SortedKeyMap
// =============================================================================

#[rstest]
fn test_sorted_key_map_json_roundtrip() {
    let map: SortedKeyMap<String, u32> = [("b".to_string(), 2), ("a".to_string(), 1)]
        .into_iter()
        .collect();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"a":1,"b":2}"#);
    let restored: SortedKeyMap<String, u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(map, restored);
}

#[rstest]
fn test_sorted_key_map_deserialize_sorts_keys() {
    let restored: SortedKeyMap<String, u32> = serde_json::from_str(r#"{"z":26,"m":13}"#).unwrap();
    assert_eq!(restored.keys(), &["m".to_string(), "z".to_string()]);
}
