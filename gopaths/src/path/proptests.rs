//! Property-based tests for path lists.
//!
//! The normalize module carries its own property tests; this module focuses
//! on the ordering and deduplication guarantees of [`PathList`].

use super::PathList;
use proptest::prelude::*;
use std::collections::HashSet;

fn entry_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,6}", 1..4).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn entries_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof![entry_strategy(), Just("/dup".to_string())], 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Parsing the rendered form yields the same entries
    #[test]
    fn display_then_parse_preserves_entries(entries in entries_strategy()) {
        let list: PathList = entries.iter().cloned().collect();
        prop_assert_eq!(PathList::parse(&list.to_string()), list);
    }

    // After dedup every entry is unique
    #[test]
    fn dedup_leaves_unique_entries(entries in entries_strategy()) {
        let mut list: PathList = entries.into_iter().collect();
        list.dedup();
        let unique: HashSet<&String> = list.iter().collect();
        prop_assert_eq!(unique.len(), list.len());
    }

    // Dedup keeps first occurrences in their original relative order
    #[test]
    fn dedup_preserves_first_seen_order(entries in entries_strategy()) {
        let mut expected = Vec::new();
        for entry in &entries {
            if !expected.contains(entry) {
                expected.push(entry.clone());
            }
        }
        let mut list: PathList = entries.into_iter().collect();
        list.dedup();
        prop_assert_eq!(list.into_vec(), expected);
    }

    // Dedup is idempotent
    #[test]
    fn dedup_idempotent(entries in entries_strategy()) {
        let mut once: PathList = entries.into_iter().collect();
        once.dedup();
        let mut twice = once.clone();
        twice.dedup();
        prop_assert_eq!(once, twice);
    }
}
