//! Tests for the dictionary trie.
//!
//! Scenario tests for the documented behaviours plus property-based tests
//! comparing the trie against a `BTreeSet` model.

use crate::data_structures::trie::{Trie, TrieConfig};
use crate::tests::{dictionary_strategy, string_strategy, word_strategy};
use crate::utils::levenshtein::levenshtein_distance;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Insert then search succeeds, and a second insert is a no-op.
#[test]
fn test_insert_search_round_trip() {
    let mut trie = Trie::new();
    for word in ["hello", "help", "he", "world"] {
        assert!(trie.insert(word));
        assert!(trie.search(word));
    }
    for word in ["hello", "help", "he", "world"] {
        assert!(!trie.insert(word));
    }
    assert_eq!(trie.len(), 4);
}

/// Deleting a shorter word leaves longer words sharing its path intact.
#[test]
fn test_prefix_survival() {
    let mut trie = Trie::new();
    trie.insert("cat");
    trie.insert("catalog");

    assert!(trie.delete("cat"));
    assert!(trie.search("catalog"));
    assert!(!trie.search("cat"));
    assert_eq!(trie.auto_suggest("cat"), vec!["catalog"]);
}

/// Deleting the only word prunes every node.
#[test]
fn test_pruning_to_root() {
    let mut trie = Trie::new();
    trie.insert("abc");
    assert_eq!(trie.node_count(), 3);

    assert!(trie.delete("abc"));
    assert!(trie.get_all_words().is_empty());
    assert_eq!(trie.node_count(), 0);
    assert_eq!(trie.render_structure(), "root\n");
}

/// Deleting a word never inserted changes nothing observable.
#[test]
fn test_delete_never_inserted() {
    let mut trie = Trie::from_words(["alpha", "beta"]);
    let before = trie.get_all_words();

    assert!(!trie.delete("gamma"));
    assert!(!trie.delete("alp"));
    assert!(!trie.delete(""));
    assert_eq!(trie.get_all_words(), before);
    assert_eq!(trie.node_count(), 9);
}

/// Auto-suggest is sorted regardless of insertion order.
#[test]
fn test_auto_suggest_any_insertion_order() {
    let words = ["catastrophe", "catatonic", "caterpillar"];
    let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

    for order in orders {
        let mut trie = Trie::new();
        for index in order {
            trie.insert(words[index]);
        }
        assert_eq!(trie.auto_suggest("cat"), words);
    }
}

/// Auto-suggest on an empty trie yields nothing.
#[test]
fn test_auto_suggest_empty_trie() {
    assert!(Trie::new().auto_suggest("xyz").is_empty());
}

/// Spelling suggestions never leave the first-letter branch.
#[test]
fn test_spelling_first_letter_restriction() {
    let trie = Trie::from_words(["color", "colour", "dolor"]);
    let suggestions = trie.get_spelling_suggestions("color");

    assert!(suggestions.contains(&"colour".to_string()));
    assert!(!suggestions.contains(&"dolor".to_string()));
    assert_eq!(levenshtein_distance("color", "dolor"), 1);
}

/// Spelling suggestions for a letter with no branch are empty rather than a fault.
#[test]
fn test_spelling_absent_branch() {
    let trie = Trie::from_words(["color", "colour"]);
    assert!(trie.get_spelling_suggestions("xolor").is_empty());
    assert!(trie.get_spelling_suggestions("").is_empty());
}

/// A zero bound turns spelling suggestion into exact lookup.
#[test]
fn test_spelling_zero_distance() {
    let mut trie = Trie::with_config(TrieConfig::new().with_max_distance(0));
    trie.extend(["bat", "bit", "but"]);

    assert_eq!(trie.get_spelling_suggestions("bit"), vec!["bit"]);
    assert!(trie.get_spelling_suggestions("bot").is_empty());
}

/// A single very long word can be stored, listed, copied, deleted and dropped.
#[test]
fn test_long_single_branch_word() {
    let word = "a".repeat(100_000);
    let shorter = "a".repeat(50_000);

    let mut trie = Trie::new();
    assert!(trie.insert(&word));
    assert!(trie.insert(&shorter));
    assert!(trie.search(&word));
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.node_count(), 100_000);
    assert_eq!(trie.get_all_words(), vec![shorter.clone(), word.clone()]);
    assert_eq!(trie.auto_suggest(&shorter).len(), 2);

    let copy = trie.clone();
    assert_eq!(copy, trie);

    // The terminal node at depth 50,000 stops the cut.
    assert!(trie.delete(&word));
    assert!(!trie.search(&word));
    assert_eq!(trie.node_count(), 50_000);

    assert!(trie.delete(&shorter));
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);

    drop(copy);
    drop(Trie::from_words([&word]));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn proptest_matches_set_model(words in dictionary_strategy()) {
        let mut trie = Trie::new();
        let mut model = BTreeSet::new();

        for word in &words {
            prop_assert_eq!(trie.insert(word), model.insert(word.clone()));
        }

        prop_assert_eq!(trie.len(), model.len());
        prop_assert_eq!(trie.get_all_words(), model.iter().cloned().collect::<Vec<_>>());
        for word in &model {
            prop_assert!(trie.search(word));
        }
    }

    #[test]
    fn proptest_delete_matches_set_model(
        words in dictionary_strategy(),
        removals in dictionary_strategy(),
    ) {
        let mut trie = Trie::from_words(&words);
        let mut model: BTreeSet<String> = words.iter().cloned().collect();

        for word in &removals {
            prop_assert_eq!(trie.delete(word), model.remove(word));
            prop_assert!(!trie.search(word));
        }

        prop_assert_eq!(trie.get_all_words(), model.iter().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn proptest_deleting_everything_prunes_all_nodes(words in dictionary_strategy()) {
        let mut trie = Trie::from_words(&words);
        for word in trie.get_all_words() {
            prop_assert!(trie.delete(&word));
        }

        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn proptest_no_dead_leaves(words in dictionary_strategy(), removals in dictionary_strategy()) {
        let mut trie = Trie::from_words(&words);
        for word in &removals {
            trie.delete(word);
        }

        // Every node lies on the path of some stored word, so the node count
        // equals the number of distinct non-empty prefixes of stored words.
        let prefixes: BTreeSet<String> = trie
            .get_all_words()
            .iter()
            .flat_map(|word| {
                word.char_indices()
                    .map(|(i, c)| word[..i + c.len_utf8()].to_string())
                    .collect::<Vec<_>>()
            })
            .collect();
        prop_assert_eq!(trie.node_count(), prefixes.len());
    }

    #[test]
    fn proptest_auto_suggest_filters_all_words(words in dictionary_strategy(), prefix in word_strategy()) {
        let trie = Trie::from_words(&words);
        let expected: Vec<String> = trie
            .get_all_words()
            .into_iter()
            .filter(|word| word.starts_with(&prefix))
            .collect();

        prop_assert_eq!(trie.auto_suggest(&prefix), expected);
    }

    #[test]
    fn proptest_spelling_suggestions_match_brute_force(
        words in dictionary_strategy(),
        query in word_strategy(),
    ) {
        let trie = Trie::from_words(&words);
        let expected: Vec<String> = match query.chars().next() {
            Some(first) => trie
                .get_all_words()
                .into_iter()
                .filter(|word| word.starts_with(first))
                .filter(|word| levenshtein_distance(&query, word) <= 2)
                .collect(),
            None => Vec::new(),
        };

        prop_assert_eq!(trie.get_spelling_suggestions(&query), expected);
    }

    #[test]
    fn proptest_arbitrary_input_never_panics(input in string_strategy(16)) {
        let mut trie = Trie::from_words(["alpha", "beta", "gamma"]);

        let _ = trie.search(&input);
        let _ = trie.auto_suggest(&input);
        let _ = trie.get_spelling_suggestions(&input);
        trie.insert(&input);
        prop_assert!(trie.search(&input));
        prop_assert!(trie.delete(&input));
        prop_assert!(!trie.search(&input));
    }
}
