//! Property-based tests for the token diff
//!
//! Uses proptest to check edit scripts against arbitrary word lists.
//! Reference: https://lib.rs/crates/proptest

use mbview::diff::{ChangeKind, TextDiff, diff_row};
use mbview::markup::Node;
use proptest::prelude::*;
use regex::Regex;

// =============================================================================
// Strategy generators
// =============================================================================

/// Short lowercase words
fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..8)
}

/// Runs of whitespace
fn whitespace_strategy() -> impl Strategy<Value = String> {
    "[ \t]{1,4}".prop_map(|s| s.to_string())
}

/// Join words with separators picked round-robin from `separators`
fn join_with(words: &[String], separators: &[String]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(&separators[i % separators.len()]);
        }
        out.push_str(word);
    }
    out
}

fn whitespace() -> Regex {
    Regex::new(r"\s+").unwrap()
}

fn script(diff: &TextDiff<'_>) -> Vec<(ChangeKind, String)> {
    diff.ops()
        .into_iter()
        .map(|op| (op.kind, op.token.to_string()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Identical texts never produce changes
    #[test]
    fn identical_texts_have_no_changes(text in "[a-z ,.-]{0,40}") {
        let re = whitespace();
        let diff = TextDiff::new(&text, &text, Some(&re));
        prop_assert!(!diff.has_changes());
        prop_assert!(diff.removed().is_empty());
        prop_assert!(diff.added().is_empty());
    }

    /// Tokenizing keeps every character of both sides
    #[test]
    fn sides_reconstruct_exactly(old in "[a-z \t-]{0,40}", new in "[a-z \t-]{0,40}") {
        let re = whitespace();
        let diff = TextDiff::new(&old, &new, Some(&re));
        prop_assert_eq!(diff.old.reconstruct(), old.clone());
        prop_assert_eq!(diff.new.reconstruct(), new.clone());
    }

    /// The script accounts for every word exactly once
    #[test]
    fn script_covers_both_sides(old in words_strategy(), new in words_strategy()) {
        let (old, new) = (old.join(" "), new.join(" "));
        let re = whitespace();
        let diff = TextDiff::new(&old, &new, Some(&re));
        let ops = diff.ops();

        let old_side: Vec<&str> = ops
            .iter()
            .filter(|op| op.kind != ChangeKind::Added)
            .map(|op| op.token)
            .collect();
        let new_side: Vec<&str> = ops
            .iter()
            .filter(|op| op.kind != ChangeKind::Removed)
            .map(|op| op.token)
            .collect();
        prop_assert_eq!(old_side, diff.old.words());
        prop_assert_eq!(new_side, diff.new.words());
    }

    /// Separator spelling does not change the word-level script
    #[test]
    fn whitespace_runs_do_not_matter(
        old in words_strategy(),
        new in words_strategy(),
        separators in prop::collection::vec(whitespace_strategy(), 1..4),
        leading in "[ \t]{0,3}",
    ) {
        let re = whitespace();
        let single_old = old.join(" ");
        let single_new = new.join(" ");
        let spaced_old = format!("{leading}{}", join_with(&old, &separators));
        let spaced_new = format!("{}{leading}", join_with(&new, &separators));

        let single = TextDiff::new(&single_old, &single_new, Some(&re));
        let spaced = TextDiff::new(&spaced_old, &spaced_new, Some(&re));
        prop_assert_eq!(script(&single), script(&spaced));
    }

    /// Rendering is deterministic
    #[test]
    fn diff_row_is_deterministic(old in "[a-z ]{0,30}", new in "[a-z ]{0,30}") {
        let first: Node = diff_row("Name:", &old, &new, Some(r"\s+")).into();
        let second: Node = diff_row("Name:", &old, &new, Some(r"\s+")).into();
        prop_assert_eq!(first, second);
    }

    /// Splitting never panics, whatever the pattern matches
    #[test]
    fn diff_row_does_not_panic(old in ".*", new in ".*", split in "[-, ]|\\s+|x*") {
        let _ = diff_row("Field:", &old, &new, Some(&split));
    }
}
