//! Property-based tests for wildcard matching and template expansion.

use proptest::prelude::*;
use shellrules::{PropertyStore, wildcard};

/// Naive reference matcher, captures ignored. Input sizes are kept small
/// enough that the exponential worst case does not matter here.
fn naive_match(pattern: &[char], input: &[char]) -> bool {
    match pattern.first() {
        None => input.is_empty(),
        Some('?') => !input.is_empty() && naive_match(&pattern[1..], &input[1..]),
        Some('*') => (0..=input.len()).any(|taken| naive_match(&pattern[1..], &input[taken..])),
        Some(&literal) => {
            input.first() == Some(&literal) && naive_match(&pattern[1..], &input[1..])
        }
    }
}

/// Build a pattern guaranteed to match `input` by mapping each character to
/// itself, `?`, or `*` according to `choices`.
fn pattern_covering(input: &str, choices: &[u8]) -> String {
    input
        .chars()
        .zip(choices.iter().cycle())
        .map(|(c, choice)| match choice % 3 {
            0 => c,
            1 => '?',
            _ => '*',
        })
        .collect()
}

proptest! {
    #[test]
    fn derived_pattern_always_matches(
        input in "[a-z]{0,40}",
        choices in prop::collection::vec(0u8..3, 1..41),
    ) {
        let pattern = pattern_covering(&input, &choices);
        let captures = wildcard::solve(&pattern, &input);
        prop_assert!(captures.is_some(), "pattern {pattern} must match {input}");
    }

    #[test]
    fn successful_match_round_trips(
        pattern in "[abc*?]{0,12}",
        input in "[abc]{0,16}",
    ) {
        if let Some(captures) = wildcard::solve(&pattern, &input) {
            prop_assert_eq!(wildcard::rebuild(&pattern, &captures), input);
        }
    }

    #[test]
    fn matches_agree_with_reference(
        pattern in "[abc*?]{0,10}",
        input in "[abc]{0,12}",
    ) {
        let pattern_chars: Vec<char> = pattern.chars().collect();
        let input_chars: Vec<char> = input.chars().collect();
        prop_assert_eq!(
            wildcard::is_match(&pattern, &input),
            naive_match(&pattern_chars, &input_chars)
        );
    }

    #[test]
    fn captures_cover_every_wildcard(
        pattern in "[abc*?]{0,12}",
        input in "[abc]{0,16}",
    ) {
        if let Some(captures) = wildcard::solve(&pattern, &input) {
            let wildcard_count = pattern.chars().filter(|&c| wildcard::is_wildcard(c)).count();
            prop_assert_eq!(captures.len(), wildcard_count);
            let mut positions: Vec<usize> = captures.iter().map(|c| c.position).collect();
            let sorted = {
                let mut s = positions.clone();
                s.sort_unstable();
                s
            };
            prop_assert_eq!(&positions, &sorted, "captures ordered by pattern position");
            positions.dedup();
            prop_assert_eq!(positions.len(), captures.len(), "one capture per wildcard");
        }
    }

    #[test]
    fn expansion_is_idempotent_without_token_values(
        template in "[a-z ${}]{0,40}",
        name in "[a-z]{1,8}",
        value in "[a-z ]{0,20}",
    ) {
        let mut store = PropertyStore::empty();
        store.set_property(&name, &value);

        let once = store.expand(&template);
        let twice = store.expand(&once);
        // values without ${ can never introduce new tokens
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn expansion_preserves_templates_with_no_known_tokens(
        template in "[a-z .${}]{0,40}",
    ) {
        let store = PropertyStore::empty();
        prop_assert_eq!(store.expand(&template), template);
    }
}
