//! Sequence matching against the key history.

use crate::key::Key;

/// Check whether `sequence` is the exact tail of `history`.
///
/// Comparing only the tail lets ordered multi-key sequences (e.g. `g` then `g`
/// then `t`) match without separators. Order-sensitive, O(sequence length), no
/// side effects. An empty `sequence` never matches.
pub fn matches(history: &[Key], sequence: &[Key]) -> bool {
    if sequence.is_empty() {
        return false;
    }
    if history.len() < sequence.len() {
        return false;
    }
    history[history.len() - sequence.len()..] == *sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn k(c: char) -> Key {
        Key::Char(c)
    }

    #[test]
    fn test_single_key_match() {
        assert!(matches(&[k('a')], &[k('a')]));
    }

    #[test]
    fn test_only_tail_compared() {
        assert!(matches(&[k('g'), k('g'), k('t')], &[k('g'), k('t')]));
    }

    #[test]
    fn test_order_matters() {
        assert!(!matches(&[k('g'), k('t')], &[k('t'), k('g')]));
    }

    #[test]
    fn test_empty_sequence_never_matches() {
        assert!(!matches(&[k('a')], &[]));
        assert!(!matches(&[], &[]));
    }

    #[test]
    fn test_short_history_never_matches() {
        assert!(!matches(&[], &[k('a')]));
        assert!(!matches(&[k('t')], &[k('g'), k('t')]));
    }

    fn arb_key() -> impl Strategy<Value = Key> {
        prop_oneof![
            proptest::char::range('a', 'z').prop_map(Key::Char),
            proptest::char::range('0', '9').prop_map(Key::Char),
            Just(Key::Enter),
            Just(Key::Space),
            Just(Key::ArrowUp),
            Just(Key::Shift),
            (1u8..=20u8).prop_map(Key::F),
        ]
    }

    proptest! {
        #[test]
        fn prop_tail_always_matches(
            prefix in proptest::collection::vec(arb_key(), 0..8),
            sequence in proptest::collection::vec(arb_key(), 1..5),
        ) {
            let mut history = prefix.clone();
            history.extend(sequence.iter().copied());
            prop_assert!(matches(&history, &sequence));
        }

        #[test]
        fn prop_shorter_history_never_matches(
            sequence in proptest::collection::vec(arb_key(), 1..6),
        ) {
            let history = &sequence[1..];
            prop_assert!(!matches(history, &sequence));
        }

        #[test]
        fn prop_empty_sequence_never_matches(
            history in proptest::collection::vec(arb_key(), 0..8),
        ) {
            prop_assert!(!matches(&history, &[]));
        }
    }
}
