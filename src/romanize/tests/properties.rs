//! Property-based tests for the romanizer.
//!
//! Generates random kana strings via proptest and checks invariants that
//! hold for any input, independent of specific spellings.

use proptest::prelude::*;

use crate::kana::KanaTables;
use crate::romanize::{romanize, romanize_hepburnish, romanize_units, RomanizeOptions};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_basic_kana() -> impl Strategy<Value = char> {
    let kana: Vec<char> = KanaTables::global().basic_entries().map(|(k, _)| k).collect();
    prop::sample::select(kana)
}

fn arb_kana_char() -> impl Strategy<Value = char> {
    let small: Vec<char> = KanaTables::global().small_entries().map(|(k, _)| k).collect();
    prop_oneof![
        10 => arb_basic_kana(),
        2 => prop::sample::select(small),
        1 => Just('っ'),
        1 => Just('ー'),
        1 => Just('ん'),
    ]
}

fn arb_kana_string() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_kana_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn kana_output_is_ascii(text in arb_kana_string()) {
        let romaji = romanize(&text);
        prop_assert!(romaji.is_ascii(), "{text:?} -> {romaji:?}");
        let romaji = romanize_hepburnish(&text);
        prop_assert!(romaji.is_ascii(), "{text:?} -> {romaji:?}");
    }

    #[test]
    fn units_concatenate_to_output(text in arb_kana_string(), hepburnish in any::<bool>()) {
        let options = RomanizeOptions { hepburnish };
        let units = romanize_units(&text, &options);
        prop_assert_eq!(units.concat(), crate::romanize::romanize_with(&text, &options));
    }

    #[test]
    fn units_never_exceed_input(text in arb_kana_string()) {
        // Every unit comes from one input character, plus at most one
        // trailing apostrophe for a stranded sokuon.
        let units = romanize_units(&text, &RomanizeOptions::default());
        prop_assert!(units.len() <= text.chars().count() + 1);
    }

    // Lowercase is left out: a passed-through "n" followed by a vowel
    // picks up the syllabic-n apostrophe.
    #[test]
    fn ascii_passes_through(text in "[A-Z0-9 .,!?-]{0,40}") {
        prop_assert_eq!(romanize(&text), text.clone());
        prop_assert_eq!(romanize_hepburnish(&text), text);
    }

    #[test]
    fn never_panics(text in any::<String>()) {
        let _ = romanize(&text);
        let _ = romanize_hepburnish(&text);
    }

    #[test]
    fn trailing_sokuon_adds_apostrophe(text in arb_kana_string()) {
        let with_sokuon = format!("{text}っ");
        let romaji = romanize(&with_sokuon);
        prop_assert!(romaji.ends_with('\''), "{with_sokuon:?} -> {romaji:?}");
    }
}
