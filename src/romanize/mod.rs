//! Kana-to-romaji transcription.
//!
//! Output follows ISO 3602 Strict (Nihon-shiki) with long vowels spelled out
//! (`oo`, `ou`), e.g. こんにちは → `konnitiha`. With `hepburnish` set, the
//! units that differ most visibly from Hepburn are respelled: `si` → `shi`,
//! `tu` → `tsu`, `zya` → `ja`, `cchi` → `tchi`, and so on.
//!
//! Long vowels are not inferred from context and irregular readings (topic
//! marker は as `wa`) are not handled. Characters outside the kana tables are
//! passed through as-is, but how they interact with the surrounding kana is
//! unspecified.

mod hepburn;

use serde::Deserialize;
use tracing::{debug, debug_span};

use crate::kana::KanaTables;
use crate::unicode::{is_chouonpu, is_kana, is_sokuon, starts_with_vowel_or_y};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RomanizeOptions {
    /// Respell Nihon-shiki units in Hepburn style.
    #[serde(default)]
    pub hepburnish: bool,
}

impl RomanizeOptions {
    pub fn hepburnish() -> Self {
        Self { hepburnish: true }
    }
}

/// Romanize `text` in Nihon-shiki.
pub fn romanize(text: &str) -> String {
    romanize_with(text, &RomanizeOptions::default())
}

/// Romanize `text` with Hepburn-ish respelling.
pub fn romanize_hepburnish(text: &str) -> String {
    romanize_with(text, &RomanizeOptions::hepburnish())
}

pub fn romanize_with(text: &str, options: &RomanizeOptions) -> String {
    romanize_units(text, options).concat()
}

/// Romanize `text` and return the individual units: one per input character
/// except sokuon, plus a trailing `'` when the text ends in sokuon.
pub fn romanize_units(text: &str, options: &RomanizeOptions) -> Vec<String> {
    romanize_units_with(KanaTables::global(), text, options)
}

/// Like [`romanize_units`], but against caller-supplied tables.
pub fn romanize_units_with(
    tables: &KanaTables,
    text: &str,
    options: &RomanizeOptions,
) -> Vec<String> {
    let hepburnish = options.hepburnish;
    let _span = debug_span!("romanize", hepburnish, len = text.len()).entered();

    let mut units: Vec<String> = Vec::new();
    let mut sokuon = false;

    for kana in text.chars() {
        if is_sokuon(kana) {
            sokuon = true;
            continue;
        }

        if is_chouonpu(kana) {
            // Repeat the vowel of the previous unit.
            let unit = match units.last().and_then(|prev| prev.chars().last()) {
                Some(vowel) => vowel.to_string(),
                None => "-".to_string(),
            };
            units.push(unit);
            continue;
        }

        if let Some(small) = tables.small(kana) {
            let mut unit = small;
            if let Some(prev) = units.last_mut() {
                // The small kana replaces the vowel of the previous unit.
                prev.pop();
                if hepburnish && unit.starts_with('y') && hepburn::absorbs_glide(prev) {
                    unit = &unit[1..];
                }
            }
            units.push(unit.to_string());
            continue;
        }

        let mut unit = match tables.basic(kana) {
            Some(romaji) => romaji.to_string(),
            None => {
                debug!(%kana, in_kana_block = is_kana(kana), "pass-through");
                kana.to_string()
            }
        };
        if hepburnish {
            if let Some(respelled) = hepburn::substitute(&unit) {
                unit = respelled.to_string();
            }
        }
        if sokuon {
            sokuon = false;
            unit = geminate(unit, hepburnish);
        }
        if units.last().is_some_and(|prev| prev == "n") && starts_with_vowel_or_y(&unit) {
            unit.insert(0, '\'');
        }
        units.push(unit);
    }

    if sokuon {
        debug!("sokuon at end of input");
        units.push("'".to_string());
    }

    units
}

/// Double the leading consonant of `unit`; in Hepburn-ish mode `chi` and
/// friends double as `tchi`.
fn geminate(unit: String, hepburnish: bool) -> String {
    match unit.chars().next() {
        Some('c') if hepburnish => format!("t{unit}"),
        Some(first) => format!("{first}{unit}"),
        None => unit,
    }
}
