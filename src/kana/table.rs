use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use super::names::{parse_names_toml, KanaNameError, BLOCK_END, BLOCK_START, DEFAULT_TOML};

/// How a Unicode character name classifies a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaClass<'a> {
    /// Full-size kana; carries the syllable part of the name, e.g. `KA`.
    Basic(&'a str),
    /// Small (combining) kana, e.g. `YA` for ゃ.
    Small(&'a str),
}

/// Classify a character name as a basic or small kana letter.
///
/// Only names of the exact form `{HIRAGANA,KATAKANA} LETTER [SMALL ]<X>`
/// where `<X>` is a single word qualify. Everything else (marks, digraphs,
/// punctuation, empty names) yields `None`.
pub fn classify_name(name: &str) -> Option<KanaClass<'_>> {
    let rest = name
        .strip_prefix("HIRAGANA LETTER ")
        .or_else(|| name.strip_prefix("KATAKANA LETTER "))?;
    if let Some(syllable) = rest.strip_prefix("SMALL ") {
        return is_single_word(syllable).then_some(KanaClass::Small(syllable));
    }
    is_single_word(rest).then_some(KanaClass::Basic(rest))
}

fn is_single_word(s: &str) -> bool {
    !s.is_empty() && !s.contains(' ')
}

/// Lookup tables from kana to their Nihon-shiki romanization unit.
#[derive(Debug, Clone, Default)]
pub struct KanaTables {
    basic: BTreeMap<char, String>,
    small: BTreeMap<char, String>,
}

impl KanaTables {
    /// Get or initialize the global tables built from the embedded name data.
    pub fn global() -> &'static KanaTables {
        static INSTANCE: OnceLock<KanaTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Self::from_names_toml(DEFAULT_TOML).expect("embedded Unicode name table must be valid")
        })
    }

    /// Build tables from a name table in the embedded TOML format.
    pub fn from_names_toml(toml_str: &str) -> Result<Self, KanaNameError> {
        let names = parse_names_toml(toml_str)?;
        Ok(Self::from_names(&names))
    }

    /// Build tables by classifying every codepoint of the kana block.
    /// Codepoints missing from `names` are treated as unnamed.
    pub fn from_names(names: &BTreeMap<char, String>) -> Self {
        let _span = debug_span!("build_kana_tables", names = names.len()).entered();
        let mut tables = KanaTables::default();

        for kana in (BLOCK_START..BLOCK_END).filter_map(char::from_u32) {
            let name = names.get(&kana).map(String::as_str).unwrap_or("");
            match classify_name(name) {
                Some(KanaClass::Small(syllable)) => {
                    tables.small.insert(kana, syllable.to_ascii_lowercase());
                }
                Some(KanaClass::Basic(syllable)) => {
                    tables.basic.insert(kana, syllable.to_ascii_lowercase());
                }
                None => {}
            }
        }

        debug!(basic = tables.basic.len(), small = tables.small.len());
        tables
    }

    pub fn basic(&self, kana: char) -> Option<&str> {
        self.basic.get(&kana).map(String::as_str)
    }

    pub fn small(&self, kana: char) -> Option<&str> {
        self.small.get(&kana).map(String::as_str)
    }

    /// Basic kana in codepoint order.
    pub fn basic_entries(&self) -> impl Iterator<Item = (char, &str)> {
        self.basic.iter().map(|(&k, v)| (k, v.as_str()))
    }

    /// Small kana in codepoint order.
    pub fn small_entries(&self) -> impl Iterator<Item = (char, &str)> {
        self.small.iter().map(|(&k, v)| (k, v.as_str()))
    }
}
