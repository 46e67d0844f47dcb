//! Kana lookup tables derived from Unicode character names.
//!
//! Each codepoint of the Hiragana and Katakana blocks is classified by its
//! name: `HIRAGANA LETTER SMALL YA` goes to the small table as `ya`,
//! `KATAKANA LETTER SI` to the basic table as `si`. Marks, digraphs and
//! punctuation are left out of both.

mod names;
mod table;

pub use names::{parse_names_toml, KanaNameError};
pub use table::{classify_name, KanaClass, KanaTables};

/// Returns the embedded Unicode name table.
pub fn default_names_toml() -> &'static str {
    names::DEFAULT_TOML
}
