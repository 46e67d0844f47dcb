use std::collections::BTreeMap;

use serde::Deserialize;

/// First codepoint of the Hiragana block.
pub const BLOCK_START: u32 = 0x3040;
/// One past the last codepoint of the Katakana block.
pub const BLOCK_END: u32 = 0x3100;

/// Embedded Unicode names for U+3040..U+30FF.
pub const DEFAULT_TOML: &str = include_str!("unicode_names.toml");

#[derive(Deserialize)]
struct NameTable {
    names: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaNameError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[names] table is empty")]
    Empty,
    #[error("invalid codepoint key: {0} (expected U+XXXX)")]
    InvalidCodepoint(String),
    #[error("codepoint outside the kana block: {0}")]
    OutOfBlock(String),
    #[error("empty name for key: {0}")]
    EmptyName(String),
}

/// Parse TOML text into a sorted `BTreeMap<char, unicode name>`.
pub fn parse_names_toml(toml_str: &str) -> Result<BTreeMap<char, String>, KanaNameError> {
    let table: NameTable =
        toml::from_str(toml_str).map_err(|e| KanaNameError::Parse(e.to_string()))?;

    if table.names.is_empty() {
        return Err(KanaNameError::Empty);
    }

    let mut names = BTreeMap::new();
    for (key, name) in table.names {
        let ch = parse_codepoint(&key)?;
        if name.is_empty() {
            return Err(KanaNameError::EmptyName(key));
        }
        names.insert(ch, name);
    }
    Ok(names)
}

fn parse_codepoint(key: &str) -> Result<char, KanaNameError> {
    let hex = key
        .strip_prefix("U+")
        .ok_or_else(|| KanaNameError::InvalidCodepoint(key.to_string()))?;
    let cp = u32::from_str_radix(hex, 16)
        .map_err(|_| KanaNameError::InvalidCodepoint(key.to_string()))?;
    if !(BLOCK_START..BLOCK_END).contains(&cp) {
        return Err(KanaNameError::OutOfBlock(key.to_string()));
    }
    char::from_u32(cp).ok_or_else(|| KanaNameError::InvalidCodepoint(key.to_string()))
}
