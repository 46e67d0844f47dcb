//! Character-level Unicode classification for kana text.

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Sokuon っ/ッ: doubles the consonant of the following kana.
pub fn is_sokuon(c: char) -> bool {
    matches!(c, 'っ' | 'ッ')
}

/// Chouonpu ー (U+30FC, the prolonged sound mark).
pub fn is_chouonpu(c: char) -> bool {
    c == 'ー'
}

/// Whether a romanization unit begins with a sound that a preceding
/// syllabic n would merge into (`n` + `a` reads as `na`).
pub fn starts_with_vowel_or_y(unit: &str) -> bool {
    matches!(unit.chars().next(), Some('a' | 'i' | 'u' | 'e' | 'o' | 'y'))
}
