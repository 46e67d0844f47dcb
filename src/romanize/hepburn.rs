//! Hepburn-ish adjustments applied over Nihon-shiki units.

/// Whole-unit replacements from Nihon-shiki to Hepburn spelling.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("si", "shi"),
    ("zi", "ji"),
    ("zya", "ja"),
    ("zyo", "jo"),
    ("ti", "chi"),
    ("di", "ji"),
    ("tu", "tsu"),
    ("du", "zu"),
    ("hu", "fu"),
];

/// Trimmed units after which a following `y` glide is dropped
/// (`sh` + `ya` → `sha`, `tch` + `yo` → `tcho`).
const GLIDE_ABSORBING_STEMS: &[&str] = &["ch", "tch", "sh", "ssh", "j"];

/// Hepburn spelling of a basic unit, if it differs from Nihon-shiki.
pub(super) fn substitute(unit: &str) -> Option<&'static str> {
    SUBSTITUTIONS
        .iter()
        .find(|(nihon, _)| *nihon == unit)
        .map(|&(_, hepburn)| hepburn)
}

/// Whether a small y-kana following `stem` should lose its `y`.
pub(super) fn absorbs_glide(stem: &str) -> bool {
    GLIDE_ABSORBING_STEMS.contains(&stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_exact_units() {
        assert_eq!(substitute("si"), Some("shi"));
        assert_eq!(substitute("tu"), Some("tsu"));
        assert_eq!(substitute("di"), Some("ji"));
        assert_eq!(substitute("ka"), None);
        // Only whole units are replaced.
        assert_eq!(substitute("ssi"), None);
        assert_eq!(substitute("s"), None);
    }

    #[test]
    fn glide_stems() {
        assert!(absorbs_glide("sh"));
        assert!(absorbs_glide("tch"));
        assert!(absorbs_glide("j"));
        assert!(!absorbs_glide("k"));
        assert!(!absorbs_glide("s"));
        assert!(!absorbs_glide("'sh"));
    }
}
