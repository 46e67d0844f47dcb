//! Hiragana and katakana romanization.
//!
//! ```
//! assert_eq!(waapuro::romanize("こんにちは"), "konnitiha");
//! assert_eq!(waapuro::romanize_hepburnish("まっちゃ"), "matcha");
//! ```

pub mod kana;
pub mod romanize;
pub mod settings;
mod trace_init;
pub mod unicode;

pub use romanize::{
    romanize, romanize_hepburnish, romanize_units, romanize_units_with, romanize_with,
    RomanizeOptions,
};
pub use trace_init::init_tracing;
