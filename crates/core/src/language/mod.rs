//! Pronunciation lookup.

pub mod dictionary;
pub mod pronounce;

pub use dictionary::PronunciationDictionary;
pub use pronounce::{pronounce, target_phonemes, WarningPolicy};
