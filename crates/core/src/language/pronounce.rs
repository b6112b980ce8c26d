//! Turn words and phrases into phoneme sequences via the dictionary.

use crate::language::dictionary::PronunciationDictionary;
use crate::types::PhonemeSequence;

/// Punctuation marks that tokenize standalone and have no pronunciation.
pub const PUNCTUATION: [&str; 6] = [".", "!", "?", ",", ":", "-"];

/// Whether unknown words are reported while resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningPolicy {
    #[default]
    Warn,
    Quiet,
}

pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.contains(&token)
}

/// Resolve each whitespace token of `text`.
///
/// Always returns one sequence per token. Unknown words and punctuation get
/// an empty sequence; only unknown words are warned about.
pub fn pronounce(
    dict: &PronunciationDictionary,
    text: &str,
    policy: WarningPolicy,
) -> Vec<PhonemeSequence> {
    text.to_uppercase()
        .split_whitespace()
        .map(|word| match dict.resolve(word) {
            Some(phonemes) => phonemes.clone(),
            None => {
                if !is_punctuation(word) && policy == WarningPolicy::Warn {
                    log::warn!("unknown word: {}", word);
                }
                Vec::new()
            }
        })
        .collect()
}

/// Pronunciation used when `text` is a pun target.
///
/// Only the last token counts, so "big cat" resolves to CAT.
pub fn target_phonemes(
    dict: &PronunciationDictionary,
    text: &str,
    policy: WarningPolicy,
) -> PhonemeSequence {
    pronounce(dict, text, policy).pop().unwrap_or_default()
}
