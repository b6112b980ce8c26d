//! Build candidate puns by swapping the target word into stock phrases.

use std::collections::HashSet;

use crate::pun::similarity::score;
use crate::types::{Phrase, PunCandidate, Quality};

lazy_static::lazy_static! {
    /// Function words that make dull puns. Matches on these are capped at
    /// `Quality::Partial`.
    static ref STOPLIST: HashSet<&'static str> =
        ["that", "the", "a", "an", "it", "those", "this", "-"].into_iter().collect();
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character, leave the rest alone.
fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace `token` (as written, then capitalised) in `original` with `word`.
fn substitute(original: &str, token: &str, word: &str) -> String {
    let replaced = original
        .replace(token, word)
        .replace(&capitalize(token), word);
    upper_first(&replaced)
}

/// Pun for one phrase, if any token sounds like the target.
///
/// The first token that scores at least `Partial` wins, even if a later
/// token would score higher.
pub fn pun_for_phrase(phrase: &Phrase, word: &str, word_phonemes: &[String]) -> Option<PunCandidate> {
    for (token, phonemes) in phrase.tokens.iter().zip(&phrase.token_phonemes) {
        if phonemes.is_empty() {
            continue;
        }

        let mut quality = score(phonemes, word_phonemes);
        if !quality.is_match() {
            log::trace!(
                "comparing {} {:?} and {} {:?} returns {}",
                token, phonemes, word, word_phonemes, quality
            );
            continue;
        }
        log::debug!(
            "comparing {} {:?} and {} {:?} returns {}",
            token, phonemes, word, word_phonemes, quality
        );

        if STOPLIST.contains(token.to_lowercase().as_str()) {
            quality = Quality::Partial;
        }

        return Some(PunCandidate {
            text: substitute(&phrase.original, token, word),
            quality,
            origin: phrase.origin.clone(),
            replaced: token.clone(),
            source_file: phrase.source_file.clone(),
        });
    }
    None
}

/// One candidate per phrase that has a matching token, in phrase order.
pub fn generate<'a, I>(phrases: I, word: &str, word_phonemes: &[String]) -> Vec<PunCandidate>
where
    I: IntoIterator<Item = &'a Phrase>,
{
    phrases
        .into_iter()
        .filter_map(|phrase| pun_for_phrase(phrase, word, word_phonemes))
        .collect()
}
