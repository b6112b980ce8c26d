//! Punnability score of two pronunciations.
//!
//! Symbols are compared exactly, stress markers included, so `AE1` and
//! `AE0` are different phonemes here.

use crate::types::Quality;

/// Sub-sequence matching for the partial tier. Off: the tier has never fired
/// and turning it on changes which token wins in most phrases.
const CONTAINMENT_ENABLED: bool = false;

/// Count matching symbols walking back from the end of both sequences.
///
/// Offsets run from 1 up to (but not including) the shorter length, so the
/// symbol at offset `shorter` is never compared and sequences of length 1
/// always count 0.
fn trailing_matches(a: &[String], b: &[String]) -> usize {
    let shorter = a.len().min(b.len());
    (1..shorter)
        .take_while(|&i| a[a.len() - i] == b[b.len() - i])
        .count()
}

/// True if `needle` appears as a contiguous run inside `haystack`.
fn contains_sequence(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

/// Score two pronunciations. The first matching rule wins:
///
/// 1. identical when concatenated (including both empty): `Rhyme`
/// 2. two trailing symbols match, or one does and both sequences are the
///    same length of at most 2: `Rhyme`
/// 3. same length with equal first and last symbols: `Similar`
/// 4. containment: `Partial` (disabled)
/// 5. otherwise `None`
pub fn score(a: &[String], b: &[String]) -> Quality {
    if a.concat() == b.concat() {
        return Quality::Rhyme;
    }

    let same = trailing_matches(a, b);
    let shorter = a.len().min(b.len());
    if same >= 2 || (same >= 1 && shorter <= 2 && a.len() == b.len()) {
        return Quality::Rhyme;
    }

    if a.len() == b.len() && !a.is_empty() && a.first() == b.first() && a.last() == b.last() {
        return Quality::Similar;
    }

    if CONTAINMENT_ENABLED && (contains_sequence(a, b) || contains_sequence(b, a)) {
        return Quality::Partial;
    }

    Quality::None
}
