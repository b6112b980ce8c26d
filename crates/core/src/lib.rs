//! Phonetic pun generation.
//!
//! Words are resolved to ARPABET phonemes through a pronunciation dictionary,
//! then compared against every token of a corpus of stock phrases. Tokens that
//! sound like the target word are swapped out for it.

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod language;
pub mod pun;
pub mod types;

pub use error::PunError;
pub use index::PhoneticIndex;
pub use language::WarningPolicy;
pub use types::{PhonemeSequence, Phrase, PunCandidate, Quality};
