use serde::{Deserialize, Serialize};

/// Ordered phoneme symbols for one word. Empty means "no known pronunciation".
pub type PhonemeSequence = Vec<String>;

/// Discrete punnability tier of two pronunciations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Quality {
    None = 0,
    Partial = 1,
    Similar = 2,
    /// Rhymes, or pronounced identically
    Rhyme = 3,
}

impl Quality {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// True for any tier worth turning into a pun.
    pub fn is_match(self) -> bool {
        self >= Quality::Partial
    }
}

impl From<Quality> for u8 {
    fn from(q: Quality) -> u8 {
        q.as_u8()
    }
}

impl TryFrom<u8> for Quality {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Quality::None),
            1 => Ok(Quality::Partial),
            2 => Ok(Quality::Similar),
            3 => Ok(Quality::Rhyme),
            other => Err(format!("quality tier out of range: {}", other)),
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A stock phrase loaded from a phrase file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phrase {
    /// Label from the most recent `#` header line (may be empty)
    pub origin: String,
    /// File the phrase was read from
    pub source_file: String,
    /// Trimmed line as written
    pub original: String,
    /// Whitespace tokens, punctuation split out as standalone tokens
    pub tokens: Vec<String>,
    /// One sequence per token, index-aligned with `tokens`
    pub token_phonemes: Vec<PhonemeSequence>,
}

/// One generated pun.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PunCandidate {
    pub text: String,
    pub quality: Quality,
    pub origin: String,
    /// Phrase token that was swapped for the target word
    pub replaced: String,
    pub source_file: String,
}

impl PunCandidate {
    /// Serialize for JSON output.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "pun": self.text,
            "quality": self.quality.as_u8(),
            "origin": self.origin,
            "replaced": self.replaced,
            "file": self.source_file,
        })
    }
}
