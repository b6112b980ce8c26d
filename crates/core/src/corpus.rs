//! Stock phrases annotated with per-token pronunciations.
//!
//! Phrase files are plain text, one phrase per line. A line starting with
//! `#` names the origin of the phrases below it, e.g.
//!
//! ```text
//! # nursery rhymes
//! The cat sat on the mat.
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use crate::language::dictionary::PronunciationDictionary;
use crate::language::pronounce::{pronounce, WarningPolicy};
use crate::types::Phrase;

#[derive(Debug, Clone, Default)]
pub struct PhraseCorpus {
    phrases: Vec<Phrase>,
}

/// Pad punctuation with spaces so each mark becomes its own token.
fn separate_punctuation(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    for c in line.chars() {
        if matches!(c, ',' | '-' | '.' | '?' | '!' | ':') {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

impl PhraseCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a phrase file, appending its phrases. Returns the number of
    /// phrases added.
    pub fn load(
        &mut self,
        path: &Path,
        dict: &PronunciationDictionary,
        policy: WarningPolicy,
    ) -> Result<usize> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read phrases: {}", path.display()))?;
        let source = path.to_string_lossy().replace("//", "/");
        let count = self.parse_str(&data, &source, dict, policy);
        log::info!("Loaded {} phrases from {}", count, source);
        Ok(count)
    }

    /// Add every phrase in `data`, tagging them with `source_file`.
    ///
    /// The origin label starts out empty for each call.
    pub fn parse_str(
        &mut self,
        data: &str,
        source_file: &str,
        dict: &PronunciationDictionary,
        policy: WarningPolicy,
    ) -> usize {
        let mut origin = String::new();
        let mut count = 0;

        for line in data.lines() {
            let trimmed = line.trim();
            if trimmed.chars().count() <= 1 {
                continue;
            }
            if let Some(label) = line.strip_prefix('#') {
                origin = label.trim().to_string();
                continue;
            }

            let spaced = separate_punctuation(trimmed);
            let tokens: Vec<String> = spaced.split_whitespace().map(|t| t.to_string()).collect();
            let token_phonemes = pronounce(dict, &spaced, policy);
            debug_assert_eq!(tokens.len(), token_phonemes.len());

            self.phrases.push(Phrase {
                origin: origin.clone(),
                source_file: source_file.to_string(),
                original: trimmed.to_string(),
                tokens,
                token_phonemes,
            });
            count += 1;
        }
        count
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
