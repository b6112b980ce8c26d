//! Pronunciation dictionary in CMU Pronouncing Dictionary format.
//!
//! Format: one word per line, "WORD  PH1 PH2 PH3 ...".
//! Lines starting with ";;;" are comments. Words are stored uppercase and a
//! later definition of the same word replaces the earlier one.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::PhonemeSequence;

#[derive(Debug, Clone, Default)]
pub struct PronunciationDictionary {
    entries: HashMap<String, PhonemeSequence>,
}

impl PronunciationDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a dictionary file, adding its entries. Returns the number of
    /// entries read from the file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
        let count = self.parse_str(&String::from_utf8_lossy(&bytes));
        log::info!("Loaded {} dictionary entries from {}", count, path.display());
        Ok(count)
    }

    /// Add every entry in `data`. Returns the number of entries read.
    pub fn parse_str(&mut self, data: &str) -> usize {
        let mut count = 0;
        for line in data.lines() {
            if line.starts_with(";;;") || line.trim().is_empty() {
                continue;
            }
            let upper = line.to_uppercase();
            let mut parts = upper.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            let phonemes: PhonemeSequence = parts.map(|s| s.to_string()).collect();
            self.entries.insert(word.to_string(), phonemes);
            count += 1;
        }
        count
    }

    /// Look up a word (case-insensitive).
    pub fn resolve(&self, word: &str) -> Option<&PhonemeSequence> {
        self.entries.get(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
