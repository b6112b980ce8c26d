//! The loaded dictionary and phrase corpus, and the operations over them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::corpus::PhraseCorpus;
use crate::error::PunError;
use crate::language::dictionary::PronunciationDictionary;
use crate::language::pronounce::{self, WarningPolicy};
use crate::pun::generator;
use crate::types::{PhonemeSequence, Phrase, PunCandidate};

/// Dictionary and phrases, loaded once then read-only.
#[derive(Debug, Clone, Default)]
pub struct PhoneticIndex {
    dictionary: PronunciationDictionary,
    corpus: PhraseCorpus,
    policy: WarningPolicy,
}

/// Regular files in `dir`, sorted by file name.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("Failed to read directory entry in: {}", dir.display()))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

impl PhoneticIndex {
    pub fn new(policy: WarningPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Load one dictionary file. Later definitions replace earlier ones.
    pub fn load_words(&mut self, path: &Path) -> Result<usize> {
        self.dictionary.load(path)
    }

    /// Load one phrase file, resolving tokens against the words loaded so far.
    pub fn load_phrases(&mut self, path: &Path) -> Result<usize> {
        self.corpus.load(path, &self.dictionary, self.policy)
    }

    /// Load every dictionary file in `dir`. Returns the number of files.
    pub fn load_word_dir(&mut self, dir: &Path) -> Result<usize> {
        let files = list_files(dir)?;
        for file in &files {
            self.load_words(file)?;
        }
        Ok(files.len())
    }

    /// Load every phrase file in `dir`. Returns the number of files.
    pub fn load_phrase_dir(&mut self, dir: &Path) -> Result<usize> {
        let files = list_files(dir)?;
        for file in &files {
            self.load_phrases(file)?;
        }
        Ok(files.len())
    }

    pub fn phrases(&self) -> &[Phrase] {
        self.corpus.phrases()
    }

    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.corpus.len()
    }

    pub fn pronounce(&self, text: &str) -> Vec<PhonemeSequence> {
        pronounce::pronounce(&self.dictionary, text, self.policy)
    }

    /// Phonemes of the last word of `text`.
    pub fn target_phonemes(&self, text: &str) -> PhonemeSequence {
        pronounce::target_phonemes(&self.dictionary, text, self.policy)
    }

    /// Candidate puns for `word`, one per phrase with a matching token.
    ///
    /// Fails if the word has no pronunciation.
    pub fn generate_puns(&self, word: &str) -> Result<Vec<PunCandidate>, PunError> {
        let phonemes = self.target_phonemes(word);
        if phonemes.is_empty() {
            return Err(PunError::UnknownTarget(word.to_string()));
        }
        log::info!("Generating puns for: {} {:?}", word, phonemes);
        Ok(generator::generate(self.corpus.phrases(), word, &phonemes))
    }
}
