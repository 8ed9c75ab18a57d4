//! Sentence segmentation for extracted syllabus text
//!
//! Text is split after sentence-terminal punctuation followed by whitespace
//! and on runs of newlines. Fragments that are too short, or that never
//! contain a real word (three letters in a row), are dropped: page markers,
//! bare numbers and isolated initials carry nothing to score.

use lazy_static::lazy_static;
use regex::Regex;

/// Minimum token count for section detection
pub const DEFAULT_MIN_WORDS: usize = 2;

/// Minimum token count for the stricter readability-oriented mode
pub const READABILITY_MIN_WORDS: usize = 4;

lazy_static! {
    static ref BOUNDARY: Regex = Regex::new(r"[.!?]\s+|\n+").unwrap();
    static ref WORD_RUN: Regex = Regex::new(r"[A-Za-z]{3,}").unwrap();
}

/// Splits document text into analyzable sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    min_words: usize,
}

impl Segmenter {
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    /// Whether a trimmed fragment is worth scoring
    pub fn is_analyzable(&self, fragment: &str) -> bool {
        fragment.split_whitespace().count() >= self.min_words && WORD_RUN.is_match(fragment)
    }

    /// Segment text into trimmed sentences, preserving order and duplicates
    pub fn segment(&self, text: &str) -> Vec<String> {
        split_fragments(text)
            .into_iter()
            .map(str::trim)
            .filter(|fragment| self.is_analyzable(fragment))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS)
    }
}

/// Segment with the default (section detection) policy
pub fn segment(text: &str) -> Vec<String> {
    Segmenter::default().segment(text)
}

fn split_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for boundary in BOUNDARY.find_iter(text) {
        // Terminal punctuation stays with its sentence
        let end = if boundary.as_str().starts_with('\n') {
            boundary.start()
        } else {
            boundary.start() + 1
        };
        fragments.push(&text[start..end]);
        start = boundary.end();
    }
    fragments.push(&text[start..]);

    fragments
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every emitted sentence satisfies the keep policy
        #[test]
        fn sentences_satisfy_policy(text in "\\PC{0,300}", min_words in 1usize..6) {
            let segmenter = Segmenter::new(min_words);
            for sentence in segmenter.segment(&text) {
                prop_assert_eq!(sentence.trim(), sentence.as_str());
                prop_assert!(sentence.split_whitespace().count() >= min_words);
                prop_assert!(WORD_RUN.is_match(&sentence));
            }
        }

        /// Property: segmentation is deterministic
        #[test]
        fn segmentation_is_pure(text in "[A-Za-z .!?\n]{0,200}") {
            prop_assert_eq!(segment(&text), segment(&text));
        }
    }
}
