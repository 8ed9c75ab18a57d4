//! Readability metric computation
//!
//! Flesch Reading Ease, Flesch-Kincaid grade level and the Gunning Fog index
//! are all derived from sentence, word and syllable counts. Syllables are
//! estimated from vowel groups, which is close enough for banding.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ReadabilityScores;

lazy_static! {
    // Terminal punctuation only ends a sentence before whitespace or end of text,
    // so "2.1" and "smith@university.edu" stay inside their sentence
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+(?:\s+|$)|\n+").unwrap();
    static ref WORD: Regex = Regex::new(r"[A-Za-z]+(?:['’-][A-Za-z]+)*").unwrap();
    static ref VOWEL_GROUP: Regex = Regex::new(r"[aeiouy]+").unwrap();
}

/// Words of this many syllables or more count as complex for Gunning Fog
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Source of readability metrics for a block of text
pub trait ReadabilityMetrics: Send + Sync {
    fn metrics(&self, text: &str) -> ReadabilityScores;
}

/// Raw counts behind the readability formulas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
    pub complex_words: usize,
}

impl TextCounts {
    pub fn from_text(text: &str) -> Self {
        let mut counts = TextCounts::default();

        for sentence in SENTENCE_BREAK.split(text) {
            let mut words_in_sentence = 0;
            for word in WORD.find_iter(sentence) {
                let syllables = count_syllables(word.as_str());
                words_in_sentence += 1;
                counts.syllables += syllables;
                if syllables >= COMPLEX_WORD_SYLLABLES {
                    counts.complex_words += 1;
                }
            }
            if words_in_sentence > 0 {
                counts.sentences += 1;
                counts.words += words_in_sentence;
            }
        }

        counts
    }

    fn words_per_sentence(&self) -> f64 {
        if self.sentences == 0 {
            0.0
        } else {
            self.words as f64 / self.sentences as f64
        }
    }

    fn syllables_per_word(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.syllables as f64 / self.words as f64
        }
    }

    fn complex_ratio(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.complex_words as f64 / self.words as f64
        }
    }

    pub fn reading_ease(&self) -> f64 {
        206.835 - 1.015 * self.words_per_sentence() - 84.6 * self.syllables_per_word()
    }

    pub fn grade_level(&self) -> f64 {
        0.39 * self.words_per_sentence() + 11.8 * self.syllables_per_word() - 15.59
    }

    pub fn fog_index(&self) -> f64 {
        0.4 * (self.words_per_sentence() + 100.0 * self.complex_ratio())
    }
}

/// Estimate syllables in a single word
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let groups = VOWEL_GROUP.find_iter(&lower).count();

    // Silent trailing 'e' ("make"), but not consonant + "le" ("table")
    let silent_e = groups > 1
        && lower.ends_with('e')
        && !lower.ends_with("le")
        && !lower.ends_with("ee");

    let count = if silent_e { groups - 1 } else { groups };
    count.max(1)
}

/// Built-in metrics provider using classic formula coefficients
///
/// Empty text has zero ratios, which gives reading ease 206.835, grade level
/// -15.59 and fog 0: easy on every band, so no penalty is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextStatistics;

impl TextStatistics {
    pub fn new() -> Self {
        Self
    }
}

impl ReadabilityMetrics for TextStatistics {
    fn metrics(&self, text: &str) -> ReadabilityScores {
        let counts = TextCounts::from_text(text);
        ReadabilityScores {
            reading_ease: counts.reading_ease(),
            grade_level: counts.grade_level(),
            density_index: counts.fog_index(),
        }
    }
}
