//! Spelling check over extracted syllabus text
//!
//! Only lowercase words of three or more letters are checked. Capitalised
//! and all-caps words (names, acronyms), words with digits, URL fragments
//! and hyphenated compounds are skipped. Each word is checked once,
//! case-insensitively, at its first occurrence.

use crate::error::AnalysisError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b[a-zA-Z][a-zA-Z'-]*\b").unwrap();
    static ref URL_PREFIX: Regex = Regex::new(r"^(http|www|edu|com|org|net)").unwrap();
}

/// Shortest word that is checked
pub const MIN_WORD_LEN: usize = 3;

/// Suggestions further than this many edits away are not offered
pub const MAX_EDIT_DISTANCE: usize = 2;

pub const MAX_SUGGESTIONS: usize = 5;

/// Word source for the spelling check
pub trait Dictionary: Send + Sync {
    /// Whether the lowercase word is known
    fn contains(&self, word: &str) -> bool;

    /// Known words close to the lowercase word, best first
    fn suggestions(&self, word: &str) -> Vec<String>;
}

/// In-memory dictionary loaded from a one-word-per-line list
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: BTreeSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();
        Self { words }
    }

    /// Parse a word list such as `/usr/share/dict/words`
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AnalysisError::Dictionary(format!("{}: {}", path.display(), e)))?;

        let list = Self::parse(&content);
        if list.is_empty() {
            return Err(AnalysisError::Dictionary(format!(
                "{}: no words found",
                path.display()
            )));
        }

        tracing::debug!(words = list.len(), path = %path.display(), "Loaded dictionary");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Words at the smallest edit distance found (up to two edits), alphabetical
    fn suggestions(&self, word: &str) -> Vec<String> {
        let len = word.chars().count();
        let mut best = MAX_EDIT_DISTANCE + 1;
        let mut closest: Vec<&str> = Vec::new();

        for candidate in &self.words {
            if candidate.chars().count().abs_diff(len) > MAX_EDIT_DISTANCE {
                continue;
            }
            let distance = strsim::levenshtein(word, candidate);
            if distance == 0 || distance > best {
                continue;
            }
            if distance < best {
                best = distance;
                closest.clear();
            }
            closest.push(candidate);
        }

        closest
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(str::to_string)
            .collect()
    }
}

/// Whether a word is subject to the check at all
pub fn is_checkable(word: &str) -> bool {
    let first_upper = word.chars().next().is_some_and(|c| c.is_uppercase());
    let has_letters = word.chars().any(char::is_alphabetic);
    let all_caps = has_letters
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase);

    word.chars().count() >= MIN_WORD_LEN
        && !all_caps
        && !first_upper
        && !word.chars().any(|c| c.is_ascii_digit())
        && !URL_PREFIX.is_match(&word.to_lowercase())
        && !word.contains('-')
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    pub word: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpellingReport {
    /// Distinct words that passed the filters and were looked up
    pub words_checked: usize,
    pub misspellings: Vec<Misspelling>,
}

impl SpellingReport {
    pub fn total(&self) -> usize {
        self.misspellings.len()
    }
}

impl fmt::Display for SpellingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Spelling Report ---")?;
        for misspelling in &self.misspellings {
            let suggestions = if misspelling.suggestions.is_empty() {
                "None".to_string()
            } else {
                misspelling.suggestions.join(", ")
            };
            writeln!(
                f,
                "Misspelled: {} -> Suggestions: {}",
                misspelling.word, suggestions
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total possible misspelled words: {}", self.total())
    }
}

pub struct SpellChecker<'a> {
    dictionary: &'a dyn Dictionary,
}

impl<'a> SpellChecker<'a> {
    pub fn new(dictionary: &'a dyn Dictionary) -> Self {
        Self { dictionary }
    }

    /// Flag unknown words in document order
    pub fn check(&self, text: &str) -> SpellingReport {
        let mut seen = HashSet::new();
        let mut report = SpellingReport::default();

        for found in WORD.find_iter(text) {
            let word = found.as_str();
            let lower = word.to_lowercase();
            if !seen.insert(lower.clone()) || !is_checkable(word) {
                continue;
            }

            report.words_checked += 1;
            if !self.dictionary.contains(&lower) {
                report.misspellings.push(Misspelling {
                    word: word.to_string(),
                    suggestions: self.dictionary.suggestions(&lower),
                });
            }
        }

        tracing::debug!(
            checked = report.words_checked,
            flagged = report.total(),
            "Checked spelling"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn dictionary() -> WordList {
        WordList::from_words([
            "the", "syllabus", "lists", "grading", "policy", "police", "and", "rules", "example",
            "receive", "more", "late", "work", "don't",
        ])
    }

    fn flagged(text: &str) -> Vec<String> {
        SpellChecker::new(&dictionary())
            .check(text)
            .misspellings
            .into_iter()
            .map(|m| m.word)
            .collect()
    }

    #[test]
    fn test_short_words_are_skipped() {
        assert!(!is_checkable("an"));
        assert!(!is_checkable("qz"));
        assert!(is_checkable("qzx"));
        assert_eq!(flagged("qz xy"), Vec::<String>::new());
    }

    #[test]
    fn test_all_caps_words_are_skipped() {
        assert!(!is_checkable("NASA"));
        assert!(!is_checkable("CMPSC"));
        assert_eq!(flagged("Contact CMPSC staff"), vec!["staff".to_string()]);
    }

    #[test]
    fn test_capitalised_words_are_skipped() {
        assert!(!is_checkable("Smith"));
        assert!(!is_checkable("Recieve"));
        assert_eq!(flagged("Professor Smith"), Vec::<String>::new());
    }

    #[test]
    fn test_words_with_digits_are_skipped() {
        assert!(!is_checkable("cs463"));
        // The word pattern never starts a match inside "3pm"
        assert_eq!(flagged("meet at 3pm"), vec!["meet".to_string()]);
    }

    #[test]
    fn test_url_fragments_are_skipped() {
        for word in ["https", "www", "edu", "com", "org", "net", "network"] {
            assert!(!is_checkable(word), "{}", word);
        }
        assert_eq!(flagged("see www.example.edu"), vec!["see".to_string()]);
    }

    #[test]
    fn test_hyphenated_words_are_skipped() {
        assert!(!is_checkable("self-paced"));
        assert_eq!(flagged("a self-paced module"), vec!["module".to_string()]);
    }

    #[test]
    fn test_known_words_and_contractions_pass() {
        assert_eq!(flagged("the syllabus lists the grading policy"), Vec::<String>::new());
        assert_eq!(flagged("don't submit late work"), vec!["submit".to_string()]);
    }

    #[test]
    fn test_each_word_is_reported_once() {
        let report = SpellChecker::new(&dictionary()).check("recieve it, recieve more, RECIEVE");
        assert_eq!(report.total(), 1);
        assert_eq!(report.misspellings[0].word, "recieve");
        assert_eq!(report.misspellings[0].suggestions, vec!["receive".to_string()]);
    }

    #[test]
    fn test_suggestions_prefer_fewest_edits() {
        let dict = dictionary();
        assert_eq!(dict.suggestions("polcy"), vec!["policy".to_string()]);
        assert_eq!(
            dict.suggestions("polic"),
            vec!["police".to_string(), "policy".to_string()]
        );
        assert_eq!(dict.suggestions("zzzzzzzz"), Vec::<String>::new());
    }

    #[test]
    fn test_report_rendering() {
        let report = SpellChecker::new(&dictionary()).check("the grading polcy and qqqqqqqq rules");
        assert_eq!(
            report.to_string(),
            "--- Spelling Report ---\n\
             Misspelled: polcy -> Suggestions: policy\n\
             Misspelled: qqqqqqqq -> Suggestions: None\n\
             \n\
             Total possible misspelled words: 2\n"
        );
        assert_eq!(report.words_checked, 6);
    }

    #[test]
    fn test_word_list_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# course words\nSyllabus\n\n  rubric  ").unwrap();

        let list = WordList::from_file(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("syllabus"));
        assert!(list.contains("rubric"));
    }

    #[test]
    fn test_missing_or_empty_word_list_is_an_error() {
        assert!(matches!(
            WordList::from_file("/nonexistent/words"),
            Err(AnalysisError::Dictionary(_))
        ));

        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            WordList::from_file(file.path()),
            Err(AnalysisError::Dictionary(_))
        ));
    }
}
