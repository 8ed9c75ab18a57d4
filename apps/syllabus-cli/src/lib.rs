//! Syllabus Checker command line
//!
//! Argument parsing, configuration layering and output rendering live here
//! so they can be tested without spawning the binary.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use syllabus_engine::{AnalysisReport, EngineConfig, ScoringVariant, SearchHit, SpellingReport};

#[derive(Parser, Debug)]
#[command(name = "syllabus-checker")]
#[command(
    version,
    about = "Check a course syllabus for required sections and readability"
)]
pub struct Cli {
    /// Enable debug logging (per-section scores)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a syllabus PDF and print the report
    Analyze {
        /// Path to a syllabus named DEPT_NUMBER_Instructor_Semester.pdf
        path: PathBuf,

        /// Presence threshold for sections
        #[arg(long)]
        threshold: Option<f32>,

        /// Minimum words for a sentence to be scored
        #[arg(long)]
        min_words: Option<usize>,

        /// Subtract the readability penalty from the total
        #[arg(long)]
        readability_penalty: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Find the sentence that best answers a query
    Search {
        path: PathBuf,
        query: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List possibly misspelled words
    Spellcheck {
        path: PathBuf,

        /// Word list, one word per line (default: /usr/share/dict/words)
        #[arg(long)]
        dictionary: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Build the engine configuration: defaults, file, environment, then flags
pub fn load_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let mut config = config.with_env_overrides()?;

    match &cli.command {
        Command::Analyze {
            threshold,
            min_words,
            readability_penalty,
            ..
        } => {
            if let Some(threshold) = threshold {
                config.threshold = *threshold;
            }
            if let Some(min_words) = min_words {
                config.min_sentence_words = *min_words;
            }
            if *readability_penalty {
                config.scoring_variant = ScoringVariant::WithReadabilityPenalty;
            }
        }
        Command::Spellcheck {
            dictionary: Some(dictionary),
            ..
        } => config.dictionary_path = dictionary.clone(),
        _ => {}
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

pub fn render_report(report: &AnalysisReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}

pub fn render_spelling(report: &SpellingReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize spelling report")
        }
    }
}

/// Outcome of a `search` query
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub threshold: f32,
    pub found: bool,
    pub hit: Option<SearchHit>,
}

impl SearchOutcome {
    pub fn new(query: &str, hit: Option<SearchHit>, threshold: f32) -> Self {
        Self {
            query: query.to_string(),
            threshold,
            found: hit.as_ref().is_some_and(|h| h.is_match(threshold)),
            hit,
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize search result")
            }
            OutputFormat::Text => {
                let verdict = if self.found { "Found" } else { "Missing" };
                Ok(match &self.hit {
                    Some(hit) => format!(
                        "Query: {}\nBest match (score = {:.2}): {}\nResult: {}",
                        self.query, hit.score, hit.sentence, verdict
                    ),
                    None => format!(
                        "Query: {}\nNo analyzable text in document\nResult: {}",
                        self.query, verdict
                    ),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_analyze() {
        let cli = parse(&[
            "syllabus-checker",
            "analyze",
            "CMPSC_463_Smith_Fall2025.pdf",
            "--threshold",
            "0.5",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Analyze {
                path,
                threshold,
                format,
                ..
            } => {
                assert_eq!(path, PathBuf::from("CMPSC_463_Smith_Fall2025.pdf"));
                assert_eq!(threshold, Some(0.5));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_with_global_verbose() {
        let cli = parse(&["syllabus-checker", "search", "a.pdf", "office hours", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Search { ref query, .. } if query == "office hours"));
    }

    #[test]
    fn test_missing_path_is_rejected() {
        assert!(Cli::try_parse_from(["syllabus-checker", "analyze"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold = 0.6\nmin_sentence_words = 3").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let cli = parse(&[
            "syllabus-checker",
            "--config",
            &path,
            "analyze",
            "x.pdf",
            "--threshold",
            "0.45",
            "--readability-penalty",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.threshold, 0.45);
        assert_eq!(config.min_sentence_words, 3);
        assert_eq!(config.scoring_variant, ScoringVariant::WithReadabilityPenalty);
    }

    #[test]
    fn test_out_of_range_threshold_fails_validation() {
        let cli = parse(&["syllabus-checker", "analyze", "x.pdf", "--threshold", "2"]);
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_spellcheck_dictionary_flag() {
        let cli = parse(&[
            "syllabus-checker",
            "spellcheck",
            "draft.pdf",
            "--dictionary",
            "words.txt",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.dictionary_path, PathBuf::from("words.txt"));
    }

    #[test]
    fn test_spelling_rendering() {
        let report = SpellingReport {
            words_checked: 4,
            misspellings: vec![syllabus_engine::Misspelling {
                word: "polcy".to_string(),
                suggestions: vec!["policy".to_string()],
            }],
        };
        assert!(render_spelling(&report, OutputFormat::Text)
            .unwrap()
            .contains("Misspelled: polcy -> Suggestions: policy"));

        let json: serde_json::Value =
            serde_json::from_str(&render_spelling(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["words_checked"], 4);
        assert_eq!(json["misspellings"][0]["suggestions"][0], "policy");
    }

    #[test]
    fn test_search_outcome_rendering() {
        let hit = SearchHit {
            query: "plagiarism".to_string(),
            sentence: "Avoid plagiarism.".to_string(),
            index: 3,
            score: 0.9,
        };
        let outcome = SearchOutcome::new("plagiarism", Some(hit), 0.35);
        assert!(outcome.found);
        assert_eq!(
            outcome.render(OutputFormat::Text).unwrap(),
            "Query: plagiarism\nBest match (score = 0.90): Avoid plagiarism.\nResult: Found"
        );

        let empty = SearchOutcome::new("plagiarism", None, 0.35);
        assert!(!empty.found);
        assert!(empty.render(OutputFormat::Text).unwrap().ends_with("Result: Missing"));

        let json: serde_json::Value =
            serde_json::from_str(&empty.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["found"], false);
        assert!(json["hit"].is_null());
    }
}
