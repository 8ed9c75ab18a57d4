//! Syllabus Checker binary
//!
//! Reports go to stdout; all logging goes to stderr.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use syllabus_cli::{
    load_config, render_report, render_spelling, Cli, Command, OutputFormat, SearchOutcome,
};
use syllabus_engine::{AnalysisError, CancelToken, EngineConfig, SyllabusAnalyzer, WordList};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&cli)?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Command::Analyze { path, format, .. } => analyze(config, path, format).await,
        Command::Search {
            path,
            query,
            format,
        } => search(config, path, query, format).await,
        Command::Spellcheck { path, format, .. } => spellcheck(config, path, format).await,
    }
}

/// Lexical scorer by default; the cross-encoder when built with `fastembed_backend`
fn build_analyzer(config: EngineConfig) -> Result<SyllabusAnalyzer, AnalysisError> {
    #[cfg(feature = "fastembed_backend")]
    {
        let scorer = syllabus_engine::RerankScorer::new()?;
        Ok(SyllabusAnalyzer::with_scorer(std::sync::Arc::new(scorer), config))
    }
    #[cfg(not(feature = "fastembed_backend"))]
    {
        Ok(SyllabusAnalyzer::with_defaults(config))
    }
}

async fn analyze(config: EngineConfig, path: PathBuf, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let analyzer = match build_analyzer(config) {
        Ok(analyzer) => analyzer,
        Err(err) => return Ok(report_error(err)),
    };
    let cancel = CancelToken::new();

    let watcher = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted; cancelling analysis");
            watcher.cancel();
        }
    });

    let result =
        tokio::task::spawn_blocking(move || analyzer.analyze_with_cancel(&path, &cancel)).await?;

    match result {
        Ok(report) => {
            println!("{}", render_report(&report, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report_error(err)),
    }
}

async fn search(
    config: EngineConfig,
    path: PathBuf,
    query: String,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let analyzer = match build_analyzer(config) {
        Ok(analyzer) => analyzer,
        Err(err) => return Ok(report_error(err)),
    };
    let threshold = analyzer.config().search_threshold;

    let result = tokio::task::spawn_blocking(move || {
        let sentences = analyzer.sentences(&path)?;
        analyzer.search(&sentences, &query).map(|hit| SearchOutcome::new(&query, hit, threshold))
    })
    .await?;

    match result {
        Ok(outcome) => {
            println!("{}", outcome.render(format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report_error(err)),
    }
}

async fn spellcheck(
    config: EngineConfig,
    path: PathBuf,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let analyzer = SyllabusAnalyzer::with_defaults(config);

    let result = tokio::task::spawn_blocking(move || {
        let dictionary = WordList::from_file(&analyzer.config().dictionary_path)?;
        analyzer.spellcheck(&path, &dictionary)
    })
    .await?;

    match result {
        Ok(report) => {
            print!("{}", render_spelling(&report, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report_error(err)),
    }
}

fn report_error(err: AnalysisError) -> ExitCode {
    eprintln!("{}", err);
    match err {
        AnalysisError::Cancelled => ExitCode::from(130),
        _ => ExitCode::FAILURE,
    }
}
