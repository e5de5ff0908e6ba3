// src/main.rs
// avatar-mood - analyze chat messages and fuse avatar moods from the command line

use anyhow::{Context, Result};
use avatar_mood::prompt::build_system_prompt;
use avatar_mood::{
    AnalysisRecord, Analyzer, FeatureToggles, Lexicon, MoodLabel, SentimentEvaluator,
    WordListEvaluator, combined_score, fuse_mood,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "avatar-mood")]
#[command(about = "Heuristic message analysis and mood fusion for chat avatars")]
#[command(version)]
struct Cli {
    /// Alternate lexicon JSON file
    #[arg(long, global = true, env = "AVATAR_MOOD_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one message and print the record as JSON
    Analyze {
        /// Message text
        text: String,
    },

    /// Analyze a user message and fuse the avatar mood with a reply
    Mood {
        /// User message
        #[arg(short, long)]
        user: String,

        /// Assistant reply
        #[arg(short, long)]
        reply: String,
    },

    /// Print the reply system prompt built from a message's analysis
    Context {
        /// Message text
        text: String,
    },

    /// Analyze stdin, one message per line, emitting one JSON record per line
    Batch,

    /// Show which analysis features are enabled
    Features,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TurnOutput<'a> {
    analysis: &'a AnalysisRecord,
    mood: MoodLabel,
    combined_score: f64,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries JSON output, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_lexicon(path: Option<&PathBuf>) -> Result<Lexicon> {
    match path {
        Some(path) => Lexicon::load(path)
            .with_context(|| format!("failed to load lexicon from {}", path.display())),
        None => Ok(Lexicon::builtin()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_batch(analyzer: &Analyzer, evaluator: &WordListEvaluator) -> Result<()> {
    let mut items = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let base = evaluator.evaluate(&line);
        items.push((line, base));
    }

    info!("Batch analyzing {} messages", items.len());
    let records = analyzer.analyze_batch(&items);

    let mut out = io::stdout().lock();
    for record in &records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if dotenvy::dotenv().is_err() {
        debug!(".env file not found, using process environment");
    }

    let toggles = FeatureToggles::from_env();
    let lexicon = load_lexicon(cli.lexicon.as_ref())?;
    let analyzer = Analyzer::with_lexicon(toggles, Arc::new(lexicon));
    let evaluator = WordListEvaluator::new();

    match cli.command {
        Commands::Analyze { text } => {
            let record = analyzer.analyze_text(&text, &evaluator.evaluate(&text));
            print_json(&record)?;
        }
        Commands::Mood { user, reply } => {
            let analysis = analyzer.analyze_text(&user, &evaluator.evaluate(&user));
            let reply_sentiment = evaluator.evaluate(&reply);
            let output = TurnOutput {
                analysis: &analysis,
                mood: fuse_mood(&analysis, &reply_sentiment),
                combined_score: combined_score(&analysis, &reply_sentiment),
            };
            print_json(&output)?;
        }
        Commands::Context { text } => {
            let record = analyzer.analyze_text(&text, &evaluator.evaluate(&text));
            println!("{}", build_system_prompt(&record));
        }
        Commands::Batch => run_batch(&analyzer, &evaluator)?,
        Commands::Features => {
            print_json(&serde_json::json!({
                "enabled": analyzer.toggles(),
                "summary": analyzer.toggles().summary(),
                "lexiconTriggers": analyzer.lexicon().trigger_count(),
            }))?;
        }
    }

    Ok(())
}
