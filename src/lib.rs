// src/lib.rs
// avatar-mood: heuristic message analysis and mood fusion for chat avatars.
//
// Pure and synchronous. The analyzer takes a text plus a caller-supplied
// base sentiment and returns an `AnalysisRecord`; `fuse_mood` turns that
// record and the reply's sentiment into one avatar mood.

pub mod analysis;
pub mod categories;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod mood;
pub mod prompt;
pub mod sentiment;

pub use analysis::{AnalysisRecord, Analyzer};
pub use categories::{Emotion, Intent};
pub use config::FeatureToggles;
pub use error::{MoodError, Result};
pub use lexicon::Lexicon;
pub use mood::{MoodLabel, combined_score, fuse_mood};
pub use sentiment::{BaseSentiment, SentimentEvaluator, WordListEvaluator};
