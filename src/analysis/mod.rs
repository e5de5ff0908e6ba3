// src/analysis/mod.rs
// Heuristic message analysis: four independent scorers, a visual mapper,
// and the orchestrator that combines them with caller-supplied base sentiment.

mod matching;

pub mod emotion;
pub mod intent;
pub mod orchestrator;
pub mod record;
pub mod sarcasm;
pub mod subjectivity;
pub mod visual;

pub use emotion::{EmotionResult, detect_emotions};
pub use intent::{IntentResult, classify_intent};
pub use orchestrator::Analyzer;
pub use record::{AnalysisRecord, Enhancements};
pub use sarcasm::{SarcasmResult, detect_sarcasm};
pub use subjectivity::{SubjectivityResult, analyze_subjectivity};
pub use visual::{Polarity, Visual, VisualBundle, build_visuals};
