// src/sentiment/mod.rs
// Base sentiment - the record callers hand in, and the evaluator seam that produces it

mod word_list;

pub use word_list::WordListEvaluator;

use serde::{Deserialize, Serialize};

/// Output of a base sentiment evaluator. The analyzer copies it into the
/// record untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSentiment {
    pub score: f64,
    /// Score normalized by token count
    #[serde(default)]
    pub comparative: f64,
    #[serde(default, alias = "positiveWords")]
    pub positive: Vec<String>,
    #[serde(default, alias = "negativeWords")]
    pub negative: Vec<String>,
}

impl BaseSentiment {
    /// A record carrying only a score
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            ..Self::default()
        }
    }
}

/// Produces base sentiment for a text. Implementations live outside the
/// analysis core; the core never calls one on its own.
pub trait SentimentEvaluator: Send + Sync {
    fn evaluate(&self, text: &str) -> BaseSentiment;
}

/// Human-readable tier for a base score
pub fn describe_score(score: f64) -> &'static str {
    if score > 2.0 {
        "very positive and happy"
    } else if score > 0.0 {
        "positive and content"
    } else if score > -2.0 {
        "slightly negative or neutral"
    } else if score > -5.0 {
        "negative and unhappy"
    } else {
        "very negative and distressed"
    }
}
