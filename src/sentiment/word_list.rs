// src/sentiment/word_list.rs
// Word-list evaluator - sums per-word valences, AFINN style

use std::collections::HashMap;

use super::{BaseSentiment, SentimentEvaluator};

const VALENCES: &[(&str, i32)] = &[
    ("amazing", 4),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("brilliant", 4),
    ("cool", 1),
    ("delighted", 3),
    ("enjoy", 2),
    ("excellent", 3),
    ("excited", 3),
    ("fantastic", 4),
    ("fun", 4),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("happy", 3),
    ("helpful", 2),
    ("hope", 2),
    ("like", 2),
    ("love", 3),
    ("nice", 3),
    ("perfect", 3),
    ("thank", 2),
    ("thanks", 2),
    ("thrilled", 5),
    ("trust", 1),
    ("win", 4),
    ("wonderful", 4),
    ("wow", 4),
    ("yes", 1),
    ("afraid", -2),
    ("angry", -3),
    ("annoyed", -2),
    ("anxious", -2),
    ("awful", -3),
    ("bad", -3),
    ("boring", -3),
    ("broken", -1),
    ("bug", -2),
    ("cry", -1),
    ("depressed", -2),
    ("disappointed", -2),
    ("disgusted", -3),
    ("error", -2),
    ("fail", -2),
    ("failed", -2),
    ("frustrated", -2),
    ("furious", -3),
    ("hate", -3),
    ("horrible", -3),
    ("hurt", -2),
    ("mad", -3),
    ("miserable", -3),
    ("no", -1),
    ("problem", -2),
    ("ruined", -2),
    ("sad", -2),
    ("scared", -2),
    ("sorry", -1),
    ("stupid", -2),
    ("terrible", -3),
    ("ugly", -3),
    ("worried", -3),
    ("worst", -3),
    ("wrong", -2),
];

/// Builtin evaluator used by the CLI. Tokens are runs of alphanumerics and
/// apostrophes, lower-cased; unknown tokens score zero.
#[derive(Debug, Clone)]
pub struct WordListEvaluator {
    valences: HashMap<String, i32>,
}

impl Default for WordListEvaluator {
    fn default() -> Self {
        Self::with_valences(VALENCES.iter().map(|(w, v)| (w.to_string(), *v)))
    }
}

impl WordListEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_valences(valences: impl IntoIterator<Item = (String, i32)>) -> Self {
        Self {
            valences: valences
                .into_iter()
                .map(|(word, value)| (word.to_lowercase(), value))
                .collect(),
        }
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl SentimentEvaluator for WordListEvaluator {
    fn evaluate(&self, text: &str) -> BaseSentiment {
        let tokens = Self::tokenize(text);
        let mut score = 0i32;
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for token in &tokens {
            match self.valences.get(token) {
                Some(&v) if v > 0 => {
                    score += v;
                    positive.push(token.clone());
                }
                Some(&v) if v < 0 => {
                    score += v;
                    negative.push(token.clone());
                }
                _ => {}
            }
        }

        let comparative = if tokens.is_empty() {
            0.0
        } else {
            f64::from(score) / tokens.len() as f64
        };

        BaseSentiment {
            score: f64::from(score),
            comparative,
            positive,
            negative,
        }
    }
}
