// src/lexicon/builtin.rs
// Builtin English trigger tables

use std::collections::BTreeMap;

use super::{IntentLexicon, Lexicon, SarcasmLexicon, SubjectivityLexicon};
use crate::categories::{Emotion, Intent};

const EMOTIONS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "happy", "joy", "excited", "delighted", "thrilled", "ecstatic", "elated", "jubilant",
            "cheerful", "gleeful",
        ],
    ),
    (
        Emotion::Anger,
        &[
            "angry", "furious", "enraged", "irritated", "annoyed", "mad", "livid", "outraged",
            "fuming", "seething",
        ],
    ),
    (
        Emotion::Sadness,
        &[
            "sad", "depressed", "melancholy", "sorrowful", "grief", "despair", "hopeless",
            "miserable", "heartbroken",
        ],
    ),
    (
        Emotion::Fear,
        &[
            "afraid", "scared", "terrified", "frightened", "panicked", "anxious", "worried",
            "nervous", "apprehensive",
        ],
    ),
    (
        Emotion::Surprise,
        &[
            "surprised", "shocked", "astonished", "amazed", "stunned", "bewildered", "perplexed",
            "confused",
        ],
    ),
    (
        Emotion::Disgust,
        &["disgusted", "revolted", "repulsed", "appalled", "horrified", "sickened", "nauseated"],
    ),
    (
        Emotion::Trust,
        &["trust", "confident", "secure", "assured", "reliable", "faithful", "loyal"],
    ),
    (
        Emotion::Anticipation,
        &["excited", "eager", "enthusiastic", "optimistic", "hopeful", "expectant", "curious"],
    ),
];

const SARCASM_PUNCTUATION: &[&str] = &["!", "...", "??", "?!", "!?"];
const SARCASM_PHRASES: &[&str] = &[
    "oh great", "wonderful", "fantastic", "brilliant", "genius", "obviously", "clearly", "sure",
];
const SARCASM_PATTERNS: &[&str] = &[
    "yeah right", "oh really", "is that so", "no way", "whatever", "sure thing",
];
const SHOUT_WORDS: &[&str] = &["REALLY", "WOW", "AMAZING", "GREAT", "FANTASTIC"];

/// (intent, strong patterns, weak keywords)
const INTENTS: &[(Intent, &[&str], &[&str])] = &[
    (
        Intent::Question,
        &["what", "how", "why", "when", "where", "who", "which", "?"],
        &["explain", "tell me", "describe", "clarify", "understand"],
    ),
    (
        Intent::Command,
        &["do this", "make", "create", "build", "send", "call", "go", "stop", "start"],
        &["please", "need", "want", "require", "demand"],
    ),
    (
        Intent::Complaint,
        &["problem", "issue", "broken", "wrong", "bad", "terrible", "awful", "hate", "dislike"],
        &["not working", "doesn't work", "failed", "error", "bug"],
    ),
    (
        Intent::Greeting,
        &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
        &["greetings", "welcome", "nice to meet"],
    ),
    (
        Intent::Gratitude,
        &["thank", "thanks", "appreciate", "grateful", "blessed"],
        &["helpful", "useful", "great job", "well done"],
    ),
    (
        Intent::Apology,
        &["sorry", "apologize", "regret", "mistake", "wrong"],
        &["my bad", "my fault", "forgive", "excuse"],
    ),
];

const OPINION_MARKERS: &[&str] = &[
    "think", "believe", "feel", "opinion", "view", "perspective", "seems", "appears", "looks like",
];
const SUBJECTIVE_VERBS: &[&str] = &[
    "love", "hate", "like", "dislike", "prefer", "enjoy", "despise", "adore",
];
const FACTUAL_MARKERS: &[&str] = &[
    "fact", "data", "statistics", "research", "study", "evidence", "proven", "confirmed",
];

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

pub(super) fn builtin_lexicon() -> Lexicon {
    let emotions: BTreeMap<Emotion, Vec<String>> = EMOTIONS
        .iter()
        .map(|(emotion, keywords)| (*emotion, owned(keywords)))
        .collect();

    let intents: BTreeMap<Intent, IntentLexicon> = INTENTS
        .iter()
        .map(|(intent, strong, weak)| {
            (
                *intent,
                IntentLexicon {
                    strong: owned(strong),
                    weak: owned(weak),
                },
            )
        })
        .collect();

    Lexicon {
        emotions,
        sarcasm: SarcasmLexicon {
            punctuation: owned(SARCASM_PUNCTUATION),
            phrases: owned(SARCASM_PHRASES),
            patterns: owned(SARCASM_PATTERNS),
            shout_words: owned(SHOUT_WORDS),
        },
        intents,
        subjectivity: SubjectivityLexicon {
            opinion: owned(OPINION_MARKERS),
            subjective_verbs: owned(SUBJECTIVE_VERBS),
            factual: owned(FACTUAL_MARKERS),
        },
    }
}
