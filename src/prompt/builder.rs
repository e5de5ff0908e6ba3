// src/prompt/builder.rs
// Turns an analysis record into system-prompt text for the reply model

use crate::analysis::AnalysisRecord;

fn percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// One paragraph describing what the analysis found, in the order
/// description, emotion, sarcasm, intent, subjectivity. Clauses for
/// features that did not run (or found nothing notable) are left out.
pub fn build_system_context(record: &AnalysisRecord) -> String {
    let mut context = format!(
        "The user's message has been analyzed and shows: {}.",
        record.description
    );

    if let Some(emotion) = record.emotion.as_ref().filter(|e| !e.primary.is_neutral()) {
        context.push_str(&format!(
            " The user appears to be feeling {} (confidence: {}).",
            emotion.primary,
            percent(emotion.confidence)
        ));
    }

    if let Some(sarcasm) = record.sarcasm.as_ref().filter(|s| s.is_sarcastic) {
        context.push_str(&format!(
            " The message appears to be sarcastic (confidence: {}).",
            percent(sarcasm.confidence)
        ));
    }

    if let Some(intent) = record.intent.as_ref().filter(|i| !i.primary.is_statement()) {
        context.push_str(&format!(
            " The user's intent appears to be a {} (confidence: {}).",
            intent.primary,
            percent(intent.confidence)
        ));
    }

    if let Some(subjectivity) = &record.subjectivity {
        let kind = if subjectivity.is_subjective {
            "subjective opinion"
        } else {
            "objective statement"
        };
        context.push_str(&format!(
            " The message is a {} (confidence: {}).",
            kind,
            percent(subjectivity.confidence)
        ));
    }

    context
}

/// Builds the complete system prompt for the avatar's reply
pub fn build_system_prompt(record: &AnalysisRecord) -> String {
    let mut prompt = String::new();

    // 1. Role and analysis context
    prompt.push_str("You are a helpful AI assistant with an emotional avatar. ");
    prompt.push_str(&build_system_context(record));
    prompt.push_str("\n\n");

    // 2. How to respond to each intent
    prompt.push_str("Respond appropriately based on the analysis:\n");
    prompt.push_str("- If the user is being sarcastic: Acknowledge the sarcasm with humor or understanding\n");
    prompt.push_str("- If the user is asking a question: Provide a clear, helpful answer\n");
    prompt.push_str("- If the user is making a complaint: Be empathetic and offer solutions\n");
    prompt.push_str("- If the user is expressing gratitude: Show appreciation and warmth\n");
    prompt.push_str("- If the user is apologizing: Be forgiving and supportive\n");
    prompt.push_str("- If the user is giving a command: Acknowledge and respond appropriately\n");
    prompt.push_str("- If the user is greeting: Respond warmly and ask how you can help\n\n");

    // 3. Emotional register
    prompt.push_str("Match the emotional context:\n");
    prompt.push_str("- Joy/Excitement: Be enthusiastic and positive\n");
    prompt.push_str("- Anger/Frustration: Be calm, understanding, and solution-oriented\n");
    prompt.push_str("- Sadness/Depression: Be empathetic and supportive\n");
    prompt.push_str("- Fear/Anxiety: Be reassuring and helpful\n");
    prompt.push_str("- Surprise/Confusion: Be clear and explanatory\n");
    prompt.push_str("- Disgust: Be understanding and offer alternatives\n");
    prompt.push_str("- Trust: Be reliable and professional\n");
    prompt.push_str("- Anticipation: Be encouraging and informative\n\n");

    prompt.push_str("Keep your response natural and conversational.");

    prompt
}
