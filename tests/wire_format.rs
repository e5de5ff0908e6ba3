// tests/wire_format.rs
// JSON shape of analysis records as consumed by the chat frontend

use avatar_mood::{AnalysisRecord, Analyzer, BaseSentiment, FeatureToggles};

fn sample_base() -> BaseSentiment {
    BaseSentiment {
        score: 3.0,
        comparative: 0.6,
        positive: vec!["great".to_string()],
        negative: vec![],
    }
}

#[test]
fn base_fields_are_flattened() {
    let record = Analyzer::default().analyze_text("I think this is a great idea", &sample_base());
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["score"], 3.0);
    assert_eq!(json["comparative"], 0.6);
    assert_eq!(json["positive"][0], "great");
    assert_eq!(json["description"], "very positive and happy");
}

#[test]
fn feature_fields_use_frontend_names() {
    let record = Analyzer::default().analyze_text("Oh great, another meeting!", &sample_base());
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["enhancements"]["enabled"]["sarcasmDetection"], true);
    assert_eq!(json["sarcasm"]["isSarcastic"], true);
    assert!(json["sarcasm"]["indicators"].is_array());
    assert!(json["emotions"]["emotions"].is_object());
    assert_eq!(json["emotions"]["emotions"]["joy"], 0);
    assert!(json["intent"]["intents"]["question"].is_number());
    assert!(json["subjectivity"]["isSubjective"].is_boolean());
    assert_eq!(json["visuals"]["sentiment"]["tag"], "POSITIVE");
    assert!(json["visuals"]["emotion"]["emoji"].is_string());
}

#[test]
fn records_survive_a_json_round_trip() {
    let record = Analyzer::default().analyze_text("Why am I so sad about this?", &sample_base());
    let json = serde_json::to_string(&record).unwrap();
    let parsed: AnalysisRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn disabled_features_are_omitted_not_null() {
    let record = Analyzer::new(FeatureToggles::all_disabled()).analyze_text("hello", &sample_base());
    let json = serde_json::to_string(&record).unwrap();

    assert!(!json.contains("null"));
    assert!(!json.contains("\"visuals\""));
    assert!(json.contains("\"visualOutputs\":false"));
}
