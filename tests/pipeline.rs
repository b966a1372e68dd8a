//! End-to-end pipeline properties.

use prose_humanizer::{
    humanize, Annotator, FileLexicon, HeuristicAnnotator, HumanizeRequest, Humanizer,
    MetricsAnalyzer, Style,
};

fn whitespace_normalized(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn noop_pipeline_is_idempotent_up_to_whitespace() {
    let humanizer = Humanizer::new();
    let request = HumanizeRequest {
        style: Style::Academic, // no contractions
        substitution_rate: Some(0.0),
    };
    let text = "The utilization of advanced systems facilitates progress. \
                It is imperative that teams plan carefully.";

    let first = humanizer.humanize_text_seeded(text, &request, 0).unwrap();
    let second = humanizer
        .humanize_text_seeded(&first.humanized_text, &request, 0)
        .unwrap();

    assert_eq!(
        whitespace_normalized(&first.humanized_text),
        whitespace_normalized(&second.humanized_text)
    );
}

#[test]
fn short_text_with_substitution_keeps_terminal_punctuation() {
    let humanizer = Humanizer::new();
    let request = HumanizeRequest {
        style: Style::Default,
        substitution_rate: Some(0.3),
    };
    let outcome = humanizer
        .humanize_text_seeded("AI is good.", &request, 123)
        .unwrap();
    assert!(!outcome.humanized_text.is_empty());
    assert!(outcome.humanized_text.ends_with('.'));
}

#[test]
fn short_text_without_substitution_round_trips() {
    // "(is, good)" is not a contraction pair, so the text survives intact.
    let humanizer = Humanizer::new();
    let request = HumanizeRequest {
        style: Style::Default,
        substitution_rate: Some(0.0),
    };
    let outcome = humanizer
        .humanize_text_seeded("AI is good.", &request, 123)
        .unwrap();
    assert_eq!(outcome.humanized_text, "AI is good.");
}

#[test]
fn contraction_pass_merges_is_not() {
    let humanizer = Humanizer::new();
    let request = HumanizeRequest {
        style: Style::Default,
        substitution_rate: Some(0.0),
    };
    let outcome = humanizer
        .humanize_text_seeded("She is not happy.", &request, 0)
        .unwrap();
    assert_eq!(outcome.humanized_text, "She isn't happy.");
}

#[test]
fn academic_style_suppresses_contractions() {
    let humanizer = Humanizer::new();
    let request = HumanizeRequest {
        style: Style::Academic,
        substitution_rate: Some(0.0),
    };
    let outcome = humanizer
        .humanize_text_seeded("She is not happy.", &request, 0)
        .unwrap();
    assert_eq!(outcome.humanized_text, "She is not happy.");
    assert_eq!(outcome.style_applied, Style::Academic);
}

#[test]
fn original_analysis_covers_repetitive_text() {
    let text = "The situation is complex. The situation is difficult. \
                The situation is unusual.";
    let outcome = humanize(text, Style::Academic).unwrap();
    let report = &outcome.original_analysis;

    assert!(report.lexical_diversity > 0.0 && report.lexical_diversity <= 1.0);
    assert_eq!(report.sentence_lengths.lengths, vec![5, 5, 5]);
    assert_eq!(report.sentence_lengths.mean, 5.0);
    assert_eq!(report.sentence_lengths.std_dev, 0.0);
    assert_eq!(report.repeated_trigrams.get("the situation is"), Some(&3));
    assert!(report
        .top_lemmas
        .iter()
        .any(|(lemma, count)| lemma == "situation" && *count == 3));
}

#[test]
fn passive_voice_flagged_through_full_annotation() {
    let doc = HeuristicAnnotator::new()
        .annotate("The report was generated. The team wrote the summary.")
        .unwrap();
    let passive = MetricsAnalyzer::new(&doc).passive_voice();
    assert_eq!(passive.total, 2);
    assert_eq!(passive.flagged, 1);
}

#[test]
fn diversity_is_one_when_all_lemmas_distinct() {
    let doc = HeuristicAnnotator::new().annotate("Dogs chase cats").unwrap();
    let analyzer = MetricsAnalyzer::new(&doc);
    assert_eq!(analyzer.lexical_diversity(), 1.0);
}

#[test]
fn repetition_detection_respects_threshold_end_to_end() {
    let outcome = humanize("One two three.", Style::Academic).unwrap();
    // Nothing repeats, so both maps are empty.
    assert!(outcome.original_analysis.repeated_bigrams.is_empty());
    assert!(outcome.original_analysis.repeated_trigrams.is_empty());
}

#[test]
fn blank_and_empty_inputs_short_circuit() {
    for text in ["", "   ", "\n\t"] {
        let outcome = humanize(text, Style::Default).unwrap();
        assert_eq!(outcome.humanized_text, text);
        assert_eq!(outcome.original_analysis.passive_voice.total, 0);
        assert!(outcome.original_analysis.top_lemmas.is_empty());
    }
}

#[test]
fn file_lexicon_drives_substitution_end_to_end() {
    let path = std::env::temp_dir().join("prose_humanizer_pipeline_lexicon.json");
    std::fs::write(&path, r#"{"good": ["splendid"]}"#).unwrap();
    let lexicon = FileLexicon::from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let humanizer = Humanizer::with_backends(HeuristicAnnotator::new(), lexicon);
    let request = HumanizeRequest {
        style: Style::Default,
        substitution_rate: Some(1.0),
    };
    let outcome = humanizer
        .humanize_text_seeded("AI is good.", &request, 1)
        .unwrap();
    assert_eq!(outcome.humanized_text, "AI is splendid.");
}

#[test]
fn seeded_pipeline_is_reproducible_and_json_serializable() {
    let humanizer = Humanizer::new();
    let request = HumanizeRequest {
        style: Style::Default,
        substitution_rate: Some(0.9),
    };
    let text = "The numerous factors require a careful decision and planning.";
    let a = humanizer.humanize_text_seeded(text, &request, 7).unwrap();
    let b = humanizer.humanize_text_seeded(text, &request, 7).unwrap();
    assert_eq!(a.humanized_text, b.humanized_text);

    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["style_applied"], "default");
    assert!(json["original_analysis"]["lexical_diversity"].is_number());
}
