//! Stylistic metrics over an annotated document.
//!
//! The [`MetricsAnalyzer`] borrows a document read-only and derives the
//! fingerprints that flag machine-flavored prose: type/token ratio, lemma
//! frequency, repeated n-grams, sentence-length variability, and a shallow
//! passive-voice heuristic. Every computation is pure and deterministic;
//! [`MetricsAnalyzer::run_all`] bundles them into one [`MetricsReport`].

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::types::AnnotatedDocument;

/// Lemmas counted as forms of "to be" by the passive-voice heuristic.
const BE_FORMS: [&str; 8] = ["is", "am", "are", "was", "were", "be", "being", "been"];

/// How many top lemmas [`MetricsAnalyzer::run_all`] reports.
const TOP_N: usize = 10;

/// Minimum repetition count for an n-gram to make the report.
const MIN_NGRAM_FREQ: usize = 2;

// ============================================================================
// Report types
// ============================================================================

/// Per-sentence length distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentenceLengthStats {
    /// Arithmetic mean of token counts; `0.0` with no sentences.
    pub mean: f64,
    /// Sample standard deviation (`n − 1` denominator); `0.0` with fewer
    /// than two sentences.
    pub std_dev: f64,
    /// Raw token count per sentence, in document order.
    pub lengths: Vec<usize>,
}

/// Output of the passive-voice heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassiveVoiceCount {
    /// Sentences matching at least one passive window (counted once each).
    pub flagged: usize,
    /// Total sentences scanned.
    pub total: usize,
}

/// Immutable statistics snapshot for one document state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Distinct lemmas divided by total lemmas, in `[0, 1]`.
    pub lexical_diversity: f64,
    /// Most frequent lemmas with counts, ties in first-encountered order.
    pub top_lemmas: Vec<(String, usize)>,
    /// Space-joined bigrams occurring at least [`MIN_NGRAM_FREQ`] times.
    pub repeated_bigrams: FxHashMap<String, usize>,
    /// Space-joined trigrams occurring at least [`MIN_NGRAM_FREQ`] times.
    pub repeated_trigrams: FxHashMap<String, usize>,
    pub sentence_lengths: SentenceLengthStats,
    pub passive_voice: PassiveVoiceCount,
}

// ============================================================================
// Analyzer
// ============================================================================

/// Read-only metrics over one [`AnnotatedDocument`] state.
///
/// Surfaces and lemmas are case-normalized once at construction; every
/// method after that is allocation-light and side-effect free.
pub struct MetricsAnalyzer<'a> {
    doc: &'a AnnotatedDocument,
    /// Lowercased surface tokens, flattened across sentences.
    tokens: Vec<String>,
    /// Lowercased lemmas, flattened across sentences.
    lemmas: Vec<String>,
}

impl<'a> MetricsAnalyzer<'a> {
    pub fn new(doc: &'a AnnotatedDocument) -> Self {
        let tokens = doc.tokens().map(|t| t.surface.to_lowercase()).collect();
        let lemmas = doc.tokens().map(|t| t.lemma.to_lowercase()).collect();
        Self { doc, tokens, lemmas }
    }

    /// Type/token ratio over lemmas. `0.0` for an empty document.
    pub fn lexical_diversity(&self) -> f64 {
        if self.lemmas.is_empty() {
            return 0.0;
        }
        let distinct: rustc_hash::FxHashSet<&str> =
            self.lemmas.iter().map(String::as_str).collect();
        distinct.len() as f64 / self.lemmas.len() as f64
    }

    /// The `top_n` most frequent lemmas. Ties break toward the lemma seen
    /// first in the document, matching stable frequency-counting behavior.
    pub fn word_frequency(&self, top_n: usize) -> Vec<(String, usize)> {
        let mut counts: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
        for (i, lemma) in self.lemmas.iter().enumerate() {
            let entry = counts.entry(lemma).or_insert((0, i));
            entry.0 += 1;
        }
        let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
        ranked
            .into_iter()
            .take(top_n)
            .map(|(lemma, (count, _))| (lemma.to_string(), count))
            .collect()
    }

    /// Count n-grams of lowercased surface tokens across the whole document
    /// (sentence boundaries are ignored) and keep those occurring at least
    /// `min_freq` times. Empty when the document has fewer than `n` tokens.
    pub fn detect_repetitions(&self, n: usize, min_freq: usize) -> FxHashMap<String, usize> {
        let mut repeated = FxHashMap::default();
        if n == 0 || self.tokens.len() < n {
            return repeated;
        }
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for window in self.tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
        for (phrase, count) in counts {
            if count >= min_freq {
                repeated.insert(phrase, count);
            }
        }
        repeated
    }

    /// Token count per sentence with mean and sample standard deviation.
    pub fn sentence_length_variability(&self) -> SentenceLengthStats {
        let lengths: Vec<usize> = self.doc.sentences().iter().map(Vec::len).collect();
        if lengths.is_empty() {
            return SentenceLengthStats::default();
        }
        let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        let std_dev = if lengths.len() > 1 {
            let variance = lengths
                .iter()
                .map(|&len| (len as f64 - mean).powi(2))
                .sum::<f64>()
                / (lengths.len() - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };
        SentenceLengthStats { mean, std_dev, lengths }
    }

    /// Shallow passive-voice detector.
    ///
    /// A sentence is flagged once (scanning stops) when it contains a
    /// be-lemma immediately followed by a `VBN`-tagged token, or a modal
    /// followed by the lemma `be` and a `VBN`-tagged token.
    pub fn passive_voice(&self) -> PassiveVoiceCount {
        let total = self.doc.num_sentences();
        let mut flagged = 0;
        for sentence in self.doc.sentences() {
            let lemmas: Vec<String> =
                sentence.iter().map(|t| t.lemma.to_lowercase()).collect();
            for i in 0..lemmas.len().saturating_sub(1) {
                if BE_FORMS.contains(&lemmas[i].as_str()) && sentence[i + 1].tag == "VBN" {
                    flagged += 1;
                    break;
                }
                if i + 2 < lemmas.len()
                    && sentence[i].tag == "MD"
                    && lemmas[i + 1] == "be"
                    && sentence[i + 2].tag == "VBN"
                {
                    flagged += 1;
                    break;
                }
            }
        }
        PassiveVoiceCount { flagged, total }
    }

    /// Run every metric and bundle the results.
    pub fn run_all(&self) -> MetricsReport {
        MetricsReport {
            lexical_diversity: self.lexical_diversity(),
            top_lemmas: self.word_frequency(TOP_N),
            repeated_bigrams: self.detect_repetitions(2, MIN_NGRAM_FREQ),
            repeated_trigrams: self.detect_repetitions(3, MIN_NGRAM_FREQ),
            sentence_lengths: self.sentence_length_variability(),
            passive_voice: self.passive_voice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnnotatedDocument, AnnotatedToken};

    fn tok(surface: &str, tag: &str, lemma: &str) -> AnnotatedToken {
        AnnotatedToken::new(surface, tag, lemma)
    }

    fn sample_doc() -> AnnotatedDocument {
        AnnotatedDocument::new(vec![
            vec![
                tok("This", "DT", "this"),
                tok("is", "VBZ", "be"),
                tok("an", "DT", "an"),
                tok("example", "NN", "example"),
                tok(".", ".", "."),
            ],
            vec![
                tok("This", "DT", "this"),
                tok("is", "VBZ", "be"),
                tok("another", "DT", "another"),
                tok("example", "NN", "example"),
                tok(".", ".", "."),
            ],
        ])
    }

    #[test]
    fn test_lexical_diversity_range_and_empty() {
        let doc = sample_doc();
        let analyzer = MetricsAnalyzer::new(&doc);
        let ttr = analyzer.lexical_diversity();
        assert!(ttr > 0.0 && ttr < 1.0);
        // 6 distinct of 10: this, be, an, example, ., another
        assert!((ttr - 0.6).abs() < 1e-12);

        let empty = AnnotatedDocument::default();
        assert_eq!(MetricsAnalyzer::new(&empty).lexical_diversity(), 0.0);
    }

    #[test]
    fn test_lexical_diversity_all_distinct_is_one() {
        let doc = AnnotatedDocument::new(vec![vec![
            tok("AI", "NNP", "ai"),
            tok("is", "VBZ", "be"),
            tok("good", "JJ", "good"),
        ]]);
        assert_eq!(MetricsAnalyzer::new(&doc).lexical_diversity(), 1.0);
    }

    #[test]
    fn test_word_frequency_counts_and_tie_break() {
        let doc = sample_doc();
        let freq = MetricsAnalyzer::new(&doc).word_frequency(3);
        // "this", "be", "example", and "." all occur twice; first-seen wins.
        assert_eq!(freq[0], ("this".to_string(), 2));
        assert_eq!(freq[1], ("be".to_string(), 2));
        assert_eq!(freq[2], ("example".to_string(), 2));
    }

    #[test]
    fn test_word_frequency_empty() {
        let empty = AnnotatedDocument::default();
        assert!(MetricsAnalyzer::new(&empty).word_frequency(10).is_empty());
    }

    #[test]
    fn test_detect_repetitions_threshold() {
        let doc = sample_doc();
        let analyzer = MetricsAnalyzer::new(&doc);
        let bigrams = analyzer.detect_repetitions(2, 2);
        assert_eq!(bigrams.get("this is"), Some(&2));
        // The cross-sentence bigram ". this" occurs only once.
        assert!(bigrams.get(". this").is_none());
        for count in bigrams.values() {
            assert!(*count >= 2);
        }
    }

    #[test]
    fn test_detect_repetitions_short_document() {
        let doc = AnnotatedDocument::new(vec![vec![tok("AI", "NNP", "ai")]]);
        let analyzer = MetricsAnalyzer::new(&doc);
        assert!(analyzer.detect_repetitions(2, 1).is_empty());
        assert!(analyzer.detect_repetitions(3, 1).is_empty());
    }

    #[test]
    fn test_repetitions_cross_sentence_boundaries() {
        // "a b. a b." — the bigram "b ." spans into sentence punctuation and
        // ". a" spans the boundary; both must be counted from the flat list.
        let doc = AnnotatedDocument::new(vec![
            vec![tok("a", "DT", "a"), tok("b", "NN", "b"), tok(".", ".", ".")],
            vec![tok("a", "DT", "a"), tok("b", "NN", "b"), tok(".", ".", ".")],
        ]);
        let bigrams = MetricsAnalyzer::new(&doc).detect_repetitions(2, 2);
        assert_eq!(bigrams.get("a b"), Some(&2));
        assert_eq!(bigrams.get("b ."), Some(&2));
    }

    #[test]
    fn test_sentence_length_single_sentence_std_dev_zero() {
        let doc = AnnotatedDocument::new(vec![vec![
            tok("AI", "NNP", "ai"),
            tok("is", "VBZ", "be"),
            tok("good", "JJ", "good"),
            tok(".", ".", "."),
        ]]);
        let stats = MetricsAnalyzer::new(&doc).sentence_length_variability();
        assert_eq!(stats.lengths, vec![4]);
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_sentence_length_sample_std_dev() {
        let doc = AnnotatedDocument::new(vec![
            vec![tok("a", "DT", "a"); 2],
            vec![tok("a", "DT", "a"); 6],
        ]);
        let stats = MetricsAnalyzer::new(&doc).sentence_length_variability();
        assert_eq!(stats.mean, 4.0);
        // Sample variance: ((2-4)^2 + (6-4)^2) / 1 = 8
        assert!((stats.std_dev - 8.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sentence_length_empty_document() {
        let empty = AnnotatedDocument::default();
        let stats = MetricsAnalyzer::new(&empty).sentence_length_variability();
        assert_eq!(stats, SentenceLengthStats::default());
    }

    #[test]
    fn test_passive_voice_be_plus_vbn() {
        let doc = AnnotatedDocument::new(vec![vec![
            tok("It", "PRP", "it"),
            tok("is", "VBZ", "be"),
            tok("said", "VBN", "say"),
            tok(".", ".", "."),
        ]]);
        let passive = MetricsAnalyzer::new(&doc).passive_voice();
        assert_eq!(passive.flagged, 1);
        assert_eq!(passive.total, 1);
    }

    #[test]
    fn test_passive_voice_modal_be_vbn() {
        let doc = AnnotatedDocument::new(vec![vec![
            tok("It", "PRP", "it"),
            tok("must", "MD", "must"),
            tok("be", "VB", "be"),
            tok("done", "VBN", "do"),
            tok(".", ".", "."),
        ]]);
        assert_eq!(MetricsAnalyzer::new(&doc).passive_voice().flagged, 1);
    }

    #[test]
    fn test_passive_voice_counts_sentence_once() {
        // Two qualifying windows in one sentence still count once.
        let doc = AnnotatedDocument::new(vec![vec![
            tok("It", "PRP", "it"),
            tok("was", "VBD", "be"),
            tok("said", "VBN", "say"),
            tok("and", "CC", "and"),
            tok("was", "VBD", "be"),
            tok("done", "VBN", "do"),
            tok(".", ".", "."),
        ]]);
        let passive = MetricsAnalyzer::new(&doc).passive_voice();
        assert_eq!(passive.flagged, 1);
        assert_eq!(passive.total, 1);
    }

    #[test]
    fn test_passive_voice_empty_document() {
        let empty = AnnotatedDocument::default();
        let passive = MetricsAnalyzer::new(&empty).passive_voice();
        assert_eq!(passive, PassiveVoiceCount { flagged: 0, total: 0 });
    }

    #[test]
    fn test_run_all_is_deterministic() {
        let doc = sample_doc();
        let a = MetricsAnalyzer::new(&doc).run_all();
        let b = MetricsAnalyzer::new(&doc).run_all();
        assert_eq!(a, b);
        assert_eq!(a.passive_voice.total, 2);
    }

    #[test]
    fn test_run_all_empty_document() {
        let empty = AnnotatedDocument::default();
        let report = MetricsAnalyzer::new(&empty).run_all();
        assert_eq!(report, MetricsReport::default());
    }
}
