//! Shared annotation model and run options.
//!
//! Everything the pipeline exchanges is built from one value type: the
//! [`AnnotatedToken`] triple of surface form, Penn Treebank tag, and lemma.
//! Tokens group into sentences, sentences into an [`AnnotatedDocument`] — the
//! single unit handed from the annotator to the analyzer and the
//! transformation engine.
//!
//! Tokens are plain values with no identity. Mutation passes build fresh
//! sentences and replace the document wholesale instead of editing in place.

use serde::{Deserialize, Serialize};

use crate::error::{HumanizerError, Result};

// ============================================================================
// Annotation model
// ============================================================================

/// One surface token with its grammatical tag and lemma.
///
/// Invariant: no field is empty for a real token. Punctuation tokens carry
/// the mark itself in all three fields (e.g. `{".", ".", "."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// The literal text as it currently appears. Transformation passes may
    /// rewrite this, so it can differ from the originally annotated form.
    pub surface: String,
    /// Penn Treebank part-of-speech tag (e.g. `NN`, `VBZ`, `MD`).
    pub tag: String,
    /// Canonical dictionary form, used for frequency statistics and synonym
    /// lookup. Lowercase for words, the mark itself for punctuation.
    pub lemma: String,
}

impl AnnotatedToken {
    pub fn new(
        surface: impl Into<String>,
        tag: impl Into<String>,
        lemma: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
            lemma: lemma.into(),
        }
    }
}

/// Ordered left-to-right token sequence for one sentence.
pub type AnnotatedSentence = Vec<AnnotatedToken>;

/// Ordered sentences for one input text.
///
/// Exclusively owned by one [`TransformEngine`](crate::transform::TransformEngine)
/// during a transformation run; each pass consumes the previous state and
/// produces a new one. Callers must not retain references to intermediate
/// states across passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedDocument {
    pub fn new(sentences: Vec<AnnotatedSentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[AnnotatedSentence] {
        &self.sentences
    }

    pub fn into_sentences(self) -> Vec<AnnotatedSentence> {
        self.sentences
    }

    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    /// Total token count across all sentences.
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// `true` when the document holds no sentences at all.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate every token in document order, ignoring sentence boundaries.
    pub fn tokens(&self) -> impl Iterator<Item = &AnnotatedToken> {
        self.sentences.iter().flatten()
    }
}

impl From<Vec<AnnotatedSentence>> for AnnotatedDocument {
    fn from(sentences: Vec<AnnotatedSentence>) -> Self {
        Self::new(sentences)
    }
}

// ============================================================================
// Run options and style presets
// ============================================================================

/// Tuning knobs for one humanization run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HumanizeOptions {
    /// Independent per-token probability of attempting synonym substitution.
    /// Must lie in `[0, 1]`; `0.0` disables the pass entirely.
    pub substitution_rate: f64,
    /// Whether to merge adjacent pairs into contractions ("is not" → "isn't").
    pub contractions: bool,
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        Style::Default.options()
    }
}

impl HumanizeOptions {
    /// Reject rates outside the unit interval (NaN included).
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.substitution_rate) {
            return Err(HumanizerError::InvalidInput(format!(
                "substitution rate must be within [0, 1], got {}",
                self.substitution_rate
            )));
        }
        Ok(())
    }
}

/// Named option presets. A style only selects parameter values; every style
/// flows through the same pass sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// General prose: moderate substitution, contractions on.
    #[default]
    Default,
    /// Formal register: lighter substitution, no contractions.
    Academic,
}

impl Style {
    /// The preset option values for this style.
    pub fn options(self) -> HumanizeOptions {
        match self {
            Style::Default => HumanizeOptions {
                substitution_rate: 0.15,
                contractions: true,
            },
            Style::Academic => HumanizeOptions {
                substitution_rate: 0.10,
                contractions: false,
            },
        }
    }

    /// The user-facing name used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Academic => "academic",
        }
    }
}
