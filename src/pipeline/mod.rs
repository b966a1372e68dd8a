//! Pipeline orchestration.
//!
//! [`Humanizer`] wires the stages together: annotate the raw text, capture
//! metrics from the pristine document, then hand the document to a fresh
//! [`TransformEngine`](crate::transform::TransformEngine) and return the
//! rewritten text alongside the *original* analysis.
//!
//! The orchestrator is generic over the annotator and synonym source so the
//! built-in heuristics can be swapped for a real tagging service or lexical
//! database without touching the flow. Each request gets its own engine and
//! document; the only shared state is the frozen lookup tables.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::analysis::{MetricsAnalyzer, MetricsReport};
use crate::error::Result;
use crate::nlp::annotator::{Annotator, HeuristicAnnotator};
use crate::nlp::lexicon::{SynonymDictionary, SynonymSource};
use crate::transform::TransformEngine;
use crate::types::{HumanizeOptions, Style};

/// One humanization request: a style preset plus an optional rate override.
///
/// This mirrors the service-boundary contract (`{text, style?,
/// lexical_sub_rate?}`); the style only selects preset option values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HumanizeRequest {
    #[serde(default)]
    pub style: Style,
    /// Overrides the style's substitution rate when present.
    #[serde(default)]
    pub substitution_rate: Option<f64>,
}

impl HumanizeRequest {
    /// Resolve the effective options for this request.
    pub fn options(&self) -> HumanizeOptions {
        let mut options = self.style.options();
        if let Some(rate) = self.substitution_rate {
            options.substitution_rate = rate;
        }
        options
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct HumanizeOutcome {
    /// The rewritten text; identical to the input when nothing matched or
    /// the input was blank.
    pub humanized_text: String,
    /// Metrics captured from the document *before* any rewrite pass.
    pub original_analysis: MetricsReport,
    /// Which style preset drove the run.
    pub style_applied: Style,
}

/// Full annotate → analyze → transform pipeline.
#[derive(Debug, Clone, Default)]
pub struct Humanizer<A = HeuristicAnnotator, S = SynonymDictionary> {
    annotator: A,
    lexicon: S,
}

impl Humanizer {
    /// A humanizer backed by the built-in annotator and synonym table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: Annotator, S: SynonymSource> Humanizer<A, S> {
    /// A humanizer with custom annotation and synonym backends.
    pub fn with_backends(annotator: A, lexicon: S) -> Self {
        Self { annotator, lexicon }
    }

    /// Run the pipeline with a generator seeded from OS entropy.
    pub fn humanize_text(&self, text: &str, request: &HumanizeRequest) -> Result<HumanizeOutcome> {
        self.humanize_text_with_rng(text, request, StdRng::from_entropy())
    }

    /// Run the pipeline reproducibly from an explicit seed.
    pub fn humanize_text_seeded(
        &self,
        text: &str,
        request: &HumanizeRequest,
        seed: u64,
    ) -> Result<HumanizeOutcome> {
        self.humanize_text_with_rng(text, request, StdRng::seed_from_u64(seed))
    }

    fn humanize_text_with_rng(
        &self,
        text: &str,
        request: &HumanizeRequest,
        rng: StdRng,
    ) -> Result<HumanizeOutcome> {
        let options = request.options();
        options.validate()?;

        // Blank input is a defined empty outcome, not an error.
        if text.trim().is_empty() {
            return Ok(self.empty_outcome(text, request));
        }

        let document = self.annotator.annotate(text)?;
        if document.is_empty() {
            return Ok(self.empty_outcome(text, request));
        }

        let original_analysis = MetricsAnalyzer::new(&document).run_all();

        let mut engine =
            TransformEngine::with_rng(document, original_analysis.clone(), &self.lexicon, rng);
        let humanized_text = engine.humanize(&options);

        Ok(HumanizeOutcome {
            humanized_text,
            original_analysis,
            style_applied: request.style,
        })
    }

    fn empty_outcome(&self, text: &str, request: &HumanizeRequest) -> HumanizeOutcome {
        HumanizeOutcome {
            humanized_text: text.to_string(),
            original_analysis: MetricsReport::default(),
            style_applied: request.style,
        }
    }
}
