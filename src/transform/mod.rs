//! Transformation engine — owns a document and rewrites it pass by pass.
//!
//! Passes are pure functions `AnnotatedDocument -> AnnotatedDocument`; the
//! engine threads each result forward so no two passes ever see the same
//! backing storage. Execution is strictly sequential with no rollback: a
//! skipped pass simply leaves the prior state in place.
//!
//! Pass order is fixed: substitution (when the rate is positive), then
//! contractions (when enabled), then reconstruction of the final text.

pub mod contractions;
pub mod reconstruct;
pub mod substitution;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analysis::MetricsReport;
use crate::nlp::lexicon::SynonymSource;
use crate::types::{AnnotatedDocument, HumanizeOptions};

/// Enter a tracing span for a transformation pass (when the `tracing`
/// feature is enabled). Compiled out otherwise.
macro_rules! trace_pass {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("transform_pass", pass = $name).entered();
    };
}

/// Rewrites one annotated document.
///
/// Holds the document, the metrics computed on the original text (kept as
/// context for passes that may want it; the current passes do not), a
/// borrowed synonym source, and a seedable random generator. One engine per
/// run — nothing here is shared between invocations.
pub struct TransformEngine<'a, S: SynonymSource> {
    doc: AnnotatedDocument,
    original_metrics: MetricsReport,
    lexicon: &'a S,
    rng: StdRng,
}

impl<'a, S: SynonymSource> TransformEngine<'a, S> {
    /// Build an engine seeded from OS entropy.
    pub fn new(doc: AnnotatedDocument, original_metrics: MetricsReport, lexicon: &'a S) -> Self {
        Self::with_rng(doc, original_metrics, lexicon, StdRng::from_entropy())
    }

    /// Build an engine with an explicit generator, for reproducible runs.
    pub fn with_rng(
        doc: AnnotatedDocument,
        original_metrics: MetricsReport,
        lexicon: &'a S,
        rng: StdRng,
    ) -> Self {
        Self {
            doc,
            original_metrics,
            lexicon,
            rng,
        }
    }

    /// The current document state.
    pub fn document(&self) -> &AnnotatedDocument {
        &self.doc
    }

    /// Metrics of the text as it looked before any pass ran.
    pub fn original_metrics(&self) -> &MetricsReport {
        &self.original_metrics
    }

    /// Run the lexical substitution pass, replacing the engine's document.
    pub fn apply_substitution(&mut self, rate: f64) {
        trace_pass!("substitution");
        let doc = std::mem::take(&mut self.doc);
        self.doc = substitution::substitute(doc, rate, self.lexicon, &mut self.rng);
    }

    /// Run the contraction pass, replacing the engine's document.
    pub fn apply_contractions(&mut self) {
        trace_pass!("contractions");
        let doc = std::mem::take(&mut self.doc);
        self.doc = contractions::contract(doc);
    }

    /// Serialize the current state to text. Query only — no mutation.
    pub fn reconstruct(&self) -> String {
        reconstruct::reconstruct(&self.doc)
    }

    /// Run the full pass sequence and return the final text.
    pub fn humanize(&mut self, options: &HumanizeOptions) -> String {
        #[cfg(feature = "tracing")]
        tracing::debug!(before = %self.reconstruct(), "starting transformation");

        if options.substitution_rate > 0.0 {
            self.apply_substitution(options.substitution_rate);
        }
        if options.contractions {
            self.apply_contractions();
        }
        self.reconstruct()
    }
}
