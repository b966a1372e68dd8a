//! # prose-humanizer
//!
//! Annotated-sentence pipeline that measures the statistical fingerprints of
//! machine-flavored prose and rewrites it toward a human register.
//!
//! ## Core concepts
//!
//! - **Annotation model**: sentences of (surface, tag, lemma) tokens — the
//!   [`types::AnnotatedDocument`] every stage exchanges.
//! - **Metrics analyzer**: read-only statistics (type/token ratio, lemma
//!   frequency, repeated n-grams, sentence-length variability, a passive
//!   voice heuristic) in [`analysis`].
//! - **Transformation engine**: ordered rewrite passes (synonym
//!   substitution, contraction introduction) plus text reconstruction in
//!   [`transform`].
//! - **Orchestrator**: [`pipeline::Humanizer`] runs annotate → analyze →
//!   transform and returns the final text with the original metrics.
//!
//! ## Example
//!
//! ```
//! use prose_humanizer::{humanize, Style};
//!
//! let outcome = humanize("AI is good.", Style::Default).unwrap();
//! assert!(!outcome.humanized_text.is_empty());
//! assert!(outcome.humanized_text.ends_with('.'));
//! assert_eq!(outcome.original_analysis.passive_voice.total, 1);
//! ```

pub mod analysis;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod transform;
pub mod types;

pub use analysis::{MetricsAnalyzer, MetricsReport};
pub use error::{HumanizerError, Result};
pub use nlp::annotator::{Annotator, HeuristicAnnotator};
pub use nlp::lexicon::{FileLexicon, SynonymDictionary, SynonymSource, WordClass};
pub use pipeline::{HumanizeOutcome, HumanizeRequest, Humanizer};
pub use transform::TransformEngine;
pub use types::{AnnotatedDocument, AnnotatedSentence, AnnotatedToken, HumanizeOptions, Style};

/// Run the full pipeline on `text` with a style preset's options.
///
/// Convenience entry point over [`Humanizer`] with the built-in annotator
/// and synonym table. For reproducible output or custom backends, construct
/// a [`Humanizer`] directly.
pub fn humanize(text: &str, style: Style) -> Result<HumanizeOutcome> {
    let humanizer = Humanizer::new();
    humanizer.humanize_text(
        text,
        &HumanizeRequest {
            style,
            substitution_rate: None,
        },
    )
}
