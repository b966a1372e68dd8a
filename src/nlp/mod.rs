//! Natural-language annotation components.
//!
//! This module provides the annotation seam (raw text → tagged, lemmatized
//! sentences) and the synonym lookup seam. Both are traits so a real tagging
//! service or lexical database can be plugged in; the built-in
//! [`HeuristicAnnotator`](annotator::HeuristicAnnotator) and
//! [`SynonymDictionary`](lexicon::SynonymDictionary) make the crate
//! self-contained.

pub mod annotator;
pub mod lexicon;
