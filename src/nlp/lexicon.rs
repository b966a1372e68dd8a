//! Synonym lookup.
//!
//! [`SynonymSource`] is the boundary to a lexical database keyed by lemma and
//! word class. [`SynonymDictionary`] is the built-in source: a frozen table
//! constructed once at first use and safe for concurrent reads.
//! [`FileLexicon`] loads a user-supplied JSON table instead; a missing or
//! malformed file is a [`ResourceUnavailable`](crate::error::HumanizerError)
//! setup failure. Lookups themselves never fail — an unknown word simply
//! returns no candidates — and the query word itself is never returned.

use std::path::Path;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{HumanizerError, Result};

/// Coarse word class used to restrict synonym lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    /// Map a Penn Treebank tag to a word class by its leading letter:
    /// `N*` → noun, `V*` → verb, `J*` → adjective, `R*` → adverb.
    pub fn from_tag(tag: &str) -> Option<WordClass> {
        match tag.chars().next()? {
            'N' => Some(WordClass::Noun),
            'V' => Some(WordClass::Verb),
            'J' => Some(WordClass::Adjective),
            'R' => Some(WordClass::Adverb),
            _ => None,
        }
    }
}

/// A lexical database: candidate synonyms for a lemma, optionally restricted
/// to one word class.
///
/// Contract: empty result for unknown words, never an error, never the query
/// word itself (case-insensitive), multi-word entries joined with spaces.
pub trait SynonymSource {
    fn synonyms(&self, lemma: &str, class: Option<WordClass>) -> Vec<String>;
}

// ============================================================================
// Built-in dictionary
// ============================================================================

type Entry = (&'static str, WordClass, &'static [&'static str]);

/// Seed entries, biased toward the over-formal vocabulary the substitution
/// pass is meant to dilute.
static ENTRIES: &[Entry] = &[
    ("good", WordClass::Adjective, &["fine", "decent", "solid", "sound"]),
    ("bad", WordClass::Adjective, &["poor", "awful", "lousy"]),
    ("big", WordClass::Adjective, &["large", "sizable", "huge"]),
    ("small", WordClass::Adjective, &["little", "modest", "minor"]),
    ("happy", WordClass::Adjective, &["glad", "pleased", "content"]),
    ("perfect", WordClass::Adjective, &["flawless", "ideal", "spotless"]),
    ("important", WordClass::Adjective, &["significant", "central", "weighty"]),
    ("essential", WordClass::Adjective, &["vital", "necessary", "key"]),
    ("numerous", WordClass::Adjective, &["many", "plentiful", "countless"]),
    ("complex", WordClass::Adjective, &["complicated", "involved", "tangled"]),
    ("substantial", WordClass::Adjective, &["considerable", "sizable", "real"]),
    ("simple", WordClass::Adjective, &["plain", "basic", "easy"]),
    ("quick", WordClass::Adjective, &["fast", "rapid", "speedy"]),
    ("advanced", WordClass::Adjective, &["sophisticated", "modern", "mature"]),
    ("emergent", WordClass::Adjective, &["emerging", "nascent", "rising"]),
    ("careful", WordClass::Adjective, &["cautious", "deliberate", "thorough"]),
    ("truth", WordClass::Noun, &["fact", "verity", "reality"]),
    ("decision", WordClass::Noun, &["choice", "call", "judgment"]),
    ("situation", WordClass::Noun, &["state of affairs", "position", "circumstance"]),
    ("factor", WordClass::Noun, &["element", "ingredient", "component"]),
    ("solution", WordClass::Noun, &["answer", "fix", "resolution"]),
    ("planning", WordClass::Noun, &["preparation", "groundwork"]),
    ("success", WordClass::Noun, &["achievement", "win"]),
    ("overview", WordClass::Noun, &["summary", "outline", "survey"]),
    ("document", WordClass::Noun, &["paper", "report", "record"]),
    ("utilization", WordClass::Noun, &["use", "usage", "employment"]),
    ("optimization", WordClass::Noun, &["tuning", "refinement"]),
    ("allocation", WordClass::Noun, &["distribution", "assignment"]),
    ("paradigm", WordClass::Noun, &["model", "pattern", "framework"]),
    ("methodology", WordClass::Noun, &["method", "approach", "procedure"]),
    ("improvement", WordClass::Noun, &["gain", "upgrade", "advance"]),
    ("performance", WordClass::Noun, &["output", "results", "showing"]),
    ("stakeholder", WordClass::Noun, &["participant", "party", "interested party"]),
    ("efficiency", WordClass::Noun, &["effectiveness", "productivity"]),
    ("example", WordClass::Noun, &["instance", "case", "illustration"]),
    ("text", WordClass::Noun, &["passage", "writing", "prose"]),
    ("model", WordClass::Noun, &["system", "framework"]),
    ("man", WordClass::Noun, &["gentleman", "fellow"]),
    ("wife", WordClass::Noun, &["spouse", "partner"]),
    ("fortune", WordClass::Noun, &["wealth", "riches"]),
    ("facilitate", WordClass::Verb, &["ease", "enable", "smooth"]),
    ("leverage", WordClass::Verb, &["exploit", "apply", "draw on"]),
    ("enhance", WordClass::Verb, &["improve", "strengthen", "sharpen"]),
    ("utilize", WordClass::Verb, &["use", "employ", "apply"]),
    ("generate", WordClass::Verb, &["produce", "create", "yield"]),
    ("anticipate", WordClass::Verb, &["expect", "foresee", "predict"]),
    ("acknowledge", WordClass::Verb, &["accept", "admit", "recognize"]),
    ("consider", WordClass::Verb, &["weigh", "examine", "ponder"]),
    ("require", WordClass::Verb, &["need", "demand", "call for"]),
    ("yield", WordClass::Verb, &["produce", "deliver", "return"]),
    ("run", WordClass::Verb, &["operate", "execute", "function"]),
    ("quickly", WordClass::Adverb, &["rapidly", "swiftly", "speedily"]),
    ("universally", WordClass::Adverb, &["generally", "broadly", "widely"]),
    ("strategically", WordClass::Adverb, &["deliberately", "tactically"]),
    ("substantially", WordClass::Adverb, &["considerably", "markedly"]),
];

/// `(lemma, class)` → candidate list, built once.
static TABLE: Lazy<FxHashMap<(&'static str, WordClass), &'static [&'static str]>> =
    Lazy::new(|| {
        ENTRIES
            .iter()
            .map(|(lemma, class, syns)| ((*lemma, *class), *syns))
            .collect()
    });

/// Frozen in-process synonym table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynonymDictionary;

impl SynonymDictionary {
    pub fn new() -> Self {
        Self
    }
}

impl SynonymSource for SynonymDictionary {
    fn synonyms(&self, lemma: &str, class: Option<WordClass>) -> Vec<String> {
        let query = lemma.to_lowercase();
        let all = [
            WordClass::Noun,
            WordClass::Verb,
            WordClass::Adjective,
            WordClass::Adverb,
        ];
        let classes: &[WordClass] = match &class {
            Some(c) => std::slice::from_ref(c),
            None => &all,
        };
        let mut out = Vec::new();
        for c in classes {
            if let Some(candidates) = TABLE.get(&(query.as_str(), *c)) {
                for candidate in *candidates {
                    if !candidate.eq_ignore_ascii_case(&query) {
                        out.push((*candidate).to_string());
                    }
                }
            }
        }
        out
    }
}

// ============================================================================
// File-backed lexicon
// ============================================================================

/// Synonym table loaded from a JSON object of `{"lemma": ["synonym", ...]}`.
///
/// Entries are class-blind: a requested word class never filters them, since
/// the file format carries none. Construction fails with
/// [`HumanizerError::ResourceUnavailable`] when the file is missing or not
/// valid JSON; this should abort startup rather than be retried per request.
#[derive(Debug, Clone, Default)]
pub struct FileLexicon {
    entries: FxHashMap<String, Vec<String>>,
}

impl FileLexicon {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            HumanizerError::ResourceUnavailable(format!(
                "synonym table {}: {e}",
                path.display()
            ))
        })?;
        let entries = serde_json::from_str(&data).map_err(|e| {
            HumanizerError::ResourceUnavailable(format!(
                "synonym table {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self { entries })
    }
}

impl SynonymSource for FileLexicon {
    fn synonyms(&self, lemma: &str, _class: Option<WordClass>) -> Vec<String> {
        self.entries
            .get(&lemma.to_lowercase())
            .map(|candidates| {
                candidates
                    .iter()
                    .filter(|c| !c.eq_ignore_ascii_case(lemma))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
