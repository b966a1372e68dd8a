//! Contraction introduction pass.
//!
//! Scans each sentence left to right and merges adjacent pairs found in a
//! fixed table ("is" + "not" → "isn't"). When two candidate pairs overlap
//! ("She is not"), the earlier pair yields to the later one, so negations
//! contract in preference to pronoun-verb pairs. The merged token inherits
//! the first token's tag — a heuristic, not a re-derivation — and its
//! lowercased surface as lemma. Token counts never increase.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::types::{AnnotatedDocument, AnnotatedSentence, AnnotatedToken};

/// Lowercased `(first, second)` → contracted surface. `(can, not)` maps to
/// the one-word "cannot" rather than "can't".
static CONTRACTIONS: Lazy<FxHashMap<(&'static str, &'static str), &'static str>> =
    Lazy::new(|| {
        [
            (("is", "not"), "isn't"),
            (("are", "not"), "aren't"),
            (("was", "not"), "wasn't"),
            (("were", "not"), "weren't"),
            (("do", "not"), "don't"),
            (("does", "not"), "doesn't"),
            (("did", "not"), "didn't"),
            (("have", "not"), "haven't"),
            (("has", "not"), "hasn't"),
            (("had", "not"), "hadn't"),
            (("will", "not"), "won't"),
            (("would", "not"), "wouldn't"),
            (("can", "not"), "cannot"),
            (("could", "not"), "couldn't"),
            (("should", "not"), "shouldn't"),
            (("i", "am"), "I'm"),
            (("you", "are"), "you're"),
            (("he", "is"), "he's"),
            (("she", "is"), "she's"),
            (("it", "is"), "it's"),
            (("we", "are"), "we're"),
            (("they", "are"), "they're"),
            (("i", "have"), "I've"),
            (("you", "have"), "you've"),
            (("we", "have"), "we've"),
            (("they", "have"), "they've"),
            (("i", "will"), "I'll"),
            (("you", "will"), "you'll"),
            (("he", "will"), "he'll"),
            (("she", "will"), "she'll"),
            (("it", "will"), "it'll"),
            (("we", "will"), "we'll"),
            (("they", "will"), "they'll"),
            (("i", "would"), "I'd"),
            (("you", "would"), "you'd"),
            (("he", "would"), "he'd"),
            (("she", "would"), "she'd"),
            (("we", "would"), "we'd"),
            (("they", "would"), "they'd"),
            (("let", "us"), "let's"),
        ]
        .into_iter()
        .collect()
    });

/// If the first merged token was capitalized and the contracted form starts
/// lowercase, carry the capital over. `let's` is exempt: it stays lowercase
/// wherever it lands.
fn carry_capital(contracted: &str, first_surface: &str) -> String {
    let first_was_upper = first_surface.chars().next().is_some_and(|c| c.is_uppercase());
    let starts_lower = contracted.chars().next().is_some_and(|c| c.is_lowercase());
    if first_was_upper && starts_lower && contracted != "let's" {
        let mut chars = contracted.chars();
        let head: String = chars.next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
        format!("{head}{}", chars.as_str())
    } else {
        contracted.to_string()
    }
}

/// Apply the contraction pass, producing a new document.
pub fn contract(doc: AnnotatedDocument) -> AnnotatedDocument {
    let sentences = doc
        .into_sentences()
        .into_iter()
        .map(contract_sentence)
        .collect();
    AnnotatedDocument::new(sentences)
}

fn contract_sentence(sentence: AnnotatedSentence) -> AnnotatedSentence {
    let mut out = Vec::with_capacity(sentence.len());
    let mut i = 0;
    while i < sentence.len() {
        if i + 1 < sentence.len() {
            let first = sentence[i].surface.to_lowercase();
            let second = sentence[i + 1].surface.to_lowercase();
            if let Some(contracted) = CONTRACTIONS.get(&(first.as_str(), second.as_str())) {
                // Overlapping candidates defer rightward: "She is not" must
                // yield "She isn't", not "She's not".
                let yields_to_next = i + 2 < sentence.len()
                    && CONTRACTIONS.contains_key(&(
                        second.as_str(),
                        sentence[i + 2].surface.to_lowercase().as_str(),
                    ));
                if !yields_to_next {
                    let surface = carry_capital(contracted, &sentence[i].surface);
                    let tag = sentence[i].tag.clone();
                    let lemma = surface.to_lowercase();
                    out.push(AnnotatedToken::new(surface, tag, lemma));
                    i += 2;
                    continue;
                }
            }
        }
        out.push(sentence[i].clone());
        i += 1;
    }
    out
}
