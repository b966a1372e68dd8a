//! Lexical substitution pass.
//!
//! Swaps open-class words for synonyms to raise lexical diversity. Closed
//! classes and a short list of very common verbs are never touched; every
//! other token gets an independent `substitution_rate` chance. Sentence and
//! document lengths are invariant under this pass.

use rand::rngs::StdRng;
use rand::Rng;

use crate::nlp::lexicon::{SynonymSource, WordClass};
use crate::types::{AnnotatedDocument, AnnotatedSentence, AnnotatedToken};

/// Closed-class and punctuation tags exempt from substitution.
pub(crate) const EXCLUDED_TAGS: [&str; 9] =
    ["DT", "IN", "CC", "TO", "PRP", "PRP$", ".", ",", ":"];

/// The most common English verbs, left alone regardless of tag.
pub(crate) const COMMON_VERB_LEMMAS: [&str; 19] = [
    "be", "have", "do", "say", "get", "make", "go", "know", "take", "see", "come", "think",
    "look", "want", "give", "use", "find", "tell", "ask",
];

/// Case-fit a chosen synonym. Proper nouns capitalize only the first word of
/// a multi-word synonym and leave the rest as returned; everything else is
/// lowercased wholesale.
fn adjust_case(synonym: &str, tag: &str) -> String {
    if tag == "NNP" || tag == "NNPS" {
        let mut words = synonym.split(' ');
        let first = words.next().unwrap_or_default();
        let mut out: String = first
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default();
        out.push_str(&first.chars().skip(1).collect::<String>().to_lowercase());
        for word in words {
            out.push(' ');
            out.push_str(word);
        }
        out
    } else {
        synonym.to_lowercase()
    }
}

/// Apply the substitution pass, producing a new document.
///
/// The replacement token keeps the original tag even though the new word may
/// belong to a different category, and takes its own lowercased surface as
/// lemma. Both are deliberate: re-tagging would change observable output.
pub fn substitute<S: SynonymSource>(
    doc: AnnotatedDocument,
    rate: f64,
    lexicon: &S,
    rng: &mut StdRng,
) -> AnnotatedDocument {
    let sentences = doc
        .into_sentences()
        .into_iter()
        .map(|sentence| substitute_sentence(sentence, rate, lexicon, rng))
        .collect();
    AnnotatedDocument::new(sentences)
}

fn substitute_sentence<S: SynonymSource>(
    sentence: AnnotatedSentence,
    rate: f64,
    lexicon: &S,
    rng: &mut StdRng,
) -> AnnotatedSentence {
    sentence
        .into_iter()
        .map(|token| {
            let skip = EXCLUDED_TAGS.contains(&token.tag.as_str())
                || COMMON_VERB_LEMMAS.contains(&token.lemma.to_lowercase().as_str());
            if skip || rng.gen::<f64>() >= rate {
                return token;
            }
            let candidates = lexicon.synonyms(&token.lemma, WordClass::from_tag(&token.tag));
            if candidates.is_empty() {
                return token;
            }
            let chosen = &candidates[rng.gen_range(0..candidates.len())];
            let surface = adjust_case(chosen, &token.tag);
            let lemma = surface.to_lowercase();
            AnnotatedToken::new(surface, token.tag, lemma)
        })
        .collect()
}
