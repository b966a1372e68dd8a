//! Surface-text reconstruction.
//!
//! Serializes the current document state back to prose. A space goes before
//! every token except at sentence start, before punctuation and bound
//! suffixes, and directly after an opening parenthesis. Sentences are joined
//! with single spaces.

use crate::types::{AnnotatedDocument, AnnotatedSentence};

/// Surfaces that attach to the preceding token without a space.
const NO_SPACE_BEFORE: [&str; 13] = [
    ".", ",", "?", "!", ";", ":", "'s", "n't", "'m", "'re", "'ll", "'d", "'ve",
];

/// Serialize the whole document. Empty sentences contribute empty segments.
pub fn reconstruct(doc: &AnnotatedDocument) -> String {
    doc.sentences()
        .iter()
        .map(reconstruct_sentence)
        .collect::<Vec<_>>()
        .join(" ")
}

fn reconstruct_sentence(sentence: &AnnotatedSentence) -> String {
    let mut out = String::new();
    for (i, token) in sentence.iter().enumerate() {
        if i > 0
            && !NO_SPACE_BEFORE.contains(&token.surface.as_str())
            && !out.ends_with('(')
        {
            out.push(' ');
        }
        out.push_str(&token.surface);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnnotatedToken;

    fn tok(surface: &str) -> AnnotatedToken {
        AnnotatedToken::new(surface, "NN", surface.to_lowercase())
    }

    #[test]
    fn test_plain_sentence() {
        let doc = AnnotatedDocument::new(vec![vec![
            tok("AI"),
            tok("is"),
            tok("good"),
            tok("."),
        ]]);
        assert_eq!(reconstruct(&doc), "AI is good.");
    }

    #[test]
    fn test_clitics_attach_without_space() {
        let doc = AnnotatedDocument::new(vec![vec![
            tok("She"),
            tok("is"),
            tok("n't"),
            tok("happy"),
            tok(","),
            tok("is"),
            tok("she"),
            tok("?"),
        ]]);
        assert_eq!(reconstruct(&doc), "She isn't happy, is she?");
    }

    #[test]
    fn test_possessive_attaches() {
        let doc = AnnotatedDocument::new(vec![vec![
            tok("The"),
            tok("model"),
            tok("'s"),
            tok("output"),
            tok("."),
        ]]);
        assert_eq!(reconstruct(&doc), "The model's output.");
    }

    #[test]
    fn test_no_space_after_opening_paren() {
        let doc = AnnotatedDocument::new(vec![vec![
            tok("good"),
            tok("("),
            tok("mostly"),
            tok(")"),
            tok("."),
        ]]);
        // ")" is not in the attach list, but nothing precedes "mostly".
        assert_eq!(reconstruct(&doc), "good (mostly ).");
    }

    #[test]
    fn test_sentences_joined_with_single_space() {
        let doc = AnnotatedDocument::new(vec![
            vec![tok("One"), tok(".")],
            vec![tok("Two"), tok(".")],
        ]);
        assert_eq!(reconstruct(&doc), "One. Two.");
    }

    #[test]
    fn test_empty_document_and_empty_sentence() {
        assert_eq!(reconstruct(&AnnotatedDocument::default()), "");
        let doc = AnnotatedDocument::new(vec![vec![], vec![tok("hi")]]);
        assert_eq!(reconstruct(&doc), " hi");
    }
}
