use std::time::Instant;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use tracing::info;

use crate::error::{PetitionError, Result};
use crate::petition_types::{Petition, TokenizedPetition};

// Compile regexes once. Whitespace is the ASCII set only; other spaces are stripped.
static NON_ALPHA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z \t\n\x0B\x0C\r]").unwrap());
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").unwrap());

/// Lower-case, strip non-alphabetic characters and keep words of at least `word_length` chars.
pub fn tokenize_title(title: &str, word_length: usize) -> Vec<String> {
    let lowered = title.to_lowercase();
    let cleaned = NON_ALPHA_REGEX.replace_all(&lowered, "");
    WHITESPACE_REGEX
        .split(&cleaned)
        .filter(|word| word.len() >= word_length)
        .map(str::to_string)
        .collect()
}

/// Tokenize every petition title in parallel, preserving input order.
pub fn tokenize_petitions(
    petitions: &[Petition],
    word_length: usize,
) -> Result<Vec<TokenizedPetition>> {
    if word_length == 0 {
        return Err(PetitionError::InvalidParameter {
            name: "word_length",
            details: "must be at least 1".to_string(),
        });
    }
    let start = Instant::now();
    let tokenized: Vec<TokenizedPetition> = petitions
        .par_iter()
        .map(|petition| TokenizedPetition {
            title: petition.title.clone(),
            words: petition
                .title
                .as_deref()
                .map(|t| tokenize_title(t, word_length))
                .unwrap_or_default(),
        })
        .collect();
    let words: usize = tokenized.iter().map(|p| p.words.len()).sum();
    info!(
        petitions = tokenized.len(),
        words,
        word_length,
        "tokenized titles in {:.2?}",
        start.elapsed()
    );
    Ok(tokenized)
}
