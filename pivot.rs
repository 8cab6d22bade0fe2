use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use itertools::Itertools;
use tracing::{debug, info};

use crate::error::{PetitionError, Result};
use crate::petition_types::{TokenizedPetition, WordRow, WordTable};

pub const DEFAULT_MAX_LIMIT: usize = 20;

/// Corpus-wide occurrence count of every token, most frequent first.
///
/// Equal counts are ordered alphabetically so repeated runs agree.
pub fn word_frequencies(petitions: &[TokenizedPetition]) -> Vec<(String, u64)> {
    petitions
        .iter()
        .flat_map(|p| p.words.iter().map(String::as_str))
        .counts()
        .into_iter()
        .sorted_by_key(|&(word, count)| (Reverse(count), word))
        .map(|(word, count)| (word.to_string(), count as u64))
        .collect()
}

/// The `max_limit` most frequent words; fewer when the corpus has fewer distinct words.
pub fn top_words(petitions: &[TokenizedPetition], max_limit: usize) -> Vec<String> {
    word_frequencies(petitions)
        .into_iter()
        .take(max_limit)
        .map(|(word, _)| word)
        .collect()
}

/// Pivot the top words into columns with one row per distinct title.
///
/// Only titles containing at least one vocabulary word produce a row. Rows are
/// numbered from 1 in descending title order.
pub fn top_words_as_columns(
    petitions: &[TokenizedPetition],
    max_limit: usize,
) -> Result<WordTable> {
    if max_limit == 0 {
        return Err(PetitionError::InvalidParameter {
            name: "max_limit",
            details: "must be at least 1".to_string(),
        });
    }
    let start = Instant::now();
    let vocabulary = top_words(petitions, max_limit);
    debug!(?vocabulary, "selected vocabulary");

    let column: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(idx, word)| (word.as_str(), idx))
        .collect();

    let mut per_title: BTreeMap<&str, Vec<u64>> = BTreeMap::new();
    for petition in petitions {
        let Some(title) = petition.title.as_deref() else {
            continue;
        };
        for word in &petition.words {
            if let Some(&idx) = column.get(word.as_str()) {
                per_title
                    .entry(title)
                    .or_insert_with(|| vec![0; vocabulary.len()])[idx] += 1;
            }
        }
    }

    let rows: Vec<WordRow> = per_title
        .into_iter()
        .rev()
        .zip(1u64..)
        .map(|((title, counts), petition_id)| WordRow {
            petition_id,
            title: title.to_string(),
            counts,
        })
        .collect();

    info!(
        rows = rows.len(),
        columns = vocabulary.len(),
        "pivoted top words in {:.2?}",
        start.elapsed()
    );
    Ok(WordTable::new(vocabulary, rows))
}
