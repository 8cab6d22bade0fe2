use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::loader::load_petitions;
use crate::petition_types::{Petition, TokenizedPetition, WordTable};
use crate::pivot::top_words_as_columns;
use crate::session::Session;
use crate::tokenize::tokenize_petitions;
use crate::writer::write_csv;

/// Runs the load → tokenize → pivot → write stages against one input file.
///
/// File names are resolved inside the session's data directory.
pub struct PetitionProcessor<'s> {
    session: &'s Session,
    petitions: Vec<Petition>,
}

impl<'s> PetitionProcessor<'s> {
    pub fn new(session: &'s Session, input_file: impl AsRef<Path>) -> Result<Self> {
        let path = session.data_path(input_file);
        let petitions = load_petitions(&path)?;
        Ok(Self { session, petitions })
    }

    /// Build a processor over petitions that are already in memory.
    pub fn from_petitions(session: &'s Session, petitions: Vec<Petition>) -> Self {
        Self { session, petitions }
    }

    pub fn petitions(&self) -> &[Petition] {
        &self.petitions
    }

    pub fn filter_top_hit_words(&self, word_length: usize) -> Result<Vec<TokenizedPetition>> {
        self.session
            .install(|| tokenize_petitions(&self.petitions, word_length))
    }

    pub fn top_hit_words_as_columns(
        &self,
        words: &[TokenizedPetition],
        max_limit: usize,
    ) -> Result<WordTable> {
        self.session.install(|| top_words_as_columns(words, max_limit))
    }

    pub fn write_csv(&self, table: &WordTable, output_file: impl AsRef<Path>) -> Result<()> {
        write_csv(table, &self.session.data_path(output_file))
    }

    /// Run every stage and write the result to `output_file`.
    pub fn run(
        &self,
        word_length: usize,
        max_limit: usize,
        output_file: impl AsRef<Path>,
    ) -> Result<WordTable> {
        let words = self.filter_top_hit_words(word_length)?;
        let table = self.top_hit_words_as_columns(&words, max_limit)?;
        self.write_csv(&table, output_file)?;
        info!(
            petitions = self.petitions.len(),
            rows = table.len(),
            vocabulary = table.vocabulary().len(),
            "pipeline finished"
        );
        Ok(table)
    }
}
