//! Top-word pivot over petition titles.
//!
//! Loads a JSON collection of petitions, tokenizes each title, picks the most
//! frequent words across the corpus and writes a wide CSV with one count
//! column per word.

pub mod error;
pub mod loader;
pub mod petition_types;
pub mod pivot;
pub mod processor;
pub mod session;
pub mod tokenize;
pub mod writer;

pub use error::{PetitionError, Result};
pub use petition_types::{ID_COLUMN, Petition, TokenizedPetition, WordRow, WordTable};
pub use pivot::DEFAULT_MAX_LIMIT;
pub use processor::PetitionProcessor;
pub use session::{Session, SessionBuilder};
