use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::{PetitionError, Result};
use crate::petition_types::{Petition, PetitionDocument};

/// Dotted path of the title inside each record.
pub const TITLE_FIELD: &str = "label._value";

/// Read a petition collection and pull out each record's title.
///
/// Accepts either an array of objects or a single object.
pub fn load_petitions(path: &Path) -> Result<Vec<Petition>> {
    let start = Instant::now();
    let file = File::open(path)?;
    let petitions = parse_petitions(path, BufReader::new(file))?;
    info!(
        path = %path.display(),
        records = petitions.len(),
        "loaded petitions in {:.2?}",
        start.elapsed()
    );
    Ok(petitions)
}

pub(crate) fn parse_petitions<R: Read>(path: &Path, reader: R) -> Result<Vec<Petition>> {
    let document: PetitionDocument =
        serde_json::from_reader(reader).map_err(|source| PetitionError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let records = document.into_records();

    if !records.is_empty() && !records.iter().any(|r| r.has_title_field()) {
        return Err(PetitionError::MissingField {
            path: path.to_path_buf(),
            field: TITLE_FIELD.to_string(),
        });
    }

    Ok(records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let title = record.title();
            if title.is_none() {
                debug!(record = idx, "record has no title");
            }
            Petition { title }
        })
        .collect())
}
