use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top level of a petition file: an array of records or a single record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PetitionDocument {
    Many(Vec<PetitionRecord>),
    One(PetitionRecord),
}

impl PetitionDocument {
    pub fn into_records(self) -> Vec<PetitionRecord> {
        match self {
            PetitionDocument::Many(records) => records,
            PetitionDocument::One(record) => vec![record],
        }
    }
}

/// Raw petition record as found in the input; other fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PetitionRecord {
    #[serde(default)]
    pub label: Option<Label>,
}

/// `label` object carrying the petition title.
#[derive(Debug, Default, Deserialize)]
pub struct Label {
    /// `None` when the key is absent, `Some(Value::Null)` when it is null.
    #[serde(rename = "_value", default, deserialize_with = "present")]
    pub value: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PetitionRecord {
    /// Whether the record carries `label._value` at all, null included.
    pub fn has_title_field(&self) -> bool {
        self.label.as_ref().is_some_and(|label| label.value.is_some())
    }

    /// Title text; non-string scalars are rendered as JSON.
    pub fn title(&self) -> Option<String> {
        match self.label.as_ref()?.value.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// One input record; only the title survives loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Petition {
    pub title: Option<String>,
}

/// A petition with the qualifying words of its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedPetition {
    pub title: Option<String>,
    /// Lower-cased alphabetic tokens of at least the requested length, in title order.
    pub words: Vec<String>,
}

/// One row of the pivoted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    pub petition_id: u64,
    pub title: String,
    /// Counts aligned with [`WordTable::vocabulary`].
    pub counts: Vec<u64>,
}

/// Wide table: `petition_id` followed by one count column per vocabulary word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordTable {
    vocabulary: Vec<String>,
    rows: Vec<WordRow>,
}

pub const ID_COLUMN: &str = "petition_id";

impl WordTable {
    pub(crate) fn new(vocabulary: Vec<String>, rows: Vec<WordRow>) -> Self {
        Self { vocabulary, rows }
    }

    /// Vocabulary words in descending frequency order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[WordRow] {
        &self.rows
    }

    /// Header names, identifier column first.
    pub fn columns(&self) -> Vec<&str> {
        std::iter::once(ID_COLUMN)
            .chain(self.vocabulary.iter().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count of `word` in row `index`; `None` when either is out of range.
    pub fn count(&self, index: usize, word: &str) -> Option<u64> {
        let column = self.vocabulary.iter().position(|w| w == word)?;
        self.rows.get(index).map(|row| row.counts[column])
    }
}
