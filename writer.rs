use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::error::Result;
use crate::petition_types::WordTable;

/// Write the table as one comma-separated file with a header row.
pub fn write_csv(table: &WordTable, path: &Path) -> Result<()> {
    let start = Instant::now();
    let file = File::create(path)?;
    write_table(table, file)?;
    info!(
        path = %path.display(),
        rows = table.len(),
        "wrote table in {:.2?}",
        start.elapsed()
    );
    Ok(())
}

/// Serialize `table` into any writer.
pub fn write_table<W: Write>(table: &WordTable, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b',').from_writer(out);
    writer.write_record(table.columns())?;
    for row in table.rows() {
        let record = std::iter::once(row.petition_id.to_string())
            .chain(row.counts.iter().map(u64::to_string));
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::petition_types::WordRow;

    #[test]
    fn writes_header_and_rows() {
        let table = WordTable::new(
            vec!["government".into(), "heavymetal".into()],
            vec![
                WordRow { petition_id: 1, title: "b".into(), counts: vec![1, 2] },
                WordRow { petition_id: 2, title: "a".into(), counts: vec![1, 0] },
            ],
        );
        let mut buf = Vec::new();
        write_table(&table, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "petition_id,government,heavymetal\n1,1,2\n2,1,0\n"
        );
    }

    #[test]
    fn empty_table_writes_header_only() {
        let mut buf = Vec::new();
        write_table(&WordTable::default(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "petition_id\n");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("out.csv");
        assert!(write_csv(&WordTable::default(), &path).is_err());
    }
}
