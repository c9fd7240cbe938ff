//! Delimited-text export of display rows.
//!
//! The file is UTF-8 CSV with a fixed header, one record per row, and the
//! usual quoting for fields that contain the delimiter, quotes, or line
//! breaks. [`parse_delimited_text`] reads the same format back.

use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET;
use crate::error::{DataError, DataResult};
use crate::row::Row;

/// Column names of the exported file, in order.
pub const HEADER: [&str; 4] = ["ID", "Document", "Metadata", "Embedding Size"];

/// Suggested file name for a download.
pub const EXPORT_FILE_NAME: &str = "chromadb_export.csv";

/// Content type of the exported file.
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

/// One record read back from an exported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Document")]
    pub document: String,
    #[serde(rename = "Metadata")]
    pub metadata: String,
    #[serde(rename = "Embedding Size")]
    pub embedding_size: usize,
}

impl From<&Row> for ExportRecord {
    fn from(row: &Row) -> Self {
        Self {
            id: row.id.clone(),
            document: row.document.clone().unwrap_or_default(),
            metadata: row.metadata.clone().unwrap_or_default(),
            embedding_size: row.embedding_length,
        }
    }
}

/// Serializes rows into CSV bytes, header first.
pub fn to_delimited_text(rows: &[Row]) -> DataResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(row.display_fields())?;
    }
    writer.flush()?;

    let bytes = writer.into_inner().map_err(|e| DataError::Io(e.into_error()))?;

    tracing::debug!(
        target: TRACING_TARGET,
        records = rows.len(),
        bytes = bytes.len(),
        "Exported rows as delimited text"
    );

    Ok(bytes)
}

/// Parses CSV bytes previously produced by [`to_delimited_text`].
pub fn parse_delimited_text(bytes: &[u8]) -> DataResult<Vec<ExportRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let actual: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    if actual != HEADER {
        return Err(DataError::Header {
            expected: HEADER.iter().map(|s| (*s).to_owned()).collect(),
            actual,
        });
    }

    let records = reader
        .deserialize::<ExportRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "a".into(),
                document: Some("hello".into()),
                metadata: Some("{'k': 1}".into()),
                embedding_length: 2,
            },
            Row {
                id: "b".into(),
                document: Some("world".into()),
                metadata: Some("None".into()),
                embedding_length: 2,
            },
        ]
    }

    #[test]
    fn writes_header_and_records() -> DataResult<()> {
        let bytes = to_delimited_text(&rows())?;
        let text = String::from_utf8_lossy(&bytes);

        assert_eq!(
            text,
            "ID,Document,Metadata,Embedding Size\n\
             a,hello,{'k': 1},2\n\
             b,world,None,2\n"
        );
        Ok(())
    }

    #[test]
    fn empty_rows_write_header_only() -> DataResult<()> {
        let bytes = to_delimited_text(&[])?;
        assert_eq!(bytes, b"ID,Document,Metadata,Embedding Size\n");
        assert!(parse_delimited_text(&bytes)?.is_empty());
        Ok(())
    }

    #[test]
    fn quotes_special_characters() -> DataResult<()> {
        let rows = vec![Row {
            id: "q".into(),
            document: Some("one, \"two\"\nthree".into()),
            metadata: Some("{'k': 'a,b'}".into()),
            embedding_length: 0,
        }];

        let bytes = to_delimited_text(&rows)?;
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("\"one, \"\"two\"\"\nthree\""));

        let records = parse_delimited_text(&bytes)?;
        assert_eq!(records, vec![ExportRecord::from(&rows[0])]);
        Ok(())
    }

    #[test]
    fn round_trip_matches_display_fields() -> DataResult<()> {
        let mut rows = rows();
        rows.push(Row {
            id: "c".into(),
            document: None,
            metadata: None,
            embedding_length: 0,
        });

        let records = parse_delimited_text(&to_delimited_text(&rows)?)?;
        assert_eq!(records.len(), rows.len());
        for (record, row) in records.iter().zip(&rows) {
            let [id, document, metadata, size] = row.display_fields();
            assert_eq!(record.id, id);
            assert_eq!(record.document, document);
            assert_eq!(record.metadata, metadata);
            assert_eq!(record.embedding_size.to_string(), size);
        }
        Ok(())
    }

    #[test]
    fn rejects_foreign_header() {
        let result = parse_delimited_text(b"id,text\n1,x\n");
        assert!(matches!(result, Err(DataError::Header { .. })));
    }
}
