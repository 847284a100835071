//! Projection of decoded files into interchange formats
//!
//! The JSON document has three top-level keys: `metadata`, `variables` and
//! `data`. The text form of a given file is canonical: the same file always
//! prints the same bytes. Non-finite numbers become `null`.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use serde_json::{json, Value};

use crate::decode::{Cell, DecodedFile};
use crate::Result;

/// Build the document tree for a decoded file
pub fn to_document(file: &DecodedFile) -> Value {
    json!({
        "metadata": file.metadata(),
        "variables": file.variables(),
        "data": file.rows(),
    })
}

/// Pretty-printed JSON text of the document tree
pub fn serialize(file: &DecodedFile) -> String {
    format!("{:#}", to_document(file))
}

/// Write the case matrix as CSV: a header of variable names, then one
/// record per case with every field quoted
pub fn write_csv<W: Write>(file: &DecodedFile, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv.write_record(file.variables().iter().map(|variable| variable.name.as_str()))?;
    for row in file.rows() {
        csv.write_record(row.iter().map(cell_text))?;
    }
    csv.flush()?;
    Ok(())
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Number(value) if value.is_finite() => value.to_string(),
        // system-missing
        Cell::Number(_) => String::new(),
        Cell::Text(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use savio_core::{FileHeader, VariableDefinition};

    fn survey_bytes() -> Vec<u8> {
        let header = FileHeader {
            variable_count: 2,
            case_count: 2,
            bias: 100.0,
            ..FileHeader::new()
        }
        .with_creation_date("03 Jan 25")
        .with_file_label("Pilot");
        let mut bytes = header.to_bytes_array().to_vec();
        bytes.extend_from_slice(
            &VariableDefinition::numeric("AGE")
                .with_label("Age in years")
                .with_formats(0, 0x050200, 0x050200)
                .to_bytes(),
        );
        bytes.extend_from_slice(&VariableDefinition::string("CITY", 8).to_bytes());
        bytes.extend_from_slice(&999i32.to_le_bytes());
        bytes
    }

    fn survey() -> DecodedFile {
        decode(&survey_bytes()).unwrap()
    }

    #[test]
    fn test_document_shape() {
        let doc = to_document(&survey());
        let top = doc.as_object().unwrap();
        assert_eq!(top.len(), 3);
        for key in ["metadata", "variables", "data"] {
            assert!(top.contains_key(key), "missing {key}");
        }

        assert_eq!(
            doc["metadata"],
            json!({
                "layoutCode": 2,
                "variableCount": 2,
                "compression": 0,
                "weightIndex": 0,
                "caseCount": 2,
                "bias": 100.0,
                "creationDate": "03 Jan 25",
                "fileLabel": "Pilot",
            })
        );
        assert_eq!(
            doc["variables"][0],
            json!({
                "name": "AGE",
                "type": "numeric",
                "width": 0,
                "hasLabel": true,
                "missingFormat": 0,
                "printFormat": 0x050200,
                "writeFormat": 0x050200,
                "label": "Age in years",
            })
        );
        assert_eq!(doc["variables"][1]["type"], "string");
        assert_eq!(doc["variables"][1]["width"], 8);
        assert!(doc["variables"][1].get("label").is_none());
        assert_eq!(doc["data"], json!([]));
    }

    #[test]
    fn test_rows_project_to_scalars() {
        let file = survey()
            .with_rows(vec![
                vec![Cell::from(41.5), Cell::from("Oslo")],
                vec![Cell::from(f64::NAN), Cell::from("")],
            ])
            .unwrap();
        let doc = to_document(&file);
        assert_eq!(doc["data"], json!([[41.5, "Oslo"], [null, ""]]));
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let bytes = survey_bytes();
        let first = serialize(&decode(&bytes).unwrap());
        let second = serialize(&decode(&bytes).unwrap());
        assert_eq!(first, second);

        let reparsed: Value = serde_json::from_str(&first).unwrap();
        assert_eq!(reparsed, to_document(&survey()));
        assert!(first.contains("\n  \"metadata\": {"));
    }

    #[test]
    fn test_write_csv() {
        let file = survey()
            .with_rows(vec![
                vec![Cell::from(41.0), Cell::from("Oslo")],
                vec![Cell::from(f64::NAN), Cell::from("Bod\u{f8}, Nord")],
            ])
            .unwrap();
        let mut out = Vec::new();
        write_csv(&file, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"AGE\",\"CITY\"\n\"41\",\"Oslo\"\n\"\",\"Bod\u{f8}, Nord\"\n"
        );
    }

    #[test]
    fn test_write_csv_without_rows() {
        let mut out = Vec::new();
        write_csv(&survey(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\"AGE\",\"CITY\"\n");
    }
}
