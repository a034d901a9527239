use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord};

/// Source column names, as in the original launch-records export.
const COL_SITE: &str = "Launch Site";
const COL_PAYLOAD: &str = "Payload Mass (kg)";
const COL_BOOSTER: &str = "Booster Version Category";
const COL_CLASS: &str = "class";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch-records dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – scalar columns named as in the source export
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.csv`     – header row with the source column names
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Raw row shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

/// One row as it appears in the text formats.  Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "class")]
    class: i64,
}

impl RawRecord {
    fn validate(self, row: usize) -> Result<LaunchRecord> {
        LaunchRecord::new(
            self.site,
            self.payload_mass_kg,
            self.booster_version_category,
            self.class,
        )
        .with_context(|| format!("Row {row}: invalid launch record"))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// Parse CSV from any reader; factored out so tests can run on in-memory
/// input.
pub fn read_csv<R: Read>(reader: R) -> Result<LaunchDataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row}"))?;
        records.push(raw.validate(row)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "Booster Version Category": "FT",
///     "class": 1
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub fn parse_json(text: &str) -> Result<LaunchDataset> {
    let raw: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON")?;

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(row, r)| r.validate(row))
        .collect::<Result<Vec<_>>>()?;

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of launch records.
///
/// Expected schema: scalar columns named as in the source export.  String
/// columns may be Utf8 or LargeUtf8; `Payload Mass (kg)` may be Float32,
/// Float64, Int32 or Int64; `class` may be Int32 or Int64.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let site_col = named_column(&batch, COL_SITE)?;
        let payload_col = named_column(&batch, COL_PAYLOAD)?;
        let booster_col = named_column(&batch, COL_BOOSTER)?;
        let class_col = named_column(&batch, COL_CLASS)?;

        for row in 0..batch.num_rows() {
            let raw = RawRecord {
                site: extract_string(site_col, row)
                    .with_context(|| format!("Row {row}: '{COL_SITE}'"))?,
                payload_mass_kg: extract_f64(payload_col, row)
                    .with_context(|| format!("Row {row}: '{COL_PAYLOAD}'"))?,
                booster_version_category: extract_string(booster_col, row)
                    .with_context(|| format!("Row {row}: '{COL_BOOSTER}'"))?,
                class: extract_i64(class_col, row)
                    .with_context(|| format!("Row {row}: '{COL_CLASS}'"))?,
            };
            records.push(raw.validate(row)?);
        }
    }

    Ok(LaunchDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn named_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema_ref()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected a string column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 | DataType::Int32 => Ok(extract_i64(col, row)? as f64),
        other => bail!("Expected a numeric column, got {other:?}"),
    }
}

fn extract_i64(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    match col.data_type() {
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row) as i64)
        }
        other => bail!("Expected an integer column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    const CSV_SAMPLE: &str = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
CCAFS LC-40,2500.5,FT,1
VAFB SLC-4E,500,v1.0,0
CCAFS LC-40,9600,B5,1
";

    #[test]
    fn csv_parses_records_in_source_order() {
        let ds = read_csv(CSV_SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.records[0].payload_mass_kg, 2500.5);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
        assert_eq!(ds.payload_bounds, (500.0, 9600.0));
    }

    #[test]
    fn csv_ignores_extra_columns() {
        let csv = "\
Flight Number,Launch Site,Payload Mass (kg),Booster Version Category,class
1,KSC LC-39A,1000,FT,1
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].site, "KSC LC-39A");
    }

    #[test]
    fn csv_rejects_non_binary_class() {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
CCAFS LC-40,2500,FT,3
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("not 0 or 1"));
    }

    #[test]
    fn csv_rejects_negative_payload() {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
CCAFS LC-40,-5,FT,1
";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn json_parses_records() {
        let json = r#"[
            {"Launch Site": "A", "Payload Mass (kg)": 500.0,
             "Booster Version Category": "v1.0", "class": 1},
            {"Launch Site": "B", "Payload Mass (kg)": 2000.0,
             "Booster Version Category": "FT", "class": 0}
        ]"#;
        let ds = parse_json(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.booster_categories, vec!["v1.0", "FT"]);
    }

    #[test]
    fn json_requires_top_level_array() {
        assert!(parse_json(r#"{"Launch Site": "A"}"#).is_err());
    }

    #[test]
    fn empty_csv_yields_empty_dataset() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }
}
