use crate::core::resolve::resolve_zones;
use crate::domain::model::{ResolvedZoneEntry, RunSummary, ZoneMapResult, ZoneRecord};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, ZoneEtlError};
use serde::Deserialize;
use std::collections::BTreeSet;

pub const CSV_FILENAME: &str = "zone_data.csv";
pub const SUMMARY_FILENAME: &str = "zone_summary.json";

/// Raw row of the master zone table, a CSV export of the pricing workbook.
/// `Set_ID` is numeric-ish and becomes the origin code after zero-padding.
#[derive(Debug, Deserialize)]
struct MasterZoneRow {
    #[serde(rename = "Set_ID")]
    set_id: String,
    #[serde(rename = "Min_Zip_Int")]
    min_zip: i64,
    #[serde(rename = "Max_Zip_Int")]
    max_zip: i64,
    #[serde(rename = "Zone")]
    zone: i64,
}

pub struct ZoneMapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ZoneMapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

fn zone_record_from_row(row: MasterZoneRow, row_number: usize) -> Result<ZoneRecord> {
    let set_id = row.set_id.trim();
    if set_id.is_empty() || !set_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ZoneEtlError::ProcessingError {
            message: format!("row {}: Set_ID '{}' is not numeric", row_number, row.set_id),
        });
    }

    for (field, value) in [("Min_Zip_Int", row.min_zip), ("Max_Zip_Int", row.max_zip)] {
        if !(0..=999).contains(&value) {
            return Err(ZoneEtlError::ProcessingError {
                message: format!(
                    "row {}: {} value {} is outside the ZIP3 range 0-999",
                    row_number, field, value
                ),
            });
        }
    }

    if row.zone < 1 {
        return Err(ZoneEtlError::ProcessingError {
            message: format!("row {}: Zone must be a positive integer, got {}", row_number, row.zone),
        });
    }

    Ok(ZoneRecord {
        origin: format!("{:0>3}", set_id),
        dest_zip_min: row.min_zip as u16,
        dest_zip_max: row.max_zip as u16,
        zone: row.zone as u32,
    })
}

fn entries_to_csv(entries: &[ResolvedZoneEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in entries {
        writer.serialize(entry)?;
    }
    // serialize() only writes the header once a row exists; an empty result
    // still gets its header so consumers see the column shape.
    if entries.is_empty() {
        writer.write_record(["zip3", "Zone", "OriginWithMinZone"])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ZoneEtlError::ProcessingError {
            message: format!("failed to flush CSV output: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| ZoneEtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ZoneMapPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<ZoneRecord>> {
        tracing::debug!("Reading zone table from: {}", self.config.zone_table_path());
        let bytes = self
            .storage
            .read_file(self.config.zone_table_path())
            .await?;

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<MasterZoneRow>().enumerate() {
            // Header is line 1, so the first data row is line 2.
            records.push(zone_record_from_row(row?, index + 2)?);
        }

        tracing::debug!("Parsed {} zone table rows", records.len());
        Ok(records)
    }

    async fn transform(&self, records: Vec<ZoneRecord>) -> Result<ZoneMapResult> {
        let origins: BTreeSet<String> = self.config.origins().iter().cloned().collect();
        let entries = resolve_zones(&records, &origins)?;

        if entries.is_empty() {
            tracing::warn!(
                "No zone records matched the requested origins: {}",
                self.config.origins().join(", ")
            );
        }

        let csv_output = entries_to_csv(&entries)?;
        Ok(ZoneMapResult {
            entries,
            csv_output,
        })
    }

    async fn load(&self, result: ZoneMapResult) -> Result<String> {
        self.storage
            .write_file(CSV_FILENAME, result.csv_output.as_bytes())
            .await?;

        let summary = RunSummary::new(
            self.config.customer_name(),
            self.config.origins(),
            &result.entries,
        );
        let summary_json = serde_json::to_string_pretty(&summary)?;
        self.storage
            .write_file(SUMMARY_FILENAME, summary_json.as_bytes())
            .await?;

        tracing::debug!(
            "Wrote {} and {} for customer '{}'",
            CSV_FILENAME,
            SUMMARY_FILENAME,
            summary.customer
        );
        Ok(format!("{}/{}", self.config.output_path(), CSV_FILENAME))
    }
}
