use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse zone-table record: one origin serving one inclusive destination
/// ZIP3 range at a given service zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    /// Zero-padded 3-character origin code.
    pub origin: String,
    pub dest_zip_min: u16,
    pub dest_zip_max: u16,
    /// Service-zone tier, lower is cheaper.
    pub zone: u32,
}

/// One destination ZIP3 covered by a record's range. Produced by the range
/// expander and consumed immediately by the resolver, never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedEntry {
    pub dest_zip3: String,
    pub zone: u32,
    pub origin: String,
}

/// Final row: the minimum zone reachable for a destination ZIP3 plus every
/// origin that achieves it. Serde renames match the exported CSV columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedZoneEntry {
    #[serde(rename = "zip3")]
    pub dest_zip3: String,
    #[serde(rename = "Zone")]
    pub min_zone: u32,
    /// Distinct origins at the minimum zone, lexicographically sorted and
    /// joined with ", ".
    #[serde(rename = "OriginWithMinZone")]
    pub contributing_origins: String,
}

/// Transform stage output handed to the load stage.
#[derive(Debug, Clone)]
pub struct ZoneMapResult {
    pub entries: Vec<ResolvedZoneEntry>,
    pub csv_output: String,
}

/// Run metadata written next to the CSV so downstream consumers can tell
/// which request produced the table.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub customer: String,
    pub origins: Vec<String>,
    pub destination_count: usize,
    /// Destination count per resolved minimum zone.
    pub zone_counts: BTreeMap<u32, usize>,
    pub generated_at: DateTime<Utc>,
}

impl RunSummary {
    pub fn new(customer: &str, origins: &[String], entries: &[ResolvedZoneEntry]) -> Self {
        let mut zone_counts: BTreeMap<u32, usize> = BTreeMap::new();
        for entry in entries {
            *zone_counts.entry(entry.min_zone).or_default() += 1;
        }

        Self {
            customer: customer.to_string(),
            origins: origins.to_vec(),
            destination_count: entries.len(),
            zone_counts,
            generated_at: Utc::now(),
        }
    }
}
