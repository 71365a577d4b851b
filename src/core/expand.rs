use crate::domain::model::{ExpandedEntry, ZoneRecord};
use crate::utils::error::{Result, ZoneEtlError};

/// Fixed-width 3-digit form of a destination ZIP3.
pub fn zero_pad_zip3(zip3: u16) -> String {
    format!("{:03}", zip3)
}

/// Expand each record's inclusive `[dest_zip_min, dest_zip_max]` range into
/// one entry per destination ZIP3, copying zone and origin unchanged.
///
/// Emission follows input record order, ascending within each range. Nothing
/// is deduplicated here: overlapping ranges (even from the same origin) all
/// emit, and the resolver settles them.
///
/// Every range is checked before anything is emitted, so an inverted range
/// fails with `InvalidRangeError` and no partial output.
pub fn expand_ranges(records: &[ZoneRecord]) -> Result<Vec<ExpandedEntry>> {
    for record in records {
        if record.dest_zip_min > record.dest_zip_max {
            return Err(ZoneEtlError::InvalidRangeError {
                origin: record.origin.clone(),
                min: record.dest_zip_min,
                max: record.dest_zip_max,
            });
        }
    }

    let mut entries = Vec::new();
    for record in records {
        for zip3 in record.dest_zip_min..=record.dest_zip_max {
            entries.push(ExpandedEntry {
                dest_zip3: zero_pad_zip3(zip3),
                zone: record.zone,
                origin: record.origin.clone(),
            });
        }
    }

    Ok(entries)
}
