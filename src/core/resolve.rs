use crate::core::expand::expand_ranges;
use crate::domain::model::{ExpandedEntry, ResolvedZoneEntry, ZoneRecord};
use crate::utils::error::Result;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// Minimum-zone accumulator for one destination ZIP3.
struct ZoneGroup {
    min_zone: u32,
    origins: BTreeSet<String>,
}

/// Resolve the minimum zone per destination ZIP3 and merge the origins that
/// achieve it.
///
/// Business rule: minimum zone wins, and ALL origins tied at that minimum are
/// listed, sorted lexicographically and joined with ", ". An origin that
/// reaches the minimum through several overlapping ranges is listed once.
///
/// BTreeMap/BTreeSet keep the output independent of input ordering, so the
/// same multiset of entries always yields byte-identical rows.
pub fn resolve_min_zones(entries: Vec<ExpandedEntry>) -> Vec<ResolvedZoneEntry> {
    let mut groups: BTreeMap<String, ZoneGroup> = BTreeMap::new();

    for entry in entries {
        match groups.entry(entry.dest_zip3) {
            Entry::Vacant(slot) => {
                slot.insert(ZoneGroup {
                    min_zone: entry.zone,
                    origins: BTreeSet::from([entry.origin]),
                });
            }
            Entry::Occupied(mut slot) => {
                let group = slot.get_mut();
                if entry.zone < group.min_zone {
                    group.min_zone = entry.zone;
                    group.origins.clear();
                    group.origins.insert(entry.origin);
                } else if entry.zone == group.min_zone {
                    group.origins.insert(entry.origin);
                }
            }
        }
    }

    groups
        .into_iter()
        .map(|(dest_zip3, group)| ResolvedZoneEntry {
            dest_zip3,
            min_zone: group.min_zone,
            contributing_origins: group
                .origins
                .into_iter()
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

/// Full core pipeline: restrict the zone table to the selected origins,
/// expand ranges, resolve minimum zones.
///
/// An origin set that matches no records yields an empty result, not an
/// error; "no data" messaging belongs to the calling layer.
pub fn resolve_zones(
    records: &[ZoneRecord],
    origins: &BTreeSet<String>,
) -> Result<Vec<ResolvedZoneEntry>> {
    let selected: Vec<ZoneRecord> = records
        .iter()
        .filter(|r| origins.contains(&r.origin))
        .cloned()
        .collect();

    let expanded = expand_ranges(&selected)?;
    Ok(resolve_min_zones(expanded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ZoneEtlError;

    fn entry(zip3: &str, zone: u32, origin: &str) -> ExpandedEntry {
        ExpandedEntry {
            dest_zip3: zip3.to_string(),
            zone,
            origin: origin.to_string(),
        }
    }

    fn record(origin: &str, min: u16, max: u16, zone: u32) -> ZoneRecord {
        ZoneRecord {
            origin: origin.to_string(),
            dest_zip_min: min,
            dest_zip_max: max,
            zone,
        }
    }

    fn origins(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_minimum_zone_wins() {
        let resolved = resolve_min_zones(vec![entry("100", 5, "010"), entry("100", 3, "020")]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].dest_zip3, "100");
        assert_eq!(resolved[0].min_zone, 3);
        // Origin "010" lost the minimum and is excluded.
        assert_eq!(resolved[0].contributing_origins, "020");
    }

    #[test]
    fn test_all_tied_origins_listed_sorted() {
        let resolved = resolve_min_zones(vec![
            entry("100", 4, "020"),
            entry("100", 4, "010"),
            entry("100", 4, "005"),
        ]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].min_zone, 4);
        assert_eq!(resolved[0].contributing_origins, "005, 010, 020");
    }

    #[test]
    fn test_single_contributor_has_no_separator() {
        let resolved = resolve_min_zones(vec![entry("415", 7, "915")]);

        assert_eq!(resolved[0].contributing_origins, "915");
    }

    #[test]
    fn test_duplicate_origin_at_minimum_collapses() {
        // Same origin reaching the minimum through two overlapping ranges.
        let resolved = resolve_min_zones(vec![
            entry("100", 2, "010"),
            entry("100", 2, "010"),
            entry("100", 2, "020"),
        ]);

        assert_eq!(resolved[0].contributing_origins, "010, 020");
    }

    #[test]
    fn test_lower_zone_displaces_previous_origins() {
        let resolved = resolve_min_zones(vec![
            entry("100", 4, "010"),
            entry("100", 4, "020"),
            entry("100", 2, "030"),
        ]);

        assert_eq!(resolved[0].min_zone, 2);
        assert_eq!(resolved[0].contributing_origins, "030");
    }

    #[test]
    fn test_deterministic_under_permutation() {
        let forward = vec![
            entry("100", 5, "010"),
            entry("100", 3, "020"),
            entry("101", 3, "030"),
            entry("101", 3, "020"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(resolve_min_zones(forward), resolve_min_zones(reversed));
    }

    #[test]
    fn test_resolving_resolved_input_is_idempotent() {
        let first = resolve_min_zones(vec![entry("100", 5, "010"), entry("101", 2, "020")]);

        let again = resolve_min_zones(
            first
                .iter()
                .map(|r| entry(&r.dest_zip3, r.min_zone, &r.contributing_origins))
                .collect(),
        );

        assert_eq!(first, again);
    }

    #[test]
    fn test_output_sorted_by_zip3() {
        let resolved = resolve_min_zones(vec![
            entry("300", 1, "010"),
            entry("100", 1, "010"),
            entry("200", 1, "010"),
        ]);

        let zips: Vec<&str> = resolved.iter().map(|r| r.dest_zip3.as_str()).collect();
        assert_eq!(zips, vec!["100", "200", "300"]);
    }

    #[test]
    fn test_resolve_zones_filters_to_selected_origins() {
        let records = vec![
            record("010", 100, 101, 5),
            record("020", 100, 100, 3),
            record("030", 100, 100, 1),
        ];

        let resolved = resolve_zones(&records, &origins(&["010", "020"])).unwrap();

        // Origin "030" was not selected, so its zone-1 record never competes.
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].dest_zip3, "100");
        assert_eq!(resolved[0].min_zone, 3);
        assert_eq!(resolved[0].contributing_origins, "020");
        assert_eq!(resolved[1].dest_zip3, "101");
        assert_eq!(resolved[1].min_zone, 5);
        assert_eq!(resolved[1].contributing_origins, "010");
    }

    #[test]
    fn test_resolve_zones_same_origin_overlap() {
        let records = vec![record("010", 100, 102, 5), record("010", 101, 101, 2)];

        let resolved = resolve_zones(&records, &origins(&["010"])).unwrap();

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].dest_zip3, "100");
        assert_eq!(resolved[0].min_zone, 5);
        assert_eq!(resolved[1].dest_zip3, "101");
        assert_eq!(resolved[1].min_zone, 2);
        assert_eq!(resolved[1].contributing_origins, "010");
        assert_eq!(resolved[2].dest_zip3, "102");
        assert_eq!(resolved[2].min_zone, 5);
    }

    #[test]
    fn test_resolve_zones_no_matching_origin_is_empty_not_error() {
        let records = vec![record("010", 100, 101, 5)];

        let resolved = resolve_zones(&records, &origins(&["999"])).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_zones_propagates_invalid_range() {
        let records = vec![record("010", 105, 100, 1)];

        let result = resolve_zones(&records, &origins(&["010"]));
        assert!(matches!(
            result,
            Err(ZoneEtlError::InvalidRangeError { .. })
        ));
    }
}
