use std::collections::{BTreeMap, HashMap};

use crate::data::model::CropTable;

use super::stats::Mean;

/// Average yield per year for one region. Years without any yield value keep
/// their slot with `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSeries {
    pub region: String,
    pub points: Vec<(i32, Option<f64>)>,
}

/// Region names with their row counts, most frequent first. Ties keep the
/// order in which regions were first encountered.
pub fn region_counts(table: &CropTable) -> Vec<(String, usize)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in table.iter().filter(|r| !r.region.is_empty()) {
        let slot = *slots.entry(r.region.as_str()).or_insert_with(|| {
            counts.push((r.region.clone(), 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    // stable: equal counts stay in encounter order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `n` most frequent regions.
pub fn top_regions(table: &CropTable, n: usize) -> Vec<String> {
    region_counts(table)
        .into_iter()
        .take(n)
        .map(|(region, _)| region)
        .collect()
}

/// One series per top region (in rank order), each holding the mean yield
/// per year, years ascending.
pub fn region_yield_series(table: &CropTable, n: usize) -> Vec<RegionSeries> {
    let top = top_regions(table, n);

    let mut groups: BTreeMap<(&str, i32), Mean> = BTreeMap::new();
    for r in table.iter().filter(|r| top.contains(&r.region)) {
        groups
            .entry((r.region.as_str(), r.year))
            .or_default()
            .push_opt(r.yield_mt_per_ha);
    }

    top.iter()
        .map(|region| RegionSeries {
            region: region.clone(),
            points: groups
                .range((region.as_str(), i32::MIN)..=(region.as_str(), i32::MAX))
                .map(|(&(_, year), mean)| (year, mean.value()))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn table_with(regions: &[&str]) -> CropTable {
        CropTable::new(regions.iter().map(|r| record(2010, "Corn", r, 1.0)).collect())
    }

    #[test]
    fn counts_rank_by_frequency_then_encounter_order() {
        let table = table_with(&["B", "A", "C", "A", "C", "D"]);
        let counts = region_counts(&table);
        assert_eq!(
            counts,
            vec![
                ("A".to_string(), 2),
                ("C".to_string(), 2),
                ("B".to_string(), 1),
                ("D".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_selection_never_drops_a_more_frequent_region() {
        let table = table_with(&["F", "A", "A", "B", "B", "B", "C", "D", "D", "E", "E", "G", "G", "G", "G"]);
        let counts = region_counts(&table);
        let top = top_regions(&table, 5);
        assert_eq!(top.len(), 5);
        let count_of = |name: &str| counts.iter().find(|(r, _)| r == name).map(|(_, c)| *c).unwrap();
        let min_kept = top.iter().map(|r| count_of(r)).min().unwrap();
        for (region, count) in &counts {
            if !top.contains(region) {
                assert!(*count <= min_kept);
            }
        }
        assert_eq!(top[0], "G");
    }

    #[test]
    fn series_average_per_year_and_skip_other_regions() {
        let table = CropTable::new(vec![
            record(2011, "Corn", "A", 4.0),
            record(2010, "Corn", "A", 1.0),
            record(2010, "Corn", "A", 3.0),
            record(2010, "Corn", "B", 7.0),
            record(2010, "Corn", "C", 9.0),
        ]);
        let series = region_yield_series(&table, 2);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].region, "A");
        assert_eq!(series[0].points, vec![(2010, Some(2.0)), (2011, Some(4.0))]);
        assert_eq!(series[1].region, "B");
        assert_eq!(series[1].points, vec![(2010, Some(7.0))]);
    }

    #[test]
    fn blank_regions_are_never_counted() {
        let table = table_with(&["", "", "", "", "A", "A", "B", ""]);
        let counts = region_counts(&table);
        assert_eq!(counts, vec![("A".to_string(), 2), ("B".to_string(), 1)]);

        let top = top_regions(&table, 5);
        assert_eq!(top, vec!["A".to_string(), "B".to_string()]);

        let series = region_yield_series(&table, 5);
        let names: Vec<&str> = series.iter().map(|s| s.region.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn empty_table_gives_no_series() {
        assert!(region_yield_series(&CropTable::default(), 5).is_empty());
    }
}
