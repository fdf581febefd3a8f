use crate::data::model::CropTable;

/// `[precipitation_mm, yield]` for every row at or below `cap_mm`.
///
/// Rows above the cap, or with no precipitation, are dropped rather than
/// moved to the edge. Rows without a yield have nothing to draw.
pub fn precipitation_scatter(table: &CropTable, cap_mm: f64) -> Vec<[f64; 2]> {
    table
        .iter()
        .filter_map(|r| match (r.precipitation_mm, r.yield_mt_per_ha) {
            (Some(p), Some(y)) if p <= cap_mm => Some([p, y]),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{record, CropRecord};

    fn rain(mm: Option<f64>, yield_mt: f64) -> CropRecord {
        let mut r = record(2010, "Corn", "A", yield_mt);
        r.precipitation_mm = mm;
        r
    }

    #[test]
    fn clips_above_cap_inclusive() {
        let table = CropTable::new(vec![
            rain(Some(2999.9), 1.0),
            rain(Some(3000.0), 2.0),
            rain(Some(3000.1), 3.0),
            rain(None, 4.0),
        ]);
        assert_eq!(
            precipitation_scatter(&table, 3000.0),
            vec![[2999.9, 1.0], [3000.0, 2.0]]
        );
    }

    #[test]
    fn raising_the_cap_never_drops_a_point() {
        let table = CropTable::new(
            [100.0, 900.0, 2500.0, 3100.0, 4800.0]
                .into_iter()
                .map(|mm| rain(Some(mm), 1.0))
                .collect(),
        );
        let mut previous: Vec<[f64; 2]> = Vec::new();
        for cap in [0.0, 500.0, 1000.0, 3000.0, 5000.0] {
            let kept = precipitation_scatter(&table, cap);
            assert!(previous.iter().all(|p| kept.contains(p)));
            previous = kept;
        }
        assert_eq!(previous.len(), 5);
    }
}
