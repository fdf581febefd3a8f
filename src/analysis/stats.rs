use std::fmt;

use crate::data::model::CropTable;

// ---------------------------------------------------------------------------
// Running mean
// ---------------------------------------------------------------------------

/// Accumulates a sum and a count; a mean of nothing is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Push only present values, mirroring how missing cells are skipped.
    pub fn push_opt(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.push(v);
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

// ---------------------------------------------------------------------------
// Percentile
// ---------------------------------------------------------------------------

/// The `q`-quantile (0..=1) of `values`, interpolating linearly between the
/// two nearest order statistics. `None` for an empty slice.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

// ---------------------------------------------------------------------------
// Yield summary
// ---------------------------------------------------------------------------

/// Headline numbers for a table's yield column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSummary {
    pub rows: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn yield_summary(table: &CropTable) -> YieldSummary {
    let mut mean = Mean::default();
    let mut min: Option<f64> = None;
    let mut max: Option<f64> = None;
    for y in table.iter().filter_map(|r| r.yield_mt_per_ha) {
        mean.push(y);
        min = Some(min.map_or(y, |m| m.min(y)));
        max = Some(max.map_or(y, |m| m.max(y)));
    }
    YieldSummary {
        rows: table.len(),
        mean: mean.value(),
        min,
        max,
    }
}

impl fmt::Display for YieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mean, self.min, self.max) {
            (Some(mean), Some(min), Some(max)) => write!(
                f,
                "{} rows, yield mean {mean:.2} / min {min:.2} / max {max:.2} MT/HA",
                self.rows
            ),
            _ => write!(f, "{} rows, no yield values", self.rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(Mean::default().value(), None);
        let mut m = Mean::default();
        m.push(1.0);
        m.push_opt(None);
        m.push_opt(Some(3.0));
        assert_eq!(m.value(), Some(2.0));
        assert_eq!(m.count(), 2);
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let values = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&values, 1.0), Some(4.0));
        assert_eq!(percentile(&values, 0.5), Some(2.5));
        // rank = 3 * 0.99 = 2.97 → 3 + 0.97 * (4 - 3)
        let p99 = percentile(&values, 0.99).unwrap();
        assert!((p99 - 3.97).abs() < 1e-12);
        assert_eq!(percentile(&[], 0.5), None);
        assert_eq!(percentile(&[7.0], 0.99), Some(7.0));
    }

    #[test]
    fn summary_skips_missing_yields() {
        let mut missing = record(2012, "Corn", "A", 0.0);
        missing.yield_mt_per_ha = None;
        let table = CropTable::new(vec![
            record(2010, "Corn", "A", 2.0),
            record(2011, "Corn", "A", 4.0),
            missing,
        ]);
        let s = yield_summary(&table);
        assert_eq!(s.rows, 3);
        assert_eq!(s.mean, Some(3.0));
        assert_eq!(s.min, Some(2.0));
        assert_eq!(s.max, Some(4.0));
        assert_eq!(yield_summary(&CropTable::default()).mean, None);
    }
}
