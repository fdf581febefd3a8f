use crate::data::model::CropTable;

use super::stats::{percentile, Mean};

/// One equal-width CO2 interval with the mean yield of its rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionBin {
    pub left: f64,
    pub right: f64,
    pub mean: Option<f64>,
    pub count: usize,
}

impl EmissionBin {
    pub fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// `n + 1` equally spaced edges from `min` to `max`. The last edge is pinned
/// to `max` so the bins cover the range exactly. A zero-width range is
/// widened by 0.1% on each side first.
pub fn bin_edges(min: f64, max: f64, n: usize) -> Vec<f64> {
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        let pad = if min == 0.0 { 0.001 } else { min.abs() * 0.001 };
        (min - pad, max + pad)
    };
    let width = (hi - lo) / n as f64;
    let mut edges: Vec<f64> = (0..n).map(|i| lo + width * i as f64).collect();
    edges.push(hi);
    edges
}

/// Bin index for `value` given `edges`. Intervals are `(left, right]`, the
/// first one closed on the left as well.
pub fn bin_index(value: f64, edges: &[f64]) -> usize {
    let last = edges.len().saturating_sub(2);
    edges[1..].partition_point(|&e| e < value).min(last)
}

/// Mean yield over `n` equal-width CO2 bins, ascending.
///
/// Rows missing CO2 or yield are dropped, then rows above the `quantile`
/// of CO2 are dropped, and the bins span the remaining min..max. Bins with
/// no rows are kept with `mean == None`. No rows, no bins.
pub fn co2_bins(table: &CropTable, quantile: f64, n: usize) -> Vec<EmissionBin> {
    let rows: Vec<(f64, f64)> = table
        .iter()
        .filter_map(|r| Some((r.co2_emissions_mt?, r.yield_mt_per_ha?)))
        .collect();

    let co2: Vec<f64> = rows.iter().map(|&(c, _)| c).collect();
    let Some(cap) = percentile(&co2, quantile) else {
        return Vec::new();
    };
    log::debug!("CO2 cap at q={quantile}: {cap:.3} MT");

    let kept: Vec<(f64, f64)> = rows.into_iter().filter(|&(c, _)| c <= cap).collect();
    if kept.is_empty() || n == 0 {
        return Vec::new();
    }

    let min = kept.iter().map(|&(c, _)| c).fold(f64::INFINITY, f64::min);
    let max = kept.iter().map(|&(c, _)| c).fold(f64::NEG_INFINITY, f64::max);
    let edges = bin_edges(min, max, n);

    let mut means = vec![Mean::default(); n];
    for &(c, y) in &kept {
        means[bin_index(c, &edges)].push(y);
    }

    edges
        .windows(2)
        .zip(means)
        .map(|(edge, mean)| EmissionBin {
            left: edge[0],
            right: edge[1],
            mean: mean.value(),
            count: mean.count(),
        })
        .collect()
}
