use crate::data::model::CropTable;

use super::stats::Mean;

/// A labelled slice of irrigation access percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrigationBin {
    pub lower: f64,
    pub upper: f64,
    pub label: &'static str,
}

impl IrrigationBin {
    pub fn contains(&self, pct: f64) -> bool {
        pct >= self.lower && pct < self.upper
    }
}

/// Fixed 20% bins in display order, half-open `[lower, upper)`. The last bin
/// has no upper bound, so anything from 80 up (above 100 included) lands
/// there; values below 0 land in the first bin.
pub const IRRIGATION_BINS: [IrrigationBin; 5] = [
    IrrigationBin { lower: 0.0, upper: 20.0, label: "0-20" },
    IrrigationBin { lower: 20.0, upper: 40.0, label: "20-40" },
    IrrigationBin { lower: 40.0, upper: 60.0, label: "40-60" },
    IrrigationBin { lower: 60.0, upper: 80.0, label: "60-80" },
    IrrigationBin { lower: 80.0, upper: f64::INFINITY, label: "80-100" },
];

/// Index into [`IRRIGATION_BINS`] for a percentage.
pub fn classify(pct: f64) -> usize {
    IRRIGATION_BINS
        .iter()
        .position(|bin| bin.contains(pct))
        .unwrap_or(0)
}

/// Mean yield of one irrigation bin; `None` when no row fell in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinMean {
    pub label: &'static str,
    pub mean: Option<f64>,
    pub count: usize,
}

/// Mean yield per irrigation bin, always five entries in bin order. Rows
/// without an irrigation value are left out.
pub fn irrigation_bin_means(table: &CropTable) -> Vec<BinMean> {
    let mut means = [Mean::default(); IRRIGATION_BINS.len()];
    for r in table.iter() {
        if let Some(pct) = r.irrigation_pct {
            means[classify(pct)].push_opt(r.yield_mt_per_ha);
        }
    }
    IRRIGATION_BINS
        .iter()
        .zip(means)
        .map(|(bin, mean)| BinMean {
            label: bin.label,
            mean: mean.value(),
            count: mean.count(),
        })
        .collect()
}
