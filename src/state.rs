use crate::analysis::Chart;

// ---------------------------------------------------------------------------
// Per-window state
// ---------------------------------------------------------------------------

/// Everything one chart window shows, independent of rendering.
pub struct ChartView {
    /// The chart drawn in the central panel.
    pub chart: Chart,

    /// Zero-based position in the run.
    pub index: usize,

    /// Number of charts in the run.
    pub total: usize,

    /// Crop, year range and yield summary of the filtered table.
    pub caption: String,
}

impl ChartView {
    /// "Chart 2 of 4".
    pub fn position_label(&self) -> String {
        format!("Chart {} of {}", self.index + 1, self.total)
    }

    /// Hint shown while more charts are waiting.
    pub fn continue_hint(&self) -> &'static str {
        if self.index + 1 < self.total {
            "Close this window to continue"
        } else {
            "Close this window to finish"
        }
    }
}
