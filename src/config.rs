// ---------------------------------------------------------------------------
// Analysis parameters (compile-time literals)
// ---------------------------------------------------------------------------

/// Name of the input table, looked up next to the program.
pub const DATA_FILE_NAME: &str = "crops.csv";

/// Chart window size in logical pixels (an 8 x 5 inch figure at 100 dpi).
pub const WINDOW_SIZE: [f32; 2] = [800.0, 500.0];

/// Every knob the four charts depend on.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Crop_Type value to keep.
    pub crop: String,
    /// First year kept (inclusive).
    pub start_year: i32,
    /// Last year kept (inclusive).
    pub end_year: i32,
    /// Number of most frequent regions drawn in the time series.
    pub top_regions: usize,
    /// Rows above this precipitation are left out of the scatter.
    pub precipitation_cap_mm: f64,
    /// Quantile of CO2 emissions used as the outlier cap.
    pub co2_quantile: f64,
    /// Number of equal-width CO2 bins.
    pub co2_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            crop: "Corn".to_string(),
            start_year: 2000,
            end_year: 2025,
            top_regions: 5,
            precipitation_cap_mm: 3000.0,
            co2_quantile: 0.99,
            co2_bins: 12,
        }
    }
}
