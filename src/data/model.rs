use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// CropRecord – one row of crops.csv
// ---------------------------------------------------------------------------

/// Columns that must be present in the header of the input file.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Year",
    "Country",
    "Region",
    "Crop_Type",
    "Crop_Yield_MT_per_HA",
    "Total_Precipitation_mm",
    "Irrigation_Access_%",
    "CO2_Emissions_MT",
];

/// A single observation. Numeric measurements are optional: an empty cell or
/// a literal `NaN` is a missing value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CropRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Crop_Type")]
    pub crop_type: String,
    #[serde(rename = "Crop_Yield_MT_per_HA")]
    pub yield_mt_per_ha: Option<f64>,
    #[serde(rename = "Total_Precipitation_mm")]
    pub precipitation_mm: Option<f64>,
    #[serde(rename = "Irrigation_Access_%")]
    pub irrigation_pct: Option<f64>,
    #[serde(rename = "CO2_Emissions_MT")]
    pub co2_emissions_mt: Option<f64>,
}

impl CropRecord {
    /// Fold `NaN` cells into `None` so downstream code has one notion of "missing".
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.yield_mt_per_ha,
            &mut self.precipitation_mm,
            &mut self.irrigation_pct,
            &mut self.co2_emissions_mt,
        ] {
            if field.is_some_and(f64::is_nan) {
                *field = None;
            }
        }
        self
    }
}

// ---------------------------------------------------------------------------
// CropTable – an immutable ordered set of records
// ---------------------------------------------------------------------------

/// Rows in source-file order. Every derivation builds a new table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropTable {
    pub records: Vec<CropRecord>,
}

impl CropTable {
    pub fn new(records: Vec<CropRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CropRecord> {
        self.records.iter()
    }

    /// Distinct non-empty country names, sorted.
    pub fn countries(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|r| r.country.as_str())
            .filter(|c| !c.is_empty())
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn record(year: i32, crop: &str, region: &str, yield_mt: f64) -> CropRecord {
    CropRecord {
        year,
        country: "Testland".to_string(),
        region: region.to_string(),
        crop_type: crop.to_string(),
        yield_mt_per_ha: Some(yield_mt),
        precipitation_mm: None,
        irrigation_pct: None,
        co2_emissions_mt: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_turns_nan_into_missing() {
        let mut r = record(2010, "Corn", "A", 5.0);
        r.irrigation_pct = Some(f64::NAN);
        r.co2_emissions_mt = Some(12.5);
        let r = r.normalized();
        assert_eq!(r.irrigation_pct, None);
        assert_eq!(r.co2_emissions_mt, Some(12.5));
        assert_eq!(r.yield_mt_per_ha, Some(5.0));
    }

    #[test]
    fn countries_are_distinct_and_skip_blanks() {
        let mut a = record(2010, "Corn", "A", 1.0);
        a.country = "India".into();
        let mut b = record(2011, "Corn", "B", 2.0);
        b.country = "India".into();
        let mut c = record(2011, "Rice", "C", 2.0);
        c.country = String::new();
        let table = CropTable::new(vec![a, b, c]);
        assert_eq!(table.countries().into_iter().collect::<Vec<_>>(), vec!["India"]);
    }
}
