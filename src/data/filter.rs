use super::model::CropTable;

// ---------------------------------------------------------------------------
// Crop / year selection
// ---------------------------------------------------------------------------

/// Keep rows whose Crop_Type equals `crop` exactly and whose Year lies in
/// `start_year..=end_year`. The source table is left untouched.
///
/// No match is not an error: the result is simply empty.
pub fn select_crop_years(table: &CropTable, crop: &str, start_year: i32, end_year: i32) -> CropTable {
    let years = start_year..=end_year;
    CropTable::new(
        table
            .iter()
            .filter(|r| r.crop_type == crop && years.contains(&r.year))
            .cloned()
            .collect(),
    )
}
