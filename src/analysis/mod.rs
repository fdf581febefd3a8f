//! Aggregation stages. Each one reads the filtered table and produces the
//! data for a single chart; none of them depends on another's output.

pub mod emissions;
pub mod irrigation;
pub mod precipitation;
pub mod regions;
pub mod stats;

use crate::config::AnalysisConfig;
use crate::data::model::CropTable;

use emissions::EmissionBin;
use irrigation::BinMean;
use regions::RegionSeries;

/// The four charts, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RegionTrend,
    PrecipitationScatter,
    IrrigationBars,
    EmissionsLine,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::RegionTrend,
        Stage::PrecipitationScatter,
        Stage::IrrigationBars,
        Stage::EmissionsLine,
    ];

    /// Run this stage's aggregation.
    pub fn build(self, table: &CropTable, config: &AnalysisConfig) -> Chart {
        let data = match self {
            Stage::RegionTrend => {
                let series = regions::region_yield_series(table, config.top_regions);
                log::debug!(
                    "top regions: {:?}",
                    series.iter().map(|s| s.region.as_str()).collect::<Vec<_>>()
                );
                ChartData::RegionTrend(series)
            }
            Stage::PrecipitationScatter => {
                let points = precipitation::precipitation_scatter(table, config.precipitation_cap_mm);
                log::debug!("{} scatter points at or below {} mm", points.len(), config.precipitation_cap_mm);
                ChartData::PrecipitationScatter(points)
            }
            Stage::IrrigationBars => {
                let bins = irrigation::irrigation_bin_means(table);
                log::debug!(
                    "irrigation bin rows: {:?}",
                    bins.iter().map(|b| (b.label, b.count)).collect::<Vec<_>>()
                );
                ChartData::IrrigationBars(bins)
            }
            Stage::EmissionsLine => {
                let bins = emissions::co2_bins(table, config.co2_quantile, config.co2_bins);
                log::debug!(
                    "CO2 bins populated: {}/{} ({} rows)",
                    bins.iter().filter(|b| b.mean.is_some()).count(),
                    bins.len(),
                    bins.iter().map(|b| b.count).sum::<usize>()
                );
                ChartData::EmissionsLine(bins)
            }
        };
        Chart {
            title: self.title(config),
            x_label: self.x_label(),
            y_label: self.y_label(),
            data,
        }
    }

    pub fn title(self, config: &AnalysisConfig) -> String {
        let crop = &config.crop;
        match self {
            Stage::RegionTrend => format!("{crop} Yield Over Time (Top {} Regions)", config.top_regions),
            Stage::PrecipitationScatter => format!("{crop} Yield vs Total Precipitation"),
            Stage::IrrigationBars => format!("{crop} Yield by Irrigation Access (20% bins)"),
            Stage::EmissionsLine => format!("{crop} Yield vs CO2 Emissions"),
        }
    }

    pub fn x_label(self) -> &'static str {
        match self {
            Stage::RegionTrend => "Year",
            Stage::PrecipitationScatter => "Total Precipitation (mm)",
            Stage::IrrigationBars => "Irrigation Access (%)",
            Stage::EmissionsLine => "CO2 Emissions (MT)",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Stage::PrecipitationScatter => "Crop Yield (MT/HA)",
            _ => "Average Crop Yield (MT/HA)",
        }
    }
}

/// What a chart draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    RegionTrend(Vec<RegionSeries>),
    PrecipitationScatter(Vec<[f64; 2]>),
    IrrigationBars(Vec<BinMean>),
    EmissionsLine(Vec<EmissionBin>),
}

/// A chart ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub data: ChartData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::select_crop_years;
    use crate::data::model::record;

    #[test]
    fn titles_follow_the_configured_crop() {
        let config = AnalysisConfig::default();
        assert_eq!(Stage::RegionTrend.title(&config), "Corn Yield Over Time (Top 5 Regions)");
        assert_eq!(Stage::IrrigationBars.title(&config), "Corn Yield by Irrigation Access (20% bins)");
        assert_eq!(Stage::EmissionsLine.x_label(), "CO2 Emissions (MT)");
    }

    #[test]
    fn empty_table_builds_empty_charts() {
        let config = AnalysisConfig::default();
        let table = select_crop_years(
            &CropTable::new(vec![record(2010, "Wheat", "A", 9.0)]),
            &config.crop,
            config.start_year,
            config.end_year,
        );
        for stage in Stage::ALL {
            let chart = stage.build(&table, &config);
            match chart.data {
                ChartData::RegionTrend(series) => assert!(series.is_empty()),
                ChartData::PrecipitationScatter(points) => assert!(points.is_empty()),
                ChartData::IrrigationBars(bins) => {
                    assert_eq!(bins.len(), 5);
                    assert!(bins.iter().all(|b| b.mean.is_none()));
                }
                ChartData::EmissionsLine(bins) => assert!(bins.is_empty()),
            }
        }
    }
}
