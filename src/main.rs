mod analysis;
mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};

use analysis::stats::yield_summary;
use analysis::Stage;
use config::{AnalysisConfig, DATA_FILE_NAME};
use data::filter::select_crop_years;
use data::loader::{load_file, locate_dataset};
use state::ChartView;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run().inspect_err(|e| log::error!("{e:#}"))
}

fn run() -> Result<()> {
    let config = AnalysisConfig::default();

    let path = locate_dataset(DATA_FILE_NAME)?;
    log::info!("Reading {}", path.display());
    let table = load_file(&path).with_context(|| format!("loading {}", path.display()))?;
    log::info!(
        "Loaded {} rows covering {} countries",
        table.len(),
        table.countries().len()
    );

    let crop_table = select_crop_years(&table, &config.crop, config.start_year, config.end_year);
    if crop_table.is_empty() {
        log::warn!(
            "No {} rows between {} and {}; charts will be empty",
            config.crop,
            config.start_year,
            config.end_year
        );
    }

    let summary = yield_summary(&crop_table);
    let caption = format!(
        "{} {}-{}: {summary}",
        config.crop, config.start_year, config.end_year
    );
    log::info!("{caption}");

    let total = Stage::ALL.len();
    for (index, stage) in Stage::ALL.into_iter().enumerate() {
        let chart = stage.build(&crop_table, &config);
        log::info!("Showing chart {}/{}: {}", index + 1, total, chart.title);
        app::show_chart(ChartView {
            chart,
            index,
            total,
            caption: caption.clone(),
        })?;
    }

    Ok(())
}
