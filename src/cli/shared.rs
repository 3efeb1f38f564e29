use crate::cli::cli::{Action, App};
use crate::configuration::PlotConfig;
use crate::plotting::chart::{build_chart, log_peaks, summarize_peaks, PeakSummary, PlotError};
use crate::plotting::viewer;
use log::{debug, info};

pub fn load_config(config_file: Option<&str>) -> Result<PlotConfig, PlotError> {
    match config_file {
        Some(path) => {
            info!("Loading plot configuration from {}", path);
            Ok(PlotConfig::load(path)?)
        }
        None => {
            debug!("Using default plot configuration");
            Ok(PlotConfig::default())
        }
    }
}

pub fn show(config: PlotConfig) -> Result<(), PlotError> {
    let chart = build_chart(&config)?;
    log_peaks(&summarize_peaks(&chart)?);
    viewer::show(chart, config.window)
}

pub fn peaks(config: &PlotConfig) -> Result<Vec<PeakSummary>, PlotError> {
    let chart = build_chart(config)?;
    summarize_peaks(&chart)
}

pub fn run(app: App) -> Result<(), PlotError> {
    let config = load_config(app.config_file.as_deref())?;
    match app.action() {
        Action::Show => show(config),
        Action::Peaks => {
            log_peaks(&peaks(&config)?);
            Ok(())
        }
    }
}
