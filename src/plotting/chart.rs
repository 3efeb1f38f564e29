use crate::configuration::{AxisConfig, ConfigError, LegendPosition, PlotConfig};
use crate::spectrum::black_body_radiation::{
    peak_of_curve, spectral_radiance_curve, wien_peak_wavelength, SpectrumError,
};
use crate::spectrum::sampling::micrometers_to_meters;
use log::{debug, info};

const M_TO_UM: f64 = 1e6;

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("Spectrum error: {0}")]
    Spectrum(#[from] SpectrumError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Could not open plot window: {0}")]
    Window(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// A base-10 logarithmic axis with fixed limits.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub title: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn log_bounds(&self) -> (f64, f64) {
        (self.min.log10(), self.max.log10())
    }
}

impl From<&AxisConfig> for Axis {
    fn from(config: &AxisConfig) -> Self {
        Self {
            title: config.title.clone(),
            min: config.min,
            max: config.max,
            ticks: config
                .ticks
                .iter()
                .map(|tick| Tick {
                    value: tick.value,
                    label: tick.label.clone(),
                })
                .collect(),
        }
    }
}

/// One radiance curve: x in micrometers, y in W m^-2 sr^-1 m^-1.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub temperature: f64,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub line_width: f32,
    pub legend_position: LegendPosition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeakSummary {
    pub label: String,
    pub temperature: f64,
    pub peak_radiance: f64,
    /// Wavelength of the largest sample, in micrometers.
    pub sampled_peak: f64,
    /// Wavelength predicted by Wien's displacement law, in micrometers.
    pub wien_peak: f64,
}

pub fn series_label(temperature: f64) -> String {
    format!("{}[K]", temperature)
}

pub fn build_chart(config: &PlotConfig) -> Result<Chart, PlotError> {
    config.validate()?;

    let wavelengths = config.wavelengths();
    let wavelengths_m = micrometers_to_meters(&wavelengths);
    debug!(
        "Sampling {} wavelengths between {} and {} um",
        wavelengths.len(),
        wavelengths.first().copied().unwrap_or_default(),
        wavelengths.last().copied().unwrap_or_default()
    );

    let mut series = Vec::with_capacity(config.temperatures.len());
    for &temperature in &config.temperatures {
        let radiance = spectral_radiance_curve(&wavelengths_m, temperature)?;
        let points = wavelengths
            .iter()
            .zip(radiance.iter())
            .map(|(&lambda, &value)| [lambda, value])
            .collect();
        let label = series_label(temperature);
        debug!("Adding series {}", label);
        series.push(Series {
            label,
            temperature,
            points,
        });
    }

    Ok(Chart {
        title: config.title.clone(),
        x_axis: Axis::from(&config.x_axis),
        y_axis: Axis::from(&config.y_axis),
        series,
        line_width: config.line_width,
        legend_position: config.legend_position,
    })
}

pub fn summarize_peaks(chart: &Chart) -> Result<Vec<PeakSummary>, PlotError> {
    let mut summaries = Vec::with_capacity(chart.series.len());
    for series in &chart.series {
        let (wavelengths, radiance): (Vec<f64>, Vec<f64>) =
            series.points.iter().map(|p| (p[0], p[1])).unzip();
        let Some((sampled_peak, peak_radiance)) = peak_of_curve(&wavelengths, &radiance) else {
            continue;
        };
        let wien_peak = wien_peak_wavelength(series.temperature)? * M_TO_UM;
        summaries.push(PeakSummary {
            label: series.label.clone(),
            temperature: series.temperature,
            peak_radiance,
            sampled_peak,
            wien_peak,
        });
    }
    Ok(summaries)
}

pub fn log_peaks(summaries: &[PeakSummary]) {
    for summary in summaries {
        info!(
            "{}: peak {:.4e} at {:.3} um (Wien: {:.3} um), lambda*T = {:.1} um K",
            summary.label,
            summary.peak_radiance,
            summary.sampled_peak,
            summary.wien_peak,
            summary.sampled_peak * summary.temperature
        );
    }
}
