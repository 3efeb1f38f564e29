use crate::spectrum::sampling::{
    log_space, DEFAULT_MAX_WAVELENGTH_EXPONENT, DEFAULT_MIN_WAVELENGTH_EXPONENT,
    DEFAULT_NUM_SAMPLES, DEFAULT_TEMPERATURES,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings of the spectrum plot. Every top-level field is optional and falls
/// back to the default figure. An axis table replaces the whole default axis,
/// so `title`, `min` and `max` are required inside it.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Base-10 exponent of the shortest sampled wavelength in micrometers.
    pub min_wavelength_exponent: f64,
    /// Base-10 exponent of the longest sampled wavelength in micrometers.
    pub max_wavelength_exponent: f64,
    /// Number of logarithmically spaced wavelength samples.
    pub num_samples: usize,
    /// Temperatures in Kelvin, one curve each, drawn in this order.
    pub temperatures: Vec<f64>,
    /// Title shown above the chart.
    pub title: String,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub window: WindowConfig,
    /// Stroke width of the curves in points.
    pub line_width: f32,
    pub legend_position: LegendPosition,
}

/// A logarithmic axis.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AxisConfig {
    pub title: String,
    /// Lower visible limit, in data units.
    pub min: f64,
    /// Upper visible limit, in data units.
    pub max: f64,
    /// Labeled tick positions. When empty, every decade is labeled.
    #[serde(default)]
    pub ticks: Vec<TickConfig>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TickConfig {
    pub value: f64,
    pub label: String,
}

/// Inner size of the plot window in logical pixels.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Corner of the chart the legend is anchored to.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    LeftTop,
    #[default]
    RightTop,
    LeftBottom,
    RightBottom,
}

fn ticks(entries: &[(f64, &str)]) -> Vec<TickConfig> {
    entries
        .iter()
        .map(|&(value, label)| TickConfig {
            value,
            label: label.to_string(),
        })
        .collect()
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            min_wavelength_exponent: DEFAULT_MIN_WAVELENGTH_EXPONENT,
            max_wavelength_exponent: DEFAULT_MAX_WAVELENGTH_EXPONENT,
            num_samples: DEFAULT_NUM_SAMPLES,
            temperatures: DEFAULT_TEMPERATURES.to_vec(),
            title: String::from("Blackbody radiation spectrum (log scale plot)"),
            x_axis: AxisConfig {
                title: String::from("Wavelength (μm)"),
                min: 0.1,
                max: 1e3,
                ticks: ticks(&[
                    (0.1, "0.1"),
                    (1.0, "1"),
                    (10.0, "10"),
                    (100.0, "100"),
                    (1000.0, "1000"),
                ]),
            },
            y_axis: AxisConfig {
                title: String::from("Spectral radiance (W⋅m⁻²⋅sr⁻¹⋅m⁻¹)"),
                min: 1e4,
                max: 1e15,
                ticks: ticks(&[
                    (1e4, "10⁴"),
                    (1e7, "10⁷"),
                    (1e11, "10¹¹"),
                    (1e15, "10¹⁵"),
                ]),
            },
            window: WindowConfig::default(),
            line_width: 1.5,
            legend_position: LegendPosition::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

impl AxisConfig {
    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{} limits must be positive and finite for a log scale (got min={}, max={}).",
                name, self.min, self.max
            )));
        }
        if self.max <= self.min {
            return Err(ConfigError::Invalid(format!(
                "{} requires max > min (got min={}, max={}).",
                name, self.min, self.max
            )));
        }
        if let Some(tick) = self
            .ticks
            .iter()
            .find(|tick| !(tick.value.is_finite() && tick.value > 0.0))
        {
            return Err(ConfigError::Invalid(format!(
                "{} tick '{}' must have a positive value (got {}).",
                name, tick.label, tick.value
            )));
        }
        Ok(())
    }
}

impl PlotConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: PlotConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.temperatures.is_empty() {
            return Err(ConfigError::Invalid(String::from(
                "At least one temperature is required.",
            )));
        }
        if let Some(temperature) = self
            .temperatures
            .iter()
            .find(|t| !(t.is_finite() && **t > 0.0))
        {
            return Err(ConfigError::Invalid(format!(
                "Temperatures must be positive (got {}).",
                temperature
            )));
        }
        if self.num_samples < 2 {
            return Err(ConfigError::Invalid(format!(
                "num_samples must be at least 2 (got {}).",
                self.num_samples
            )));
        }
        if !(self.min_wavelength_exponent.is_finite()
            && self.max_wavelength_exponent.is_finite()
            && self.min_wavelength_exponent < self.max_wavelength_exponent)
        {
            return Err(ConfigError::Invalid(format!(
                "Wavelength exponents must satisfy min < max (got min={}, max={}).",
                self.min_wavelength_exponent, self.max_wavelength_exponent
            )));
        }
        self.x_axis.validate("x_axis")?;
        self.y_axis.validate("y_axis")?;
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Window size must be positive (got {}x{}).",
                self.window.width, self.window.height
            )));
        }
        if !(self.line_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "line_width must be positive (got {}).",
                self.line_width
            )));
        }
        Ok(())
    }

    /// Wavelength samples in micrometers.
    pub fn wavelengths(&self) -> Vec<f64> {
        log_space(
            self.min_wavelength_exponent,
            self.max_wavelength_exponent,
            self.num_samples,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::configuration::{ConfigError, LegendPosition, PlotConfig};

    #[test]
    fn test_default_is_valid() {
        let config = PlotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.wavelengths().len(), 1000);
        assert_eq!(config.temperatures.len(), 6);
        assert_eq!(config.x_axis.ticks.len(), 5);
        assert_eq!(config.y_axis.ticks[3].label, "10¹⁵");
    }

    #[test]
    fn test_empty_document_yields_default() {
        let config = PlotConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlotConfig::default());
    }

    #[test]
    fn test_partial_axis_table_is_rejected() {
        let toml_str = r#"
            [[x_axis.ticks]]
            value = 1.0
            label = "one"
        "#;
        assert!(matches!(
            PlotConfig::from_toml_str(toml_str),
            Err(ConfigError::Parse(_))
        ));

        let toml_str = r#"
            [y_axis]
            min = 1.0
            max = 1e16
        "#;
        assert!(matches!(
            PlotConfig::from_toml_str(toml_str),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_deserialize() {
        let toml_str = r#"
            temperatures = [6000.0, 300.0]
            num_samples = 200
            line_width = 2.0
            legend_position = "LeftBottom"

            [y_axis]
            title = "Radiance"
            min = 1.0
            max = 1e16
        "#;
        let config = PlotConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.temperatures, vec![6000.0, 300.0]);
        assert_eq!(config.num_samples, 200);
        assert_eq!(config.line_width, 2.0);
        assert_eq!(config.legend_position, LegendPosition::LeftBottom);
        assert_eq!(config.y_axis.title, "Radiance");
        assert!(config.y_axis.ticks.is_empty());
        assert_eq!(config.x_axis, PlotConfig::default().x_axis);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(matches!(
            PlotConfig::from_toml_str("colour = \"red\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_errors() {
        let invalid_documents = [
            "temperatures = []",
            "temperatures = [5900.0, -1.0]",
            "num_samples = 1",
            "min_wavelength_exponent = 3.0\nmax_wavelength_exponent = -1.0",
            "line_width = 0.0",
            "[window]\nwidth = 0.0\nheight = 400.0",
            "[x_axis]\ntitle = \"x\"\nmin = 0.0\nmax = 10.0",
            "[y_axis]\ntitle = \"y\"\nmin = 100.0\nmax = 10.0",
            "[y_axis]\ntitle = \"y\"\nmin = 1.0\nmax = 10.0\n[[y_axis.ticks]]\nvalue = -1.0\nlabel = \"bad\"",
        ];
        for document in invalid_documents {
            let result = PlotConfig::from_toml_str(document);
            assert!(
                matches!(result, Err(ConfigError::Invalid(_))),
                "expected validation error for {:?}, got {:?}",
                document,
                result
            );
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            PlotConfig::load("does/not/exist.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
