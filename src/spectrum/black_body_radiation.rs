use log::trace;

pub const PLANCK_CONSTANT: f64 = 6.62607015e-34; // J s
pub const SPEED_OF_LIGHT: f64 = 299792458.0; // m / s
pub const BOLTZMANN_CONSTANT: f64 = 1.380649e-23; // J / K

/// Wien's displacement constant b in m K, so that lambda_peak = b / T.
pub const WIEN_DISPLACEMENT_CONSTANT: f64 = 2.897771955e-3;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SpectrumError {
    #[error("Wavelength must be positive and finite, got {0} m")]
    InvalidWavelength(f64),
    #[error("Temperature must be positive and finite, got {0} K")]
    InvalidTemperature(f64),
}

fn validate_temperature(temperature: f64) -> Result<(), SpectrumError> {
    if !(temperature.is_finite() && temperature > 0.0) {
        return Err(SpectrumError::InvalidTemperature(temperature));
    }
    Ok(())
}

/// Spectral radiance of a black body in W m^-2 sr^-1 m^-1.
///
/// Planck law is written using meters, so `lambda` is expected in meters and
/// `temperature` in Kelvin. Very short wavelengths underflow to zero.
pub fn planck_spectral_radiance(lambda: f64, temperature: f64) -> Result<f64, SpectrumError> {
    if !(lambda.is_finite() && lambda > 0.0) {
        return Err(SpectrumError::InvalidWavelength(lambda));
    }
    validate_temperature(temperature)?;

    let a = 2.0 * PLANCK_CONSTANT * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
    let b = PLANCK_CONSTANT * SPEED_OF_LIGHT / (lambda * BOLTZMANN_CONSTANT * temperature);
    let denominator_exp = b.exp_m1();
    if denominator_exp.is_infinite() {
        // lambda^5 may underflow to zero here as well, which would yield NaN.
        trace!(
            "Radiance underflow at lambda = {} m, temperature = {} K",
            lambda,
            temperature
        );
        return Ok(0.0);
    }
    Ok(a / (lambda.powi(5) * denominator_exp))
}

pub fn spectral_radiance_curve(
    wavelengths: &[f64],
    temperature: f64,
) -> Result<Vec<f64>, SpectrumError> {
    validate_temperature(temperature)?;
    wavelengths
        .iter()
        .map(|&lambda| planck_spectral_radiance(lambda, temperature))
        .collect()
}

pub fn wien_peak_wavelength(temperature: f64) -> Result<f64, SpectrumError> {
    validate_temperature(temperature)?;
    Ok(WIEN_DISPLACEMENT_CONSTANT / temperature)
}

/// Returns the sampled maximum of a curve as (wavelength, radiance).
pub fn peak_of_curve(wavelengths: &[f64], radiance: &[f64]) -> Option<(f64, f64)> {
    if wavelengths.len() != radiance.len() {
        return None;
    }
    wavelengths
        .iter()
        .zip(radiance.iter())
        .filter(|(_, value)| value.is_finite())
        .fold(None, |best: Option<(f64, f64)>, (&lambda, &value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((lambda, value)),
        })
}

#[cfg(test)]
mod tests {
    use crate::spectrum::black_body_radiation::{
        peak_of_curve, planck_spectral_radiance, spectral_radiance_curve, wien_peak_wavelength,
        SpectrumError, BOLTZMANN_CONSTANT, PLANCK_CONSTANT, SPEED_OF_LIGHT,
    };
    use crate::spectrum::sampling::{
        default_wavelengths, micrometers_to_meters, DEFAULT_TEMPERATURES,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const MICROMETER: f64 = 1e-6;

    #[test]
    fn test_solar_radiance_at_half_micrometer() {
        let radiance = planck_spectral_radiance(0.5 * MICROMETER, 5900.0).unwrap();
        assert!(radiance.is_finite());
        assert!(radiance >= 1e13 && radiance < 1e14, "got {}", radiance);
        assert_relative_eq!(radiance, 2.925e13, max_relative = 1e-2);
    }

    #[test]
    fn test_radiance_increases_with_temperature() {
        let lambda = 0.5 * MICROMETER;
        let mut temperatures = DEFAULT_TEMPERATURES.to_vec();
        temperatures.sort_by(|a, b| a.partial_cmp(b).unwrap());

        for pair in temperatures.windows(2) {
            let (low, high) = (pair[0], pair[1]);
            assert!(PLANCK_CONSTANT * SPEED_OF_LIGHT / (lambda * BOLTZMANN_CONSTANT * high) > 4.0);
            let radiance_low = planck_spectral_radiance(lambda, low).unwrap();
            let radiance_high = planck_spectral_radiance(lambda, high).unwrap();
            assert!(
                radiance_high > radiance_low,
                "{} K: {}, {} K: {}",
                high,
                radiance_high,
                low,
                radiance_low
            );
        }
    }

    #[test]
    fn test_peak_follows_wien_displacement() {
        let wavelengths_um = default_wavelengths();
        let wavelengths_m = micrometers_to_meters(&wavelengths_um);

        let mut previous_peak: Option<(f64, f64)> = None;
        let mut temperatures = DEFAULT_TEMPERATURES.to_vec();
        temperatures.sort_by(|a, b| a.partial_cmp(b).unwrap());

        for temperature in temperatures {
            let curve = spectral_radiance_curve(&wavelengths_m, temperature).unwrap();
            let (peak_um, _) = peak_of_curve(&wavelengths_um, &curve).unwrap();

            assert_relative_eq!(peak_um * temperature, 2897.77, max_relative = 1e-2);
            if let Some((previous_temperature, previous_peak_um)) = previous_peak {
                assert!(temperature > previous_temperature);
                assert!(peak_um < previous_peak_um);
            }
            previous_peak = Some((temperature, peak_um));
        }
    }

    #[test]
    fn test_curve_matches_sample_count() {
        let wavelengths_m = micrometers_to_meters(&default_wavelengths());
        for temperature in DEFAULT_TEMPERATURES {
            let curve = spectral_radiance_curve(&wavelengths_m, temperature).unwrap();
            assert_eq!(curve.len(), 1000);
            assert!(curve.iter().all(|value| value.is_finite() && *value >= 0.0));
        }
    }

    #[test]
    fn test_evaluation_is_bit_identical() {
        let first = planck_spectral_radiance(2.5 * MICROMETER, 1000.0).unwrap();
        for _ in 0..10 {
            let again = planck_spectral_radiance(2.5 * MICROMETER, 1000.0).unwrap();
            assert_eq!(first.to_bits(), again.to_bits());
        }
    }

    #[test]
    fn test_tiny_wavelength_underflows_to_zero() {
        assert_eq!(planck_spectral_radiance(1e-9, 300.0), Ok(0.0));
        assert_eq!(planck_spectral_radiance(1e-80, 300.0), Ok(0.0));
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert_eq!(
            planck_spectral_radiance(0.0, 300.0),
            Err(SpectrumError::InvalidWavelength(0.0))
        );
        assert_eq!(
            planck_spectral_radiance(-1e-6, 300.0),
            Err(SpectrumError::InvalidWavelength(-1e-6))
        );
        assert_eq!(
            planck_spectral_radiance(1e-6, -5.0),
            Err(SpectrumError::InvalidTemperature(-5.0))
        );
        assert!(planck_spectral_radiance(f64::NAN, 300.0).is_err());
        assert!(planck_spectral_radiance(1e-6, f64::INFINITY).is_err());
        assert_eq!(
            spectral_radiance_curve(&[1e-6, 0.0], 300.0),
            Err(SpectrumError::InvalidWavelength(0.0))
        );
        assert_eq!(
            spectral_radiance_curve(&[], 0.0),
            Err(SpectrumError::InvalidTemperature(0.0))
        );
    }

    #[test]
    fn test_wien_peak_wavelength() {
        assert_abs_diff_eq!(
            wien_peak_wavelength(5900.0).unwrap(),
            4.9115e-7,
            epsilon = 1e-10
        );
        assert!(wien_peak_wavelength(0.0).is_err());
    }

    #[test]
    fn test_peak_of_curve_edge_cases() {
        assert_eq!(peak_of_curve(&[], &[]), None);
        assert_eq!(peak_of_curve(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(
            peak_of_curve(&[1.0, 2.0, 3.0], &[1.0, 5.0, 2.0]),
            Some((2.0, 5.0))
        );
    }
}
