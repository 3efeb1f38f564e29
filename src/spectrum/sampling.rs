pub const DEFAULT_MIN_WAVELENGTH_EXPONENT: f64 = -1.0; // 10^-1 um
pub const DEFAULT_MAX_WAVELENGTH_EXPONENT: f64 = 3.0; // 10^3 um
pub const DEFAULT_NUM_SAMPLES: usize = 1000;
pub const DEFAULT_TEMPERATURES: [f64; 6] = [5900.0, 4000.0, 3000.0, 1000.0, 500.0, 300.0]; // K

const UM_TO_M: f64 = 1e-6;

/// `count` values whose base-10 exponents are evenly spaced over
/// `[start_exponent, end_exponent]`, both ends included.
pub fn log_space(start_exponent: f64, end_exponent: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![10f64.powf(start_exponent)],
        _ => {
            let step = (end_exponent - start_exponent) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    // Pin the last exponent so the range end is hit exactly.
                    let exponent = if i == count - 1 {
                        end_exponent
                    } else {
                        start_exponent + i as f64 * step
                    };
                    10f64.powf(exponent)
                })
                .collect()
        }
    }
}

/// Wavelength samples in micrometers.
#[allow(dead_code)] // For testing
pub fn default_wavelengths() -> Vec<f64> {
    log_space(
        DEFAULT_MIN_WAVELENGTH_EXPONENT,
        DEFAULT_MAX_WAVELENGTH_EXPONENT,
        DEFAULT_NUM_SAMPLES,
    )
}

pub fn micrometers_to_meters(wavelengths: &[f64]) -> Vec<f64> {
    wavelengths.iter().map(|lambda| lambda * UM_TO_M).collect()
}
