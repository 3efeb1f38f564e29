use crate::plotting::chart::Tick;
use egui_plot::{GridInput, GridMark};

/// Visual weight of minor grid lines relative to decade lines.
pub const MINOR_WEIGHT: f64 = 0.25;
const TICK_TOLERANCE: f64 = 1e-6;

/// Grid marks of a log10 axis: one major mark per decade and minor marks at
/// 2..9 times each decade. `min` and `max` are given in log10 space.
///
/// egui_plot fades and drops lines by `step_size` in screen space, so the
/// step sizes are a share of the visible span and not the data distance
/// between marks. Decades get the full span, minor marks `MINOR_WEIGHT` of it.
pub fn log_grid_marks(min: f64, max: f64) -> Vec<GridMark> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }

    let major_step = max - min;
    let minor_step = major_step * MINOR_WEIGHT;
    let mut marks = vec![];
    let first_decade = min.floor() as i32;
    let last_decade = max.ceil() as i32;
    for decade in first_decade..=last_decade {
        let major = decade as f64;
        if major >= min && major <= max {
            marks.push(GridMark {
                value: major,
                step_size: major_step,
            });
        }
        for k in 2..=9 {
            let minor = major + (k as f64).log10();
            if minor >= min && minor <= max {
                marks.push(GridMark {
                    value: minor,
                    step_size: minor_step,
                });
            }
        }
    }
    marks
}

pub fn log_grid_spacer(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    log_grid_marks(min, max)
}

fn superscript(digit: char) -> char {
    match digit {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '-' => '⁻',
        other => other,
    }
}

/// Formats a power of ten as `10ⁿ`.
pub fn decade_label(exponent: i32) -> String {
    let mut label = String::from("10");
    label.extend(exponent.to_string().chars().map(superscript));
    label
}

/// Label of the custom tick at `value` (log10 space), empty if there is none.
pub fn tick_label(ticks: &[Tick], value: f64) -> String {
    ticks
        .iter()
        .find(|tick| (tick.value.log10() - value).abs() < TICK_TOLERANCE)
        .map(|tick| tick.label.clone())
        .unwrap_or_default()
}

/// Axis text for a grid mark. Without custom ticks every decade is labeled.
pub fn axis_label(ticks: &[Tick], value: f64) -> String {
    if !ticks.is_empty() {
        return tick_label(ticks, value);
    }
    let decade = value.round();
    if (value - decade).abs() < TICK_TOLERANCE {
        decade_label(decade as i32)
    } else {
        String::new()
    }
}
