use crate::configuration::{LegendPosition, WindowConfig};
use crate::plotting::chart::{Chart, PlotError};
use crate::plotting::log_axis::{axis_label, log_grid_spacer};
use egui_plot::{Corner, Legend, Line, Plot, PlotBounds};
use log::{debug, info};

/// Maps data points to log10 space, dropping points a log scale cannot show.
pub fn to_log_points(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    points
        .iter()
        .filter(|[x, y]| x.is_finite() && y.is_finite() && *x > 0.0 && *y > 0.0)
        .map(|[x, y]| [x.log10(), y.log10()])
        .collect()
}

pub fn legend_corner(position: LegendPosition) -> Corner {
    match position {
        LegendPosition::LeftTop => Corner::LeftTop,
        LegendPosition::RightTop => Corner::RightTop,
        LegendPosition::LeftBottom => Corner::LeftBottom,
        LegendPosition::RightBottom => Corner::RightBottom,
    }
}

struct SpectrumViewer {
    chart: Chart,
    lines: Vec<(String, Vec<[f64; 2]>)>,
}

impl SpectrumViewer {
    fn new(chart: Chart) -> Self {
        let lines = chart
            .series
            .iter()
            .map(|series| {
                let points = to_log_points(&series.points);
                if points.len() < series.points.len() {
                    debug!(
                        "{}: skipped {} points outside the log domain",
                        series.label,
                        series.points.len() - points.len()
                    );
                }
                (series.label.clone(), points)
            })
            .collect();
        Self { chart, lines }
    }
}

impl SpectrumViewer {
    fn plot(&self) -> Plot<'static> {
        let x_ticks = self.chart.x_axis.ticks.clone();
        let y_ticks = self.chart.y_axis.ticks.clone();

        Plot::new("spectrum_plot")
            .legend(Legend::default().position(legend_corner(self.chart.legend_position)))
            .x_axis_label(self.chart.x_axis.title.clone())
            .y_axis_label(self.chart.y_axis.title.clone())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_grid_spacer(log_grid_spacer)
            .y_grid_spacer(log_grid_spacer)
            .x_axis_formatter(move |mark, _| axis_label(&x_ticks, mark.value))
            .y_axis_formatter(move |mark, _| axis_label(&y_ticks, mark.value))
            .label_formatter(|name, value| {
                format!(
                    "{}\nλ = {:.3} μm\nB = {:.3e}",
                    name,
                    10f64.powf(value.x),
                    10f64.powf(value.y)
                )
            })
    }

    fn draw(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.chart.title.as_str());
            });

            let (x_min, x_max) = self.chart.x_axis.log_bounds();
            let (y_min, y_max) = self.chart.y_axis.log_bounds();
            self.plot().show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
                for (label, points) in &self.lines {
                    plot_ui.line(
                        Line::new(points.clone())
                            .name(label)
                            .width(self.chart.line_width),
                    );
                }
            });
        });
    }
}

impl eframe::App for SpectrumViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw(ctx);
    }
}

/// Opens the chart in a native window and blocks until it is closed.
pub fn show(chart: Chart, window: WindowConfig) -> Result<(), PlotError> {
    info!(
        "Showing {} series in a {}x{} window",
        chart.series.len(),
        window.width,
        window.height
    );
    let title = chart.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_title(title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| {
            let app: Box<dyn eframe::App> = Box::new(SpectrumViewer::new(chart));
            Ok(app)
        }),
    )
    .map_err(|e| PlotError::Window(e.to_string()))
}
