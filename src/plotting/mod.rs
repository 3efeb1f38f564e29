pub mod chart;
pub mod log_axis;
pub mod viewer;
