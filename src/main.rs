mod cli;
mod configuration;
mod plotting;
mod spectrum;

use clap::Parser;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("eframe", log::LevelFilter::Warn)
        .filter_module("egui_glow", log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let app = cli::cli::App::parse();
    if let Err(e) = cli::shared::run(app) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
