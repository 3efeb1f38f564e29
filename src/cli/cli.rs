use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct App {
    /// TOML file overriding the default plot settings.
    #[arg(short, long)]
    pub config_file: Option<String>,
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Action {
    /// Plot the spectrum in a window (default).
    Show,
    /// Log the peak wavelength of every curve without opening a window.
    Peaks,
}

impl App {
    pub fn action(&self) -> Action {
        self.action.clone().unwrap_or(Action::Show)
    }
}
