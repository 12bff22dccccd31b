use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Lädt die Aktienliste vom Backend und zeigt sie als Tabelle an", long_about = None)]
pub struct Cli {
    /// Backend address, e.g. http://127.0.0.1:8000 (overrides the config file).
    #[arg(long, env = "AKTIEN_BASE_URL")]
    pub base_url: Option<String>,

    /// JSON config file; defaults to config.json or config/config.json when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How the table is rendered.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Write the rendered table to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Load once and exit instead of waiting for Enter.
    #[arg(long)]
    pub once: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Aligned text table.
    Table,
    /// `<table id="stocksTable">` markup.
    Html,
}
