use std::path::PathBuf;

use clap::Parser;

use crate::data::aggregate::{DEFAULT_TOP_COUNTRIES, DEFAULT_TOP_PRODUCERS};

pub const DEFAULT_DATASET: &str = "datos_generados/cannes_dataset_unificado.xlsx";

#[derive(Parser, Debug, Clone)]
#[command(name = "cannes-explorer")]
#[command(about = "International participation at the Cannes Film Festival")]
#[command(version)]
pub struct Config {
    /// Festival spreadsheet (.xlsx, .csv, .json or .parquet)
    #[arg(default_value = DEFAULT_DATASET, env = "CANNES_DATASET")]
    pub dataset: PathBuf,

    /// Number of countries in the geographic top chart
    #[arg(long, default_value_t = DEFAULT_TOP_COUNTRIES, env = "CANNES_TOP_COUNTRIES")]
    pub top_countries: usize,

    /// Number of producers listed per country
    #[arg(long, default_value_t = DEFAULT_TOP_PRODUCERS, env = "CANNES_TOP_PRODUCERS")]
    pub top_producers: usize,

    /// Width of the default year window, ending at the latest year
    #[arg(long, default_value_t = 10, env = "CANNES_RECENT_YEARS")]
    pub recent_years: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            top_countries: DEFAULT_TOP_COUNTRIES,
            top_producers: DEFAULT_TOP_PRODUCERS,
            recent_years: 10,
        }
    }
}
