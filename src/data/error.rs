use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load-time errors (terminal for the session)
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("required column '{column}' is missing from the dataset")]
    MissingColumn { column: String },

    #[error("row {row}: year value '{value}' is not an integer")]
    MalformedYear { row: usize, value: String },

    #[error("unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("failed to read dataset: {0:#}")]
    Read(anyhow::Error),
}

// ---------------------------------------------------------------------------
// View-level warnings (non-terminal, rendered as informational messages)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoDataWarning {
    #[error("Select at least one country to see the temporal evolution.")]
    NoCountriesSelected,

    #[error("The dataset has no producer column (productoras_normalizadas / productoras_consolidadas).")]
    NoProducerColumn,

    #[error("None of the selected films has country data.")]
    NoCountryData,

    #[error("No producer data for films from {country} in the selected period.")]
    NoProducersForCountry { country: String },

    #[error("No films match the current filters.")]
    NoMatchingRecords,
}
