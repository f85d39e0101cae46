//! Error types for the carbon footprint estimator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by factor lookups and footprint calculation.
///
/// All of these are fatal for the current calculation: no partial
/// [`CalculationResult`](crate::model::CalculationResult) is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    /// The country has no entry in the emission factor table.
    #[error("unknown country '{0}'")]
    UnknownCountry(String),

    /// The flight haul category is not one of Short, Medium, Long.
    #[error("unknown haul category '{0}' (expected Short, Medium or Long)")]
    UnknownHaulCategory(String),

    /// The heating fuel is not one of Electricity, LPG, Wood.
    #[error("unknown fuel type '{0}' (expected Electricity, LPG or Wood)")]
    UnknownFuelType(String),

    /// A numeric input was negative or not finite.
    #[error("invalid input for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Errors that can occur when loading inputs from disk.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read the inputs file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The inputs file is not valid JSON for the expected shape.
    #[error("invalid inputs file '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A slider value lies outside the range the calculator form offers.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A slider value falls between two steps of its slider.
    #[error("{field} must be a multiple of {step}, got {value}")]
    OffStep {
        field: &'static str,
        value: f64,
        step: f64,
    },
}

/// Errors that can occur when exporting history.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
