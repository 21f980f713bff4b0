use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a benchmark csv or writing its plot.
/// Rows and columns are numbered from 1, as a text editor shows them.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("could not open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: missing field {column}, expected at least 2 fields")]
    MissingField { row: usize, column: usize },

    #[error("row {row}, field {column}: could not parse {value:?} as integer: {source}")]
    ParseInt {
        row: usize,
        column: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("could not write plot to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
