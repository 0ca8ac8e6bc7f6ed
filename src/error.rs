use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Error, Debug)]
pub enum MatchError {
    /// The caller supplied input no answer can be computed from.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A coordinate column that is not a float. `row` is 1-based and excludes the header.
    #[error("row {row}: could not parse {column} value {value:?}")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl MatchError {
    /// Machine-readable tag used in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::InvalidInput(_) => "invalid_input",
            MatchError::Csv(_) | MatchError::Parse { .. } => "malformed_input",
        }
    }
}
