use std::error::Error;
use std::fmt;

/// Custom error type for aggregation failures
#[derive(Debug, PartialEq, Eq)]
pub enum StatsError {
    InvalidPosition(String), // the rejected position argument
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatsError::InvalidPosition(got) => {
                write!(f, "position should be \"first\" or \"last\" only, got '{}'", got)
            }
        }
    }
}

impl Error for StatsError {}
