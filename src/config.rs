use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Central configuration for an analysis run.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RunConfig {
    /// Directory holding the per-year `yob<YEAR>.txt` files.
    pub data_dir: PathBuf,
    /// First calendar year to load (inclusive).
    pub first_year: u16,
    /// Last calendar year to load (inclusive).
    pub last_year: u16,
    /// How many names the popularity chart keeps.
    pub top_names: usize,
    /// Stride between decade-window start years.
    pub decade_stride: u16,
    /// Years sampled by the letter-distribution report.
    pub letter_sample_years: Vec<u16>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            data_dir: PathBuf::from("babynames"),
            first_year: 1880,
            last_year: 2010,
            top_names: 20,
            decade_stride: 13,
            letter_sample_years: vec![1900, 1925, 1950, 1975],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_the_full_census_range() {
        let config = RunConfig::default();
        assert_eq!(config.first_year, 1880);
        assert_eq!(config.last_year, 2010);
        assert_eq!(config.top_names, 20);
        assert_eq!(config.letter_sample_years, vec![1900, 1925, 1950, 1975]);
    }
}
