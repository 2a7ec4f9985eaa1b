//! Core data structures for the loaded name-frequency table.
//!
//! This module defines `Sex`, `NameRecord` and `NameTable`. The table is
//! built once by the loader and treated as read-only by every reporting
//! function; see `crate::stats` for the aggregation queries over it.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sex category, normalized from the single-letter source codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Decode the raw source code (`F` / `M`). Returns `None` for anything else.
    pub fn from_code(code: &str) -> Option<Sex> {
        match code {
            "F" => Some(Sex::Female),
            "M" => Some(Sex::Male),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "Female"),
            Sex::Male => write!(f, "Male"),
        }
    }
}

/// One row of the table: a (name, sex, year) cell and its registered count.
///
/// Invariant: for a given (year, sex, name) there is exactly one record,
/// because each source file carries one row per name/sex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub sex: Sex,
    pub number: u32,
    pub year: u16,
}

/// The full dataset: every year's records concatenated into one table.
#[derive(Debug, Clone)]
pub struct NameTable {
    records: Vec<NameRecord>,
    first_year: u16,
    last_year: u16,
}

impl NameTable {
    pub fn new(records: Vec<NameRecord>, first_year: u16, last_year: u16) -> Self {
        NameTable {
            records,
            first_year,
            last_year,
        }
    }

    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_year(&self) -> u16 {
        self.first_year
    }

    pub fn last_year(&self) -> u16 {
        self.last_year
    }

    /// Ascending iterator over every year the table covers, populated or not.
    pub fn years(&self) -> impl Iterator<Item = u16> {
        self.first_year..=self.last_year
    }

    pub fn log_summary(&self) {
        log::info!(
            "table covers {}-{}: {} rows ({} female, {} male)",
            self.first_year,
            self.last_year,
            self.records.len(),
            self.records.iter().filter(|r| r.sex == Sex::Female).count(),
            self.records.iter().filter(|r| r.sex == Sex::Male).count(),
        );
    }
}
