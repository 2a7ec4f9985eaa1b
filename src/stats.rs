//! Grouping and aggregation queries over the loaded name table.
//!
//! Every function here is a pure query: it takes the read-only `NameTable`
//! (and sometimes a parameter) and returns data for the plot helpers in
//! `crate::report::plots` to render.
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data_handling::{NameTable, Sex};
use crate::error::StatsError;

/// Which character of a name the letter-distribution report looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterPosition {
    First,
    Last,
}

impl LetterPosition {
    /// Axis label used by the letter-distribution chart.
    pub fn label(&self) -> &'static str {
        match self {
            LetterPosition::First => "first",
            LetterPosition::Last => "last",
        }
    }

    fn pick(&self, name: &str) -> Option<char> {
        let mut chars = name.chars();
        match self {
            LetterPosition::First => chars.next(),
            LetterPosition::Last => chars.next_back(),
        }
    }
}

impl FromStr for LetterPosition {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(LetterPosition::First),
            "last" => Ok(LetterPosition::Last),
            other => Err(StatsError::InvalidPosition(other.to_string())),
        }
    }
}

/// Normalized letter frequencies for one sampled year.
#[derive(Debug, Clone)]
pub struct LetterFrequencies {
    pub year: u16,
    /// One entry per letter a-z; sums to 1.0 when the year has any rows.
    pub freqs: [f64; 26],
}

/// Sum of counts grouped by (sex, year).
pub fn birth_totals(table: &NameTable) -> BTreeMap<(Sex, u16), u64> {
    let mut totals = BTreeMap::new();
    for record in table.records() {
        *totals.entry((record.sex, record.year)).or_insert(0u64) += u64::from(record.number);
    }
    totals
}

/// Per-name totals across all years, the `n` largest first.
///
/// Equal totals are ordered alphabetically so the result is deterministic.
pub fn top_names(table: &NameTable, n: usize) -> Vec<(String, u64)> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for record in table.records() {
        *totals.entry(record.name.as_str()).or_insert(0) += u64::from(record.number);
    }

    let mut ranked: Vec<(String, u64)> = totals
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

/// Yearly totals for one name over the table's full year range, summed over
/// both sexes, zero where the name is absent.
pub fn name_series(table: &NameTable, name: &str) -> Vec<u64> {
    let mut by_year: HashMap<u16, u64> = HashMap::new();
    for record in table.records() {
        if record.name == name {
            *by_year.entry(record.year).or_insert(0) += u64::from(record.number);
        }
    }
    table
        .years()
        .map(|year| by_year.get(&year).copied().unwrap_or(0))
        .collect()
}

/// The most frequent male and female name of each decade window, deduplicated
/// in selection order.
///
/// Windows start at the table's first year and advance by `stride`; each
/// window covers `start..=start + stride` inclusive at both ends, the same
/// overlapping slices the analysis has always used. Ties on the window
/// maximum go to the alphabetically first name.
pub fn decade_representatives(table: &NameTable, stride: u16) -> Vec<String> {
    assert!(stride > 0, "stride must be positive");

    let mut selected: Vec<String> = Vec::new();
    let mut start = table.first_year();
    while start < table.last_year() {
        let window_end = start.saturating_add(stride);

        let mut window: BTreeMap<(Sex, &str), u64> = BTreeMap::new();
        for record in table.records() {
            if record.year >= start && record.year <= window_end {
                *window.entry((record.sex, record.name.as_str())).or_insert(0) +=
                    u64::from(record.number);
            }
        }

        for sex in [Sex::Male, Sex::Female] {
            // BTreeMap iterates names in sorted order, so keeping only
            // strictly greater totals breaks ties alphabetically.
            let mut best: Option<(&str, u64)> = None;
            for (&(record_sex, name), &total) in &window {
                if record_sex != sex {
                    continue;
                }
                if best.map_or(true, |(_, best_total)| total > best_total) {
                    best = Some((name, total));
                }
            }
            if let Some((name, _)) = best {
                if !selected.iter().any(|s| s == name) {
                    selected.push(name.to_string());
                }
            }
        }

        start += stride;
    }

    log::debug!("decade representatives: {:?}", selected);
    selected
}

/// Naming-diversity measure: for each year, the minimal number of top names
/// whose counts together reach at least half of the year's total births.
///
/// Years without any rows yield zero. Names are summed over both sexes
/// before ranking, so "half the year" means half of all registered births.
pub fn half_names(table: &NameTable) -> Vec<usize> {
    let mut per_year: HashMap<u16, HashMap<&str, u64>> = HashMap::new();
    for record in table.records() {
        *per_year
            .entry(record.year)
            .or_default()
            .entry(record.name.as_str())
            .or_insert(0) += u64::from(record.number);
    }

    table
        .years()
        .map(|year| {
            let Some(name_totals) = per_year.get(&year) else {
                return 0;
            };
            let total: u64 = name_totals.values().sum();
            if total == 0 {
                return 0;
            }

            let mut counts: Vec<u64> = name_totals.values().copied().collect();
            counts.sort_unstable_by(|a, b| b.cmp(a));

            let mut cumulative = 0u64;
            let mut needed = 0usize;
            for count in counts {
                cumulative += count;
                needed += 1;
                // integer form of cumulative >= total / 2
                if cumulative * 2 >= total {
                    break;
                }
            }
            needed
        })
        .collect()
}

/// Count-weighted frequency of each letter a-z at `position`, for each of the
/// sampled years, normalized so a year's 26 frequencies sum to one.
///
/// The comparison is case-insensitive and letters absent in a year keep a
/// zero entry. Sampled years with no rows (or no ASCII-alphabetic letters at
/// the position) are skipped with a warning rather than producing NaNs.
pub fn letter_distribution(
    table: &NameTable,
    position: LetterPosition,
    sample_years: &[u16],
) -> Vec<LetterFrequencies> {
    let mut out = Vec::with_capacity(sample_years.len());

    for &year in sample_years {
        let mut counts = [0u64; 26];
        for record in table.records() {
            if record.year != year {
                continue;
            }
            let Some(letter) = position.pick(&record.name) else {
                continue;
            };
            let letter = letter.to_ascii_lowercase();
            if letter.is_ascii_lowercase() {
                counts[(letter as u8 - b'a') as usize] += u64::from(record.number);
            }
        }

        let total: u64 = counts.iter().sum();
        if total == 0 {
            log::warn!("no rows for sampled year {}, skipping", year);
            continue;
        }

        let mut freqs = [0f64; 26];
        for (freq, count) in freqs.iter_mut().zip(counts.iter()) {
            *freq = *count as f64 / total as f64;
        }
        out.push(LetterFrequencies { year, freqs });
    }

    out
}
