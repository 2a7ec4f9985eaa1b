//! SSA `yob<YEAR>.txt` CSV reader.
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::data_handling::{NameRecord, NameTable, Sex};

/// Read one year's file into records, normalizing the sex code and stamping
/// every row with `year`.
///
/// The source format is comma-separated with three unlabeled columns
/// (name, `M`/`F` code, count) and no header row. Any missing file, short
/// row, unknown sex code, or unparsable count is an error.
pub fn read_year_file<P: AsRef<Path>>(dir: P, year: u16) -> Result<Vec<NameRecord>> {
    let path = dir.as_ref().join(format!("yob{}.txt", year));
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("Failed to open year file: {}", path.display()))?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("Failed to read row {} of {}", row_idx + 1, path.display()))?;

        if record.len() != 3 {
            return Err(anyhow!(
                "Expected 3 columns at row {} of {}, found {}",
                row_idx + 1,
                path.display(),
                record.len()
            ));
        }

        let name = record
            .get(0)
            .ok_or_else(|| anyhow!("Missing name at row {} of {}", row_idx + 1, path.display()))?
            .trim();
        if name.is_empty() {
            return Err(anyhow!(
                "Empty name at row {} of {}",
                row_idx + 1,
                path.display()
            ));
        }

        let code = record
            .get(1)
            .ok_or_else(|| anyhow!("Missing sex code at row {} of {}", row_idx + 1, path.display()))?
            .trim();
        let sex = Sex::from_code(code).ok_or_else(|| {
            anyhow!(
                "Unknown sex code '{}' at row {} of {}",
                code,
                row_idx + 1,
                path.display()
            )
        })?;

        let number = record
            .get(2)
            .ok_or_else(|| anyhow!("Missing count at row {} of {}", row_idx + 1, path.display()))?
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Invalid count at row {} of {}", row_idx + 1, path.display()))?;

        records.push(NameRecord {
            name: name.to_string(),
            sex,
            number,
            year,
        });
    }

    log::debug!("read {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Load every year in `first_year..=last_year` (most recent first, matching
/// the historical load order) and concatenate into one table.
///
/// The first failing year aborts the whole load; there is no
/// partial-dataset fallback.
pub fn load_table<P: AsRef<Path>>(dir: P, first_year: u16, last_year: u16) -> Result<NameTable> {
    let mut records = Vec::new();
    for year in (first_year..=last_year).rev() {
        let mut year_records = read_year_file(&dir, year)
            .with_context(|| format!("Failed to load year {}", year))?;
        records.append(&mut year_records);
    }

    log::info!(
        "loaded {} records for {}-{}",
        records.len(),
        first_year,
        last_year
    );
    Ok(NameTable::new(records, first_year, last_year))
}
