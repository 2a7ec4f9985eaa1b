//! Integration tests for the aggregation queries.

use name_trends::data_handling::{NameRecord, NameTable, Sex};
use name_trends::error::StatsError;
use name_trends::stats::{
    birth_totals, decade_representatives, half_names, letter_distribution, name_series, top_names,
    LetterPosition,
};

fn rec(name: &str, sex: Sex, number: u32, year: u16) -> NameRecord {
    NameRecord {
        name: name.to_string(),
        sex,
        number,
        year,
    }
}

// ---------------------------------------------------------------------------
// Birth totals
// ---------------------------------------------------------------------------

#[test]
fn birth_totals_groups_by_sex_and_year() {
    let table = NameTable::new(
        vec![
            rec("Mary", Sex::Female, 100, 1880),
            rec("John", Sex::Male, 120, 1880),
        ],
        1880,
        1880,
    );

    let totals = birth_totals(&table);
    assert_eq!(totals.get(&(Sex::Female, 1880)), Some(&100));
    assert_eq!(totals.get(&(Sex::Male, 1880)), Some(&120));
    assert_eq!(totals.len(), 2);
}

#[test]
fn birth_totals_sum_matches_raw_rows() {
    let table = NameTable::new(
        vec![
            rec("Mary", Sex::Female, 100, 1880),
            rec("Anna", Sex::Female, 40, 1880),
            rec("John", Sex::Male, 120, 1880),
            rec("Mary", Sex::Female, 90, 1881),
        ],
        1880,
        1881,
    );

    let totals = birth_totals(&table);
    let year_total_1880: u64 = totals
        .iter()
        .filter(|((_, year), _)| *year == 1880)
        .map(|(_, total)| total)
        .sum();
    assert_eq!(year_total_1880, 260);
}

// ---------------------------------------------------------------------------
// Popular names
// ---------------------------------------------------------------------------

#[test]
fn top_names_ranks_by_total_across_years() {
    let table = NameTable::new(
        vec![
            rec("Mary", Sex::Female, 100, 1880),
            rec("Mary", Sex::Female, 50, 1881),
            rec("John", Sex::Male, 120, 1880),
            rec("Anna", Sex::Female, 10, 1880),
        ],
        1880,
        1881,
    );

    let ranked = top_names(&table, 2);
    assert_eq!(ranked, vec![("Mary".to_string(), 150), ("John".to_string(), 120)]);
}

#[test]
fn top_names_breaks_ties_alphabetically() {
    let table = NameTable::new(
        vec![
            rec("Zed", Sex::Male, 50, 1880),
            rec("Amy", Sex::Female, 50, 1880),
        ],
        1880,
        1880,
    );

    let ranked = top_names(&table, 2);
    assert_eq!(ranked[0].0, "Amy");
    assert_eq!(ranked[1].0, "Zed");
}

#[test]
fn name_series_fills_absent_years_with_zero() {
    let table = NameTable::new(
        vec![
            rec("Luke", Sex::Male, 10, 1880),
            rec("Luke", Sex::Male, 30, 1882),
            rec("Luke", Sex::Female, 5, 1882),
        ],
        1880,
        1883,
    );

    // both sexes summed, gaps zero
    assert_eq!(name_series(&table, "Luke"), vec![10, 0, 35, 0]);
    assert_eq!(name_series(&table, "Leia"), vec![0, 0, 0, 0]);
}

// ---------------------------------------------------------------------------
// Decade-representative names
// ---------------------------------------------------------------------------

#[test]
fn decade_representative_is_the_window_maximum() {
    let table = NameTable::new(
        vec![
            rec("John", Sex::Male, 100, 1880),
            rec("James", Sex::Male, 90, 1880),
            rec("James", Sex::Male, 20, 1881),
            rec("Mary", Sex::Female, 80, 1880),
            rec("Anna", Sex::Female, 70, 1881),
        ],
        1880,
        1881,
    );

    // one window (start 1880, stride 13 covers the whole table)
    let selected = decade_representatives(&table, 13);
    // James: 110 beats John: 100; Mary 80 beats Anna 70
    assert_eq!(selected, vec!["James".to_string(), "Mary".to_string()]);
}

#[test]
fn decade_ties_go_to_the_alphabetically_first_name() {
    let table = NameTable::new(
        vec![
            rec("Walter", Sex::Male, 50, 1900),
            rec("Albert", Sex::Male, 50, 1900),
            rec("Mary", Sex::Female, 10, 1900),
        ],
        1900,
        1901,
    );

    let selected = decade_representatives(&table, 13);
    assert_eq!(selected[0], "Albert");
}

#[test]
fn decade_windows_are_inclusive_and_results_deduplicated() {
    // stride 1: windows [2000..=2001] and [2001..=2002]
    let table = NameTable::new(
        vec![
            rec("John", Sex::Male, 100, 2000),
            rec("John", Sex::Male, 100, 2001),
            rec("John", Sex::Male, 100, 2002),
            rec("Mary", Sex::Female, 100, 2000),
            rec("Anna", Sex::Female, 300, 2002),
        ],
        2000,
        2002,
    );

    let selected = decade_representatives(&table, 1);
    // John wins both windows but appears once. Window one ends before Anna's
    // 2002 rows, so it picks Mary; window two includes 2002 via the
    // inclusive upper bound and picks Anna.
    assert_eq!(
        selected,
        vec!["John".to_string(), "Mary".to_string(), "Anna".to_string()]
    );
}

// ---------------------------------------------------------------------------
// Half-names diversity measure
// ---------------------------------------------------------------------------

#[test]
fn half_names_prefix_is_minimal() {
    // 1880: counts 5,3,2,2 (total 12, half 6): 5 < 6, 5+3 = 8 >= 6 -> 2
    let table = NameTable::new(
        vec![
            rec("Mary", Sex::Female, 5, 1880),
            rec("Anna", Sex::Female, 3, 1880),
            rec("John", Sex::Male, 2, 1880),
            rec("Emma", Sex::Female, 2, 1880),
        ],
        1880,
        1880,
    );

    let counts = half_names(&table);
    assert_eq!(counts, vec![2]);
}

#[test]
fn half_names_handles_exact_half_and_single_name() {
    let table = NameTable::new(
        vec![
            // 1880: 3,3 -> first name alone reaches exactly half
            rec("Mary", Sex::Female, 3, 1880),
            rec("John", Sex::Male, 3, 1880),
            // 1881: a single name trivially covers its own half
            rec("Mary", Sex::Female, 10, 1881),
        ],
        1880,
        1881,
    );

    assert_eq!(half_names(&table), vec![1, 1]);
}

#[test]
fn half_names_sums_a_name_across_sexes() {
    // Jordan appears under both sexes; grouped by name it dominates the year
    let table = NameTable::new(
        vec![
            rec("Jordan", Sex::Male, 30, 1990),
            rec("Jordan", Sex::Female, 30, 1990),
            rec("Mary", Sex::Female, 25, 1990),
            rec("John", Sex::Male, 25, 1990),
        ],
        1990,
        1990,
    );

    // total 110, half 55: Jordan alone (60) suffices
    assert_eq!(half_names(&table), vec![1]);
}

// ---------------------------------------------------------------------------
// Letter distribution
// ---------------------------------------------------------------------------

#[test]
fn letter_distribution_normalizes_per_year() {
    let table = NameTable::new(
        vec![
            rec("Anna", Sex::Female, 4, 1900),
            rec("Bob", Sex::Male, 6, 1900),
        ],
        1900,
        1900,
    );

    let rows = letter_distribution(&table, LetterPosition::First, &[1900]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].year, 1900);

    let sum: f64 = rows[0].freqs.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9, "frequencies must sum to 1, got {}", sum);

    // case-insensitive: "Anna" counts for 'a'
    assert!((rows[0].freqs[0] - 0.4).abs() < 1e-9);
    assert!((rows[0].freqs[1] - 0.6).abs() < 1e-9);
    // every other letter stays at zero
    assert!(rows[0].freqs[2..].iter().all(|&f| f == 0.0));
}

#[test]
fn letter_distribution_last_position() {
    let table = NameTable::new(
        vec![
            rec("Anna", Sex::Female, 4, 1900),
            rec("Bob", Sex::Male, 6, 1900),
        ],
        1900,
        1900,
    );

    let rows = letter_distribution(&table, LetterPosition::Last, &[1900]);
    // 'a' from Anna, 'b' from Bob
    assert!((rows[0].freqs[0] - 0.4).abs() < 1e-9);
    assert!((rows[0].freqs[1] - 0.6).abs() < 1e-9);
}

#[test]
fn letter_distribution_skips_years_without_rows() {
    let table = NameTable::new(vec![rec("Anna", Sex::Female, 4, 1900)], 1900, 1975);

    let rows = letter_distribution(&table, LetterPosition::First, &[1900, 1925]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].year, 1900);
}

#[test]
fn letter_position_parses_only_first_and_last() {
    assert_eq!("first".parse::<LetterPosition>(), Ok(LetterPosition::First));
    assert_eq!("last".parse::<LetterPosition>(), Ok(LetterPosition::Last));

    let err = "middle".parse::<LetterPosition>().unwrap_err();
    assert_eq!(err, StatsError::InvalidPosition("middle".to_string()));
    let message = err.to_string();
    assert!(message.contains("\"first\""));
    assert!(message.contains("\"last\""));
}
