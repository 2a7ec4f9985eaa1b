use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command, ValueHint};
use log::LevelFilter;

use name_trends::config::RunConfig;
use name_trends::io;
use name_trends::report::html::{Report, ReportSection};
use name_trends::report::plots;
use name_trends::stats::LetterPosition;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("NAMES_LOG", "warn,name_trends=info"))
        .init();

    let matches = Command::new("name-trends")
        .version(clap::crate_version!())
        .about("Exploratory charts over yearly name-frequency census files")
        .arg(
            Arg::new("data_dir")
                .short('d')
                .long("data-dir")
                .help("Directory holding the per-year yob<YEAR>.txt files")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("first_year")
                .long("first-year")
                .help("First calendar year to load (inclusive)")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("last_year")
                .long("last-year")
                .help("Last calendar year to load (inclusive)")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("report")
                .short('o')
                .long("report")
                .help(
                    "Write all charts into one HTML report at this path instead of \
                     opening each chart in the browser",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let mut config = RunConfig::default();
    if let Some(dir) = matches.get_one::<PathBuf>("data_dir") {
        config.data_dir = dir.clone();
    }
    if let Some(&year) = matches.get_one::<u16>("first_year") {
        config.first_year = year;
    }
    if let Some(&year) = matches.get_one::<u16>("last_year") {
        config.last_year = year;
    }

    let table = io::load_table(&config.data_dir, config.first_year, config.last_year)?;
    table.log_summary();

    let charts = vec![
        ("Births by sex and year", plots::plot_birth_stats(&table)),
        (
            "Most popular names",
            plots::plot_popular_names(&table, config.top_names),
        ),
        (
            "Decade-representative names",
            plots::plot_decade_popular_names(&table, config.decade_stride),
        ),
        ("Naming diversity", plots::plot_half_names(&table)),
        (
            "First-letter distribution",
            plots::plot_letter_distribution(&table, LetterPosition::First, &config.letter_sample_years),
        ),
        (
            "Last-letter distribution",
            plots::plot_letter_distribution(&table, LetterPosition::Last, &config.letter_sample_years),
        ),
        ("Name \"Luke\"", plots::plot_famous_luke(&table)),
        ("Name \"Forrest\"", plots::plot_famous_forrest(&table)),
    ];

    if let Some(path) = matches.get_one::<PathBuf>("report") {
        let title = format!("Name trends {}-{}", config.first_year, config.last_year);
        let mut report = Report::new(&title);
        for (section_title, plot) in charts {
            report.add_section(ReportSection::new(section_title).add_plot(plot));
        }
        report.save(path)?;
    } else {
        for (section_title, plot) in charts {
            log::info!("showing {}", section_title);
            plot.show();
        }
    }

    Ok(())
}
