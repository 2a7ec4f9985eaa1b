use plotly::common::Mode;
use plotly::layout::{Annotation, Axis, BarMode, Layout};
use plotly::{Bar, Plot, Scatter};

use crate::data_handling::{NameTable, Sex};
use crate::stats;
use crate::stats::LetterPosition;

/// Stacked bar chart of total births per year, one bar segment per sex.
pub fn plot_birth_stats(table: &NameTable) -> Plot {
    let totals = stats::birth_totals(table);
    let years: Vec<u16> = table.years().collect();

    let female: Vec<u64> = years
        .iter()
        .map(|&year| totals.get(&(Sex::Female, year)).copied().unwrap_or(0))
        .collect();
    let male: Vec<u64> = years
        .iter()
        .map(|&year| totals.get(&(Sex::Male, year)).copied().unwrap_or(0))
        .collect();

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(years.clone(), female).name("Female"));
    plot.add_trace(Bar::new(years, male).name("Male"));
    plot.set_layout(
        Layout::new()
            .title("Total births by sex and year")
            .bar_mode(BarMode::Stack)
            .x_axis(Axis::new().title("year"))
            .y_axis(Axis::new().title("births")),
    );

    plot
}

/// Bar chart of the `n` most popular names over the whole period.
pub fn plot_popular_names(table: &NameTable, n: usize) -> Plot {
    let ranked = stats::top_names(table, n);
    let names: Vec<String> = ranked.iter().map(|(name, _)| name.clone()).collect();
    let totals: Vec<u64> = ranked.iter().map(|(_, total)| *total).collect();

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(names, totals).name("Total"));
    plot.set_layout(
        Layout::new()
            .title(format!("Top {} names, all years", n).as_str())
            .x_axis(Axis::new().title("name"))
            .y_axis(Axis::new().title("total births")),
    );

    plot
}

/// One yearly-total line per decade-representative name.
pub fn plot_decade_popular_names(table: &NameTable, stride: u16) -> Plot {
    let years: Vec<u16> = table.years().collect();

    let mut plot = Plot::new();
    for name in stats::decade_representatives(table, stride) {
        let series = stats::name_series(table, &name);
        plot.add_trace(
            Scatter::new(years.clone(), series)
                .mode(Mode::Lines)
                .name(&name),
        );
    }
    plot.set_layout(
        Layout::new()
            .title("Decade-representative names")
            .x_axis(Axis::new().title("year"))
            .y_axis(Axis::new().title("births")),
    );

    plot
}

/// Line chart of the minimal top-name count covering half of each year's
/// births.
pub fn plot_half_names(table: &NameTable) -> Plot {
    let years: Vec<u16> = table.years().collect();
    let counts = stats::half_names(table);

    let mut plot = Plot::new();
    plot.add_trace(Scatter::new(years, counts).mode(Mode::Lines).name("names"));
    plot.set_layout(
        Layout::new()
            .title("name variation through years")
            .x_axis(Axis::new().title("years"))
            .y_axis(Axis::new().title("number of most usable names")),
    );

    plot
}

/// One letter-frequency line per sampled year, across the letters a-z.
pub fn plot_letter_distribution(
    table: &NameTable,
    position: LetterPosition,
    sample_years: &[u16],
) -> Plot {
    let letters: Vec<String> = (b'a'..=b'z').map(|l| (l as char).to_string()).collect();

    let mut plot = Plot::new();
    for year_freqs in stats::letter_distribution(table, position, sample_years) {
        plot.add_trace(
            Scatter::new(letters.clone(), year_freqs.freqs.to_vec())
                .mode(Mode::Lines)
                .name(year_freqs.year.to_string()),
        );
    }
    plot.set_layout(
        Layout::new()
            .title(format!("{} letter distribution", position.label()).as_str())
            .x_axis(Axis::new().title(format!("{} letter", position.label()).as_str()))
            .y_axis(Axis::new().title("frequency")),
    );

    plot
}

/// Yearly "Luke" curve annotated with the two Star Wars releases.
pub fn plot_famous_luke(table: &NameTable) -> Plot {
    let mut plot = famous_name_plot(table, "Luke");
    plot.set_layout(
        Layout::new()
            .title("frequency of name \"Luke\"")
            .x_axis(Axis::new().title("years"))
            .annotations(vec![
                event_annotation("star wars ep. 4 movie", 1977.0, 1100.0, 1920.0, 2000.0),
                event_annotation("star wars ep. 1 movie", 1999.0, 5700.0, 1940.0, 8000.0),
            ]),
    );
    plot
}

/// Yearly "Forrest" curve annotated with the Forrest Gump release.
pub fn plot_famous_forrest(table: &NameTable) -> Plot {
    let mut plot = famous_name_plot(table, "Forrest");
    plot.set_layout(
        Layout::new()
            .title("frequency of name \"Forrest\"")
            .x_axis(Axis::new().title("years"))
            .annotations(vec![event_annotation(
                "Forrest Gump movie",
                1994.0,
                1350.0,
                1920.0,
                1000.0,
            )]),
    );
    plot
}

fn famous_name_plot(table: &NameTable, name: &str) -> Plot {
    let years: Vec<u16> = table.years().collect();
    let series = stats::name_series(table, name);

    let mut plot = Plot::new();
    plot.add_trace(Scatter::new(years, series).mode(Mode::Lines).name(name));
    plot
}

/// Arrow annotation anchored at a data point, with the label placed at data
/// coordinates (`label_x`, `label_y`).
fn event_annotation(text: &str, x: f64, y: f64, label_x: f64, label_y: f64) -> Annotation {
    Annotation::new()
        .text(text)
        .x(x)
        .y(y)
        .ax_ref("x")
        .ay_ref("y")
        .ax(label_x)
        .ay(label_y)
        .show_arrow(true)
}
