pub mod yob;

pub use yob::{load_table, read_year_file};
