//! CLI mode implementations

mod interactive;
mod render;

pub(crate) use interactive::run_interactive;
pub(crate) use render::run_render;

use crate::data::Dataset;
use crate::output::print_dates;
use crate::projection::available_dates;

/// Print the dates offered by the date selector
pub(crate) fn run_list_dates(dataset: &Dataset) {
    print_dates(&available_dates(dataset));
}
