use chrono::NaiveDate;
use colored::*;

use crate::projection::{ChartKind, ChartProjection, Mode, ViewState};

/// Width of the label column in projection tables
const LABEL_WIDTH: usize = 12;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::DayWise => "Day-wise",
        Mode::HourWise => "Hour-wise",
    }
}

pub(crate) fn chart_kind_name(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "Bar",
        ChartKind::Line => "Line",
    }
}

pub(crate) fn print_view_state(view: &ViewState) {
    print!("View: {}", mode_name(view.mode));
    if view.mode == Mode::HourWise {
        print!(" ({})", view.selected_date);
    }
    println!(", Chart: {}", chart_kind_name(view.chart_kind));
    println!();
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Relative bar for the terminal table; `max` is the largest value in the projection
fn format_meter(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || !value.is_finite() {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "#".repeat(filled.min(width))
}

pub(crate) fn print_projection(projection: &ChartProjection, kind: ChartKind) {
    const METER_WIDTH: usize = 40;

    println!("[{}]", projection.chart_title);
    println!(
        "{:<width$} {:>8}",
        style_label("LABEL"),
        style_label("Wh"),
        width = LABEL_WIDTH
    );
    print_separator(LABEL_WIDTH + 10 + METER_WIDTH);

    if projection.is_empty() {
        println!("(no data)");
    } else {
        let max = projection.values.iter().copied().fold(0.0, f64::max);
        for (label, value) in projection.labels.iter().zip(&projection.values) {
            let meter = format_meter(*value, max, METER_WIDTH);
            let meter = match kind {
                ChartKind::Bar => meter.cyan(),
                ChartKind::Line => meter.replace('#', "-").cyan(),
            };
            println!(
                "{:<width$} {:>8.0}  {}",
                label,
                value,
                meter,
                width = LABEL_WIDTH
            );
        }
    }

    print_separator(LABEL_WIDTH + 10 + METER_WIDTH);
    println!(
        "{:<width$} {:>8.0}",
        "TOTAL",
        projection.total(),
        width = LABEL_WIDTH
    );
}

pub(crate) fn print_dates(dates: &[NaiveDate]) {
    for date in dates {
        println!("{}", date);
    }
}

pub(crate) fn print_legend() {
    println!("Day-wise: Total watt-hours per calendar day");
    println!("Hour-wise: Watt-hours per recorded hour of the selected date");
    println!("Hours without readings are omitted rather than shown as zero.");
}

pub(crate) fn print_commands() {
    println!("Commands:");
    println!("  mode day|hour     Switch aggregation");
    println!("  chart bar|line    Switch chart type");
    println!("  date YYYY-MM-DD   Select date (hour-wise)");
    println!("  dates             List selectable dates");
    println!("  show              Render again");
    println!("  quit              Exit");
    println!();
}
