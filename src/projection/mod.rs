//! View-state to chart data projection

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::data::Dataset;

/// Aggregation granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Mode {
    /// One data point per calendar day
    #[value(name = "day", alias = "daywise")]
    DayWise,
    /// One data point per hour of the selected day
    #[value(name = "hour", alias = "hourwise")]
    HourWise,
}

/// How the chart draws its single series
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ChartKind {
    Bar,
    Line,
}

/// Day shown when hour-wise mode starts without an explicit date
pub(crate) const DEFAULT_DATE: &str = "2024-10-25";

/// Current selector state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ViewState {
    pub(crate) mode: Mode,
    pub(crate) chart_kind: ChartKind,
    pub(crate) selected_date: NaiveDate,
}

/// Chart-ready data; `labels` and `values` always have the same length
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct ChartProjection {
    pub(crate) labels: Vec<String>,
    pub(crate) values: Vec<f64>,
    pub(crate) series_title: String,
    pub(crate) chart_title: String,
}

impl ChartProjection {
    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all values (Wh)
    pub(crate) fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Project the dataset through the current view state
pub(crate) fn project(dataset: &Dataset, view: &ViewState) -> ChartProjection {
    match view.mode {
        Mode::DayWise => {
            let mut days: Vec<_> = dataset.days.iter().collect();
            days.sort_by_key(|d| d.date);

            ChartProjection {
                labels: days.iter().map(|d| d.date.to_string()).collect(),
                values: days.iter().map(|d| d.total_watt_hours).collect(),
                series_title: "Total Watt-Hours by Day".to_string(),
                chart_title: "Day-wise Watt-Hours".to_string(),
            }
        }
        Mode::HourWise => {
            let mut hours: Vec<_> = dataset
                .hours
                .iter()
                .filter(|h| h.date == view.selected_date)
                .collect();
            hours.sort_by_key(|h| h.hour);

            ChartProjection {
                labels: hours.iter().map(|h| format_hour(h.hour)).collect(),
                values: hours.iter().map(|h| h.total_watt_hours).collect(),
                series_title: format!("Total Watt-Hours on {}", view.selected_date),
                chart_title: format!("Watt-Hours on {}", view.selected_date),
            }
        }
    }
}

/// Format an hour of day on the 12-hour clock (0 -> "12:00 AM", 13 -> "1:00 PM")
pub(crate) fn format_hour(hour: u8) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:00 {}", display, suffix)
}

/// Dates offered by the date selector, ascending
pub(crate) fn available_dates(dataset: &Dataset) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = dataset.days.iter().map(|d| d.date).collect();
    dates.sort();
    dates.dedup();
    dates
}
