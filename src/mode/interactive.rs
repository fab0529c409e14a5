//! Interactive session: selector commands read line by line

use std::io::BufRead;
use std::path::Path;

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::dashboard::Dashboard;
use crate::data::Dataset;
use crate::output::{print_commands, print_dates, print_error, print_view_state};
use crate::projection::{ChartKind, Mode, ViewState};
use crate::surface::{ImageSurface, RenderSlot, TerminalSurface};

/// A parsed session command
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Command {
    Mode(Mode),
    Chart(ChartKind),
    Date(NaiveDate),
    Dates,
    Show,
    Help,
    Quit,
}

/// Parse one input line; `Ok(None)` for blank lines
pub(super) fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next();

    if parts.next().is_some() {
        return Err(format!("Too many arguments: {}", line.trim()));
    }

    let require = |what: &str| arg.ok_or_else(|| format!("'{}' needs {}", word, what));

    let command = match word.to_ascii_lowercase().as_str() {
        "mode" => Command::Mode(Mode::from_str(require("day|hour")?, true)?),
        "chart" => Command::Chart(ChartKind::from_str(require("bar|line")?, true)?),
        "date" => {
            let s = require("a date (YYYY-MM-DD)")?;
            let date = s
                .parse::<NaiveDate>()
                .map_err(|_| format!("Invalid date: {} (expected YYYY-MM-DD)", s))?;
            Command::Date(date)
        }
        "dates" => Command::Dates,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command: {}", other)),
    };

    Ok(Some(command))
}

/// Run commands from `input` until it ends or `quit` is read
pub(crate) fn run_interactive(
    dataset: Dataset,
    view: ViewState,
    image_path: Option<&Path>,
    quiet: bool,
    input: impl BufRead,
) -> Result<(), String> {
    let mut dashboard =
        Dashboard::new(dataset, view).with_surface(RenderSlot::new(TerminalSurface::default()));
    if let Some(path) = image_path {
        dashboard = dashboard.with_surface(RenderSlot::new(ImageSurface::new(path)));
    }

    if !quiet {
        print_commands();
        print_view_state(dashboard.view());
    }
    dashboard.refresh();

    for line in input.lines() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                print_error(&e);
                continue;
            }
        };

        match command {
            Command::Mode(mode) => {
                dashboard.set_mode(mode);
            }
            Command::Chart(kind) => {
                dashboard.set_chart_kind(kind);
            }
            Command::Date(date) => {
                dashboard.set_date(date);
            }
            Command::Dates => print_dates(dashboard.dates()),
            Command::Show => {
                dashboard.refresh();
            }
            Command::Help => print_commands(),
            Command::Quit => break,
        }
    }

    dashboard.teardown();
    Ok(())
}
