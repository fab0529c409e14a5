mod chart;
mod dashboard;
mod data;
mod mode;
mod output;
mod projection;
mod surface;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;

use chart::{ChartFormat, SUPPORTED_EXTENSIONS};
use data::Dataset;
use output::print_error;
use projection::{ChartKind, DEFAULT_DATE, Mode, ViewState};

#[derive(Parser)]
#[command(
    name = "energymeter",
    version,
    about = "Energy meter usage viewer with day-wise and hour-wise watt-hour charts",
    after_help = "Examples:
  energymeter                                       Day-wise totals
  energymeter --mode hour --date 2024-10-30         Hourly readings for one day
  energymeter --chart line --image usage.png        Line chart saved as PNG
  energymeter --mode hour --image usage.html        Interactive HTML chart
  energymeter --list-dates                          Dates with readings
  energymeter --interactive                         Change selections from stdin"
)]
struct Args {
    /// Aggregation: one point per day or per hour of the selected date
    #[arg(short, long, value_enum, default_value = "day")]
    mode: Mode,

    /// Chart type
    #[arg(short, long, value_enum, default_value = "bar")]
    chart: ChartKind,

    /// Date for hour-wise mode (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    date: Option<NaiveDate>,

    /// Also render the chart to a file (png, svg, html)
    #[arg(short, long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// List the dates that can be selected and exit
    #[arg(long)]
    list_dates: bool,

    /// Read selector commands from stdin, re-rendering after each change
    #[arg(long)]
    interactive: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn fail(msg: &str) -> ! {
    print_error(msg);
    std::process::exit(1);
}

fn validate_image_path(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!("Directory does not exist: {}", parent.display()));
    }

    if ChartFormat::from_path(path).is_none() {
        return Err(format!(
            "Unsupported image format: {} (expected {})",
            path.display(),
            SUPPORTED_EXTENSIONS
        ));
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    let dataset = Dataset::sample().unwrap_or_else(|e| fail(&e));

    if args.list_dates {
        mode::run_list_dates(&dataset);
        return;
    }

    // Validate option combinations
    if args.date.is_some() && args.mode != Mode::HourWise && !args.interactive {
        fail("--date can only be used with --mode hour");
    }

    if let Some(ref path) = args.image
        && let Err(e) = validate_image_path(path)
    {
        fail(&e);
    }

    let selected_date = match args.date {
        Some(date) => date,
        None => DEFAULT_DATE
            .parse::<NaiveDate>()
            .unwrap_or_else(|_| fail("Invalid default date")),
    };

    let view = ViewState {
        mode: args.mode,
        chart_kind: args.chart,
        selected_date,
    };

    // Dispatch to appropriate mode
    if args.interactive {
        let stdin = std::io::stdin();
        if let Err(e) = mode::run_interactive(
            dataset,
            view,
            args.image.as_deref(),
            args.quiet,
            stdin.lock(),
        ) {
            fail(&e);
        }
    } else {
        mode::run_render(dataset, view, args.image.as_deref(), args.quiet);
    }
}
