//! One-shot render of the current selection

use std::path::Path;

use crate::dashboard::Dashboard;
use crate::data::Dataset;
use crate::output::{print_legend, print_view_state, print_warning};
use crate::projection::ViewState;
use crate::surface::{ImageSurface, RenderSlot, TerminalSurface};

/// Render the selection to the terminal and, if requested, to a chart file
pub(crate) fn run_render(
    dataset: Dataset,
    view: ViewState,
    image_path: Option<&Path>,
    quiet: bool,
) {
    if !quiet {
        println!("Energy Meter Usage");
        print_view_state(&view);
    }

    let mut dashboard =
        Dashboard::new(dataset, view).with_surface(RenderSlot::new(TerminalSurface::default()));
    if let Some(path) = image_path {
        dashboard = dashboard.with_surface(RenderSlot::new(ImageSurface::new(path)));
    }

    let outcome = dashboard.refresh();
    if outcome.points == 0 {
        print_warning(&format!(
            "No readings for {}",
            dashboard.projection().chart_title
        ));
    }

    if let Some(path) = image_path
        && outcome.failed == 0
    {
        eprintln!("Chart saved to: {}", path.display());
    }

    if !quiet {
        println!();
        print_legend();
    }

    dashboard.teardown();
}
