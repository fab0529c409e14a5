//! Chart building and file rendering for watt-hour projections

mod colors;
mod usage;

pub(crate) use usage::build_chart;

use std::path::Path;

use charming::{Chart, HtmlRenderer, ImageRenderer, renderer::ImageFormat};

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 1600;
pub(super) const CHART_HEIGHT: u32 = 1000;

/// Output file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChartFormat {
    Png,
    Svg,
    Html,
}

impl ChartFormat {
    /// Detect the format from a path's extension (case-insensitive)
    pub(crate) fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Supported extensions, for error messages
pub(crate) const SUPPORTED_EXTENSIONS: &str = "png, svg, html";

/// Write a chart to `output_path` in the given format, replacing any existing file
pub(crate) fn save_chart(
    chart: &Chart,
    format: ChartFormat,
    title: &str,
    output_path: &Path,
) -> Result<(), String> {
    match format {
        ChartFormat::Png => {
            let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
            renderer
                .save_format(ImageFormat::Png, chart, output_path)
                .map_err(|e| format!("Failed to save chart: {}", e))
        }
        ChartFormat::Svg => {
            let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
            renderer
                .save(chart, output_path)
                .map_err(|e| format!("Failed to save chart: {}", e))
        }
        ChartFormat::Html => HtmlRenderer::new(title, CHART_WIDTH.into(), CHART_HEIGHT.into())
            .save(chart, output_path)
            .map_err(|e| format!("Failed to save chart: {}", e)),
    }
}
