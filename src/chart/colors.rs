//! Color definitions for charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines

/// Teal series colors
pub(super) const COLOR_BORDER: &str = "rgba(75,192,192,1)";
pub(super) const COLOR_BAR_FILL: &str = "rgba(75,192,192,0.6)";
pub(super) const COLOR_LINE_FILL: &str = "rgba(75,192,192,0.4)"; // Lighter for area under line
