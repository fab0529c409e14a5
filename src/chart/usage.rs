//! Watt-hour chart (single bar or line series)

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AreaStyle, AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, Symbol,
        TextStyle, Tooltip, Trigger,
    },
    series::{Bar, Line},
};

use super::colors::{
    COLOR_BACKGROUND, COLOR_BAR_FILL, COLOR_BORDER, COLOR_GRID, COLOR_LINE_FILL, COLOR_TEXT,
};
use crate::projection::{ChartKind, ChartProjection};

/// Build the chart configuration for a projection.
/// The chart kind only selects the series type; labels and values pass through untouched.
pub(crate) fn build_chart(projection: &ChartProjection, kind: ChartKind) -> Chart {
    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(&projection.chart_title)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(32)),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(
            Legend::new()
                .data(vec![projection.series_title.clone()])
                .bottom("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(20)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("10%")
                .top("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(projection.labels.clone())
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Wh")
                .min(0)
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(20))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    let data = projection.values.clone();

    match kind {
        ChartKind::Bar => chart.series(
            Bar::new()
                .name(&projection.series_title)
                .data(data)
                .item_style(
                    ItemStyle::new()
                        .color(COLOR_BAR_FILL)
                        .border_color(COLOR_BORDER)
                        .border_width(1),
                ),
        ),
        ChartKind::Line => chart.series(
            Line::new()
                .name(&projection.series_title)
                .data(data)
                .symbol(Symbol::Circle)
                .symbol_size(8)
                .line_style(LineStyle::new().width(2).color(COLOR_BORDER))
                .item_style(ItemStyle::new().color(COLOR_BORDER))
                .area_style(AreaStyle::new().color(COLOR_LINE_FILL)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn projection() -> ChartProjection {
        ChartProjection {
            labels: vec!["7:00 AM".to_string(), "10:00 AM".to_string()],
            values: vec![155.0, 76.0],
            series_title: "Total Watt-Hours on 2024-10-25".to_string(),
            chart_title: "Watt-Hours on 2024-10-25".to_string(),
        }
    }

    fn to_json(chart: &Chart) -> Value {
        serde_json::from_str(&chart.to_string()).unwrap()
    }

    /// Options may serialize single-element lists as plain objects
    fn first(v: &Value) -> &Value {
        if v.is_array() { &v[0] } else { v }
    }

    #[test]
    fn test_bar_series() {
        let json = to_json(&build_chart(&projection(), ChartKind::Bar));
        let series = first(&json["series"]);
        assert_eq!(series["type"], "bar");
        assert_eq!(series["name"], "Total Watt-Hours on 2024-10-25");
    }

    #[test]
    fn test_line_series_is_filled() {
        let json = to_json(&build_chart(&projection(), ChartKind::Line));
        let series = first(&json["series"]);
        assert_eq!(series["type"], "line");
        assert!(series.get("areaStyle").is_some());
    }

    #[test]
    fn test_chart_kind_keeps_labels() {
        let bar = to_json(&build_chart(&projection(), ChartKind::Bar));
        let line = to_json(&build_chart(&projection(), ChartKind::Line));
        assert_eq!(first(&bar["xAxis"])["data"], first(&line["xAxis"])["data"]);
        assert_eq!(first(&bar["xAxis"])["data"][1], "10:00 AM");
        assert_eq!(first(&bar["title"])["text"], "Watt-Hours on 2024-10-25");
    }

    #[test]
    fn test_empty_projection_builds() {
        let json = to_json(&build_chart(&ChartProjection::default(), ChartKind::Bar));
        assert!(json.get("series").is_some());
    }
}
