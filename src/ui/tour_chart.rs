//! In-terminal tour chart.

use super::{format_axis_label, ThemeColors};
use crate::domain::{Point, Tour};
use crate::plot::{caption, ChartBounds};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    vec![
        format_axis_label(bounds[0]),
        format_axis_label((bounds[0] + bounds[1]) / 2.0),
        format_axis_label(bounds[1]),
    ]
}

/// Draw the current tour, or just the cities when nothing was solved yet.
pub(super) fn draw_tour_chart(
    f: &mut Frame<'_>,
    area: Rect,
    points: &[Point],
    tour: Option<&Tour>,
    padding: f64,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    if points.is_empty() {
        let paragraph = Paragraph::new("No points loaded. Load or generate data first.")
            .block(block.title(" Tour "))
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let (bounds, title, route) = match tour {
        Some(tour) => (
            ChartBounds::from_tour(tour, padding),
            format!(" {} ", caption(tour)),
            tour.route(),
        ),
        None => (
            ChartBounds::from_points(points, padding),
            format!(" {} cities ", points.len()),
            Vec::new(),
        ),
    };
    let cities: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (f64::from(p.x), f64::from(p.y)))
        .collect();

    let mut datasets = Vec::with_capacity(2);
    if !route.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Route")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.route))
                .data(&route),
        );
    }
    datasets.push(
        Dataset::default()
            .name("Cities")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.city))
            .data(&cities),
    );

    let x_axis = Axis::default()
        .title("X")
        .style(Style::default().fg(colors.text))
        .bounds(bounds.x)
        .labels(axis_labels(bounds.x));
    let y_axis = Axis::default()
        .title("Y")
        .style(Style::default().fg(colors.text))
        .bounds(bounds.y)
        .labels(axis_labels(bounds.y));

    let chart = Chart::new(datasets)
        .block(
            block
                .title(title)
                .title_style(Style::default().fg(colors.heading)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
