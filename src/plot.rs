//! Tour charts.
//!
//! Renders a tour as an XY chart: the closed route as a line and the cities
//! as markers. The same bounds feed the in-terminal chart and the SVG file
//! written when a run is archived.

use crate::domain::{Point, Tour};
use crate::error::{Result, SalesmanError};
use plotters::prelude::*;
use std::path::Path;

/// Pixel size of exported charts.
pub const CHART_SIZE: (u32, u32) = (800, 600);

const ROUTE_COLOR: RGBColor = RGBColor(0, 0, 255);
const CITY_COLOR: RGBColor = RGBColor(255, 0, 0);
const GRID_COLOR: RGBColor = RGBColor(211, 211, 211);

/// Axis bounds for a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    /// X range `[min, max]`.
    pub x: [f64; 2],
    /// Y range `[min, max]`.
    pub y: [f64; 2],
}

impl ChartBounds {
    /// Bounds covering `points`, widened by `padding_factor` of the span.
    ///
    /// Degenerate spans (one point, a vertical or horizontal line) get a
    /// unit margin so the axes stay drawable.
    pub fn from_points(points: &[Point], padding_factor: f64) -> Self {
        if points.is_empty() {
            return Self {
                x: [0.0, 1.0],
                y: [0.0, 1.0],
            };
        }
        let xs = points.iter().map(|p| f64::from(p.x));
        let ys = points.iter().map(|p| f64::from(p.y));
        Self {
            x: padded(xs, padding_factor),
            y: padded(ys, padding_factor),
        }
    }

    /// Bounds covering every city of a tour.
    pub fn from_tour(tour: &Tour, padding_factor: f64) -> Self {
        let points: Vec<Point> = tour.cities().iter().map(|c| c.point).collect();
        Self::from_points(&points, padding_factor)
    }
}

fn padded(values: impl Iterator<Item = f64>, padding_factor: f64) -> [f64; 2] {
    let (min, max) = values.fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = ((max - min) * padding_factor).max(1.0);
    [min - pad, max + pad]
}

/// Chart caption for a tour.
pub fn caption(tour: &Tour) -> String {
    format!("TSP Tour: {:.2}", tour.total_distance())
}

/// Write the tour chart as an SVG file.
pub fn save_tour_chart(tour: &Tour, path: &Path) -> Result<()> {
    draw_tour_chart(tour, path).map_err(|e| SalesmanError::Chart(e.to_string()))?;
    tracing::info!("Chart written to {}", path.display());
    Ok(())
}

fn draw_tour_chart(tour: &Tour, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let bounds = ChartBounds::from_tour(tour, 0.05);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption(tour), ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.x[0]..bounds.x[1], bounds.y[0]..bounds.y[1])?;

    chart
        .configure_mesh()
        .x_desc("X")
        .y_desc("Y")
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            tour.route(),
            ShapeStyle::from(&ROUTE_COLOR).stroke_width(2),
        ))?
        .label("Route")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ROUTE_COLOR));

    chart
        .draw_series(tour.cities().iter().map(|c| {
            Circle::new(
                (f64::from(c.point.x), f64::from(c.point.y)),
                5,
                CITY_COLOR.filled(),
            )
        }))?
        .label("Cities")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, CITY_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
