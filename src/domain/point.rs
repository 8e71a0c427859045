//! Points and cities.

use std::fmt;

/// A location on the integer plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// A named point that a tour visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// Display name, e.g. `City3`.
    pub name: String,
    /// Location.
    pub point: Point,
}

impl City {
    /// Create a new city.
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            point: Point::new(x, y),
        }
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        self.point.distance_to(&other.point)
    }
}

/// Name points `City1..CityN` in input order.
pub fn cities_from_points(points: &[Point]) -> Vec<City> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| City::new(format!("City{}", i + 1), p.x, p.y))
        .collect()
}
