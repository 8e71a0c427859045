//! Closed tours.

use super::City;
use crate::error::{Result, SalesmanError};
use std::fmt;

/// An ordered visit of cities that returns to its start.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    cities: Vec<City>,
    total_distance: f64,
}

impl Tour {
    /// Build a tour from cities in visiting order.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.is_empty() {
            return Err(SalesmanError::EmptyTour);
        }
        let total_distance = closed_length(&cities);
        Ok(Self {
            cities,
            total_distance,
        })
    }

    /// Cities in visiting order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Length of the closed loop, including the leg back to the start.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the tour has no cities. Never true for a constructed tour.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Route coordinates closed back to the first city, for plotting.
    pub fn route(&self) -> Vec<(f64, f64)> {
        self.cities
            .iter()
            .chain(self.cities.first())
            .map(|c| (f64::from(c.point.x), f64::from(c.point.y)))
            .collect()
    }
}

fn closed_length(cities: &[City]) -> f64 {
    let legs: f64 = cities
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum();
    match (cities.first(), cities.last()) {
        (Some(first), Some(last)) => legs + last.distance_to(first),
        _ => legs,
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in &self.cities {
            write!(f, "{} -> ", city.name)?;
        }
        if let Some(first) = self.cities.first() {
            write!(f, "{}", first.name)?;
        }
        write!(f, " (Distance: {:.2})", self.total_distance)
    }
}
