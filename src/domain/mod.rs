//! Problem domain: points, named cities and closed tours.
//!
//! This module holds the plain value types every solver works on,
//! plus the random point generator used to build problem instances.

mod generator;
mod point;
mod tour;

pub use generator::{PointGenerator, DEFAULT_MAX_COORDINATE, MAX_RANDOM_POINTS};
pub use point::{cities_from_points, City, Point};
pub use tour::Tour;
