//! Random problem instances.

use super::Point;
use crate::error::{Result, SalesmanError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Default exclusive upper bound for generated coordinates.
pub const DEFAULT_MAX_COORDINATE: i32 = 3000;

/// Upper bound for the point count picked by [`PointGenerator::generate_any`].
pub const MAX_RANDOM_POINTS: usize = 50;

/// Generates sets of distinct random points.
#[derive(Debug)]
pub struct PointGenerator {
    rng: StdRng,
    max_coordinate: i32,
}

impl PointGenerator {
    /// Create an entropy-seeded generator with coordinates in `[0, max_coordinate)`.
    pub fn new(max_coordinate: i32) -> Result<Self> {
        Self::with_rng(StdRng::from_entropy(), max_coordinate)
    }

    /// Create a reproducible generator using the default coordinate bound.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_coordinate: DEFAULT_MAX_COORDINATE,
        }
    }

    /// Create a generator from an explicit RNG.
    pub fn with_rng(rng: StdRng, max_coordinate: i32) -> Result<Self> {
        if max_coordinate <= 0 {
            return Err(SalesmanError::invalid_generator(
                "max coordinate must be positive",
            ));
        }
        Ok(Self {
            rng,
            max_coordinate,
        })
    }

    /// Generate between 1 and [`MAX_RANDOM_POINTS`] points.
    pub fn generate_any(&mut self) -> Vec<Point> {
        let count = self.rng.gen_range(1..=MAX_RANDOM_POINTS);
        // Tiny grids cap the random count
        let count = count.min(self.capacity());
        self.fill(count)
    }

    /// Generate exactly `count` distinct points.
    pub fn generate(&mut self, count: usize) -> Result<Vec<Point>> {
        if count == 0 {
            return Err(SalesmanError::invalid_generator(
                "number of points must be positive",
            ));
        }
        if count > self.capacity() {
            return Err(SalesmanError::invalid_generator(format!(
                "cannot place {} distinct points on a {}x{} grid",
                count, self.max_coordinate, self.max_coordinate
            )));
        }
        Ok(self.fill(count))
    }

    fn capacity(&self) -> usize {
        let side = self.max_coordinate as u64;
        usize::try_from(side * side).unwrap_or(usize::MAX)
    }

    fn fill(&mut self, count: usize) -> Vec<Point> {
        let mut seen = HashSet::with_capacity(count);
        let mut points = Vec::with_capacity(count);

        while points.len() < count {
            let point = Point::new(
                self.rng.gen_range(0..self.max_coordinate),
                self.rng.gen_range(0..self.max_coordinate),
            );
            if seen.insert(point) {
                points.push(point);
            }
        }

        tracing::debug!("Generated {} points", points.len());
        points
    }
}

impl Default for PointGenerator {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_coordinate: DEFAULT_MAX_COORDINATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_count_is_within_bounds() {
        let mut generator = PointGenerator::seeded(7);
        for _ in 0..20 {
            let points = generator.generate_any();
            assert!((1..=MAX_RANDOM_POINTS).contains(&points.len()));
        }
    }

    #[test]
    fn generates_requested_count() {
        let points = PointGenerator::seeded(1).generate(25).unwrap();
        assert_eq!(points.len(), 25);
    }

    #[test]
    fn respects_max_coordinate() {
        let mut generator = PointGenerator::with_rng(StdRng::seed_from_u64(3), 100).unwrap();
        for p in generator.generate(60).unwrap() {
            assert!((0..100).contains(&p.x));
            assert!((0..100).contains(&p.y));
        }
    }

    #[test]
    fn points_are_unique() {
        let mut generator = PointGenerator::with_rng(StdRng::seed_from_u64(9), 10).unwrap();
        let points = generator.generate(90).unwrap();
        let unique: HashSet<_> = points.iter().collect();
        assert_eq!(unique.len(), points.len());
    }

    #[test]
    fn same_seed_gives_same_points() {
        let a = PointGenerator::seeded(12345).generate(30).unwrap();
        let b = PointGenerator::seeded(12345).generate(30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_points_is_an_error() {
        assert!(PointGenerator::seeded(0).generate(0).is_err());
    }

    #[test]
    fn non_positive_bound_is_an_error() {
        assert!(PointGenerator::new(0).is_err());
        assert!(PointGenerator::new(-5).is_err());
    }

    #[test]
    fn full_grid_is_fillable_but_not_more() {
        let mut generator = PointGenerator::with_rng(StdRng::seed_from_u64(5), 3).unwrap();
        assert_eq!(generator.generate(9).unwrap().len(), 9);
        assert!(generator.generate(10).is_err());
    }
}
