//! Nearest-neighbour construction.

use super::{Algorithm, SolveControl, SolveReport, StopReason, TspSolver};
use crate::domain::{City, Tour};
use crate::error::{Result, SalesmanError};
use std::time::Instant;

/// Starts at the first city and always moves to the closest unvisited one.
#[derive(Debug, Clone, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Create a new greedy solver.
    pub fn new() -> Self {
        Self
    }

    /// Visiting order as indices into `cities`.
    pub fn order(cities: &[City]) -> Vec<usize> {
        let n = cities.len();
        if n == 0 {
            return Vec::new();
        }

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut current = 0;
        visited[current] = true;
        order.push(current);

        while order.len() < n {
            let mut nearest = None;
            let mut best = f64::MAX;
            for (idx, city) in cities.iter().enumerate() {
                if visited[idx] {
                    continue;
                }
                // Strict comparison keeps the lowest index on ties
                let distance = cities[current].distance_to(city);
                if distance < best {
                    best = distance;
                    nearest = Some(idx);
                }
            }
            let Some(next) = nearest else { break };
            visited[next] = true;
            order.push(next);
            current = next;
        }

        order
    }
}

impl TspSolver for GreedySolver {
    fn solve(&mut self, cities: &[City], _control: &SolveControl) -> Result<SolveReport> {
        if cities.is_empty() {
            return Err(SalesmanError::EmptyInput);
        }

        let started = Instant::now();
        let tour = Tour::new(
            Self::order(cities)
                .into_iter()
                .map(|idx| cities[idx].clone())
                .collect(),
        )?;

        tracing::info!(
            "Greedy tour over {} cities: {:.2}",
            cities.len(),
            tour.total_distance()
        );

        Ok(SolveReport {
            algorithm: Algorithm::Greedy,
            tour,
            iterations: 1,
            elapsed: started.elapsed(),
            stop_reason: StopReason::Completed,
        })
    }
}
