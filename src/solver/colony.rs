//! Adaptive ant colony optimisation.
//!
//! Max-min ant system with best-tour reinforcement, 2-opt on every ant and
//! stagnation-driven adaptation of the pheromone/visibility exponents.

use super::ant::{Ant, Weights};
use super::two_opt;
use super::{Algorithm, SolveControl, SolveReport, StopReason, TspSolver};
use crate::config::ColonyConfig;
use crate::domain::{City, Tour};
use crate::error::{Result, SalesmanError};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Ant colony solver.
#[derive(Debug, Clone)]
pub struct AntColonySolver {
    config: ColonyConfig,
}

/// Ants built in one iteration.
#[derive(Debug)]
struct Iteration {
    ants: Vec<Ant>,
    improved: bool,
    interrupted: bool,
}

/// Mutable state of one colony run.
#[derive(Debug)]
struct Colony<'a> {
    config: &'a ColonyConfig,
    distances: Array2<f64>,
    pheromones: Array2<f64>,
    weights: Weights,
    stagnation: usize,
    best: Option<Ant>,
    rng: StdRng,
}

impl AntColonySolver {
    /// Create a solver with the given tuning.
    pub fn new(config: ColonyConfig) -> Self {
        Self { config }
    }
}

impl Default for AntColonySolver {
    fn default() -> Self {
        Self::new(ColonyConfig::default())
    }
}

impl TspSolver for AntColonySolver {
    fn solve(&mut self, cities: &[City], control: &SolveControl) -> Result<SolveReport> {
        if cities.is_empty() {
            return Err(SalesmanError::EmptyInput);
        }

        let started = Instant::now();
        let n = cities.len();
        let ants = self.config.ant_count(n);
        let max_iterations = self.config.max_iterations(n);
        let mut colony = Colony::new(&self.config, cities);

        tracing::info!(
            "Ant colony on {} cities: {} ants, up to {} iterations",
            n,
            ants,
            max_iterations
        );

        let mut iterations = 0;
        let mut without_improvement = 0;
        let mut stop_reason = StopReason::Completed;

        while iterations < max_iterations {
            if control.is_cancelled() {
                stop_reason = StopReason::Cancelled;
                break;
            }
            if iterations > 0 && started.elapsed() > self.config.time_limit {
                stop_reason = StopReason::TimeLimit;
                break;
            }

            let iteration = colony.run_iteration(ants, control);
            iterations += 1;
            if iteration.interrupted {
                stop_reason = StopReason::Cancelled;
                control.report(iterations, max_iterations, colony.best_length());
                break;
            }
            colony.update_pheromones(&iteration.ants);

            if iteration.improved {
                without_improvement = 0;
                colony.stagnation = colony.stagnation.saturating_sub(2);
            } else {
                without_improvement += 1;
                colony.stagnation += 1;
                colony.adapt_weights();
            }

            let best_length = colony.best_length();
            control.report(iterations, max_iterations, best_length);
            tracing::trace!("Iteration {}: best {:.2}", iterations, best_length);

            if without_improvement >= self.config.stagnation_limit {
                stop_reason = StopReason::Stagnated;
                break;
            }
        }

        let Some(best) = colony.best else {
            return Err(SalesmanError::Cancelled);
        };
        let tour = Tour::new(best.tour.iter().map(|&idx| cities[idx].clone()).collect())?;

        tracing::info!(
            "Ant colony {} after {} iterations: {:.2}",
            stop_reason.describe(),
            iterations,
            tour.total_distance()
        );

        Ok(SolveReport {
            algorithm: Algorithm::AntColony,
            tour,
            iterations,
            elapsed: started.elapsed(),
            stop_reason,
        })
    }
}

impl<'a> Colony<'a> {
    fn new(config: &'a ColonyConfig, cities: &[City]) -> Self {
        let n = cities.len();
        let distances = Array2::from_shape_fn((n, n), |(i, j)| {
            if i == j {
                0.0
            } else {
                cities[i].distance_to(&cities[j])
            }
        });
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            distances,
            pheromones: Array2::from_elem((n, n), config.initial_pheromone),
            weights: Weights {
                pheromone: config.pheromone_weight,
                visibility: config.visibility_weight,
            },
            stagnation: 0,
            best: None,
            rng,
        }
    }

    fn best_length(&self) -> f64 {
        self.best.as_ref().map_or(f64::MAX, |ant| ant.length)
    }

    /// Let every ant build and polish a tour.
    ///
    /// Cancellation is checked before each ant, but only once a best tour
    /// exists, so an interrupted run always has something to return.
    fn run_iteration(&mut self, ants: usize, control: &SolveControl) -> Iteration {
        let mut generation = Vec::with_capacity(ants);
        let mut improved = false;

        for _ in 0..ants {
            if self.best.is_some() && control.is_cancelled() {
                return Iteration {
                    ants: generation,
                    improved,
                    interrupted: true,
                };
            }
            let mut ant = Ant::construct(&self.distances, &self.pheromones, self.weights, &mut self.rng);
            two_opt::improve(&mut ant.tour, &self.distances, self.config.min_two_opt_gain);
            ant.length = two_opt::tour_length(&ant.tour, &self.distances);

            if ant.length < self.best_length() {
                self.best = Some(ant.clone());
                improved = true;
            }
            generation.push(ant);
        }

        Iteration {
            ants: generation,
            improved,
            interrupted: false,
        }
    }

    fn update_pheromones(&mut self, generation: &[Ant]) {
        let keep = 1.0 - self.config.evaporation;
        self.pheromones.mapv_inplace(|tau| tau * keep);

        for ant in generation {
            self.deposit(&ant.tour, self.config.deposit / ant.length);
        }
        if let Some(best) = self.best.take() {
            self.deposit(&best.tour, self.config.deposit / best.length);
            self.best = Some(best);
        }

        let (min, max) = (self.config.min_pheromone, self.config.max_pheromone);
        self.pheromones.mapv_inplace(|tau| tau.clamp(min, max));
    }

    fn deposit(&mut self, tour: &[usize], amount: f64) {
        let n = tour.len();
        for i in 0..n {
            let a = tour[i];
            let b = tour[(i + 1) % n];
            self.pheromones[[a, b]] += amount;
            self.pheromones[[b, a]] += amount;
        }
    }

    /// Shift weight toward visibility while stuck, back toward pheromone otherwise.
    fn adapt_weights(&mut self) {
        let w = &mut self.weights;
        if self.stagnation > self.config.adapt_threshold {
            w.visibility = (w.visibility + 0.5).min(10.0);
            w.pheromone = (w.pheromone - 0.2).max(0.5);
        } else {
            w.visibility = (w.visibility - 0.1).max(1.0);
            w.pheromone = (w.pheromone + 0.1).min(2.0);
        }
    }
}
