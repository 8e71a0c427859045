//! TSP solvers.
//!
//! Two strategies are available behind the [`TspSolver`] trait:
//!
//! - [`GreedySolver`]: nearest-neighbour construction, instant but rough.
//! - [`AntColonySolver`]: adaptive ant colony optimisation with 2-opt
//!   local search, slower but close to optimal on small instances.
//!
//! Solvers report progress and observe cancellation through a
//! [`SolveControl`], so the UI can run them on a worker thread.

mod ant;
mod colony;
mod greedy;
mod two_opt;

pub use colony::AntColonySolver;
pub use greedy::GreedySolver;

use crate::config::ColonyConfig;
use crate::domain::{City, Tour};
use crate::error::Result;
use clap::ValueEnum;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

/// Available solving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Algorithm {
    /// Nearest-neighbour heuristic.
    Greedy,
    /// Ant colony optimisation.
    #[default]
    AntColony,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Greedy, Algorithm::AntColony];

    /// Map a 1-based menu choice. Unknown choices fall back to ant colony.
    pub fn from_choice(choice: i64) -> Self {
        match choice {
            1 => Algorithm::Greedy,
            _ => Algorithm::AntColony,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Greedy => "Greedy Algorithm",
            Algorithm::AntColony => "Ant Colony Optimization",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Ran to its natural end.
    Completed,
    /// No improvement for too many iterations.
    Stagnated,
    /// Hit the wall-clock limit.
    TimeLimit,
    /// Stopped by the caller.
    Cancelled,
}

impl StopReason {
    /// Short description for status lines.
    pub fn describe(self) -> &'static str {
        match self {
            StopReason::Completed => "completed",
            StopReason::Stagnated => "stagnated",
            StopReason::TimeLimit => "time limit reached",
            StopReason::Cancelled => "cancelled",
        }
    }
}

/// Events sent by a running solver.
#[derive(Debug)]
pub enum SolveEvent {
    /// An iteration finished.
    Progress {
        /// Iterations completed so far.
        iteration: usize,
        /// Iteration cap for this run.
        max_iterations: usize,
        /// Best closed length seen so far.
        best_length: f64,
    },
    /// The solve ended.
    Finished(Result<SolveReport>),
}

/// Cancellation flag and optional progress channel shared with a solver.
#[derive(Debug, Clone, Default)]
pub struct SolveControl {
    cancel: Arc<AtomicBool>,
    progress: Option<Sender<SolveEvent>>,
}

impl SolveControl {
    /// Control with no progress reporting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Control that forwards progress to `sender`.
    pub fn with_progress(sender: Sender<SolveEvent>) -> Self {
        Self {
            cancel: Arc::new(AtomicBool::new(false)),
            progress: Some(sender),
        }
    }

    /// Ask the solver to stop at its next checkpoint.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Forward a progress update. A dropped receiver is ignored.
    pub fn report(&self, iteration: usize, max_iterations: usize, best_length: f64) {
        if let Some(sender) = &self.progress {
            let _ = sender.send(SolveEvent::Progress {
                iteration,
                max_iterations,
                best_length,
            });
        }
    }
}

/// Outcome of a solve.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Strategy that produced the tour.
    pub algorithm: Algorithm,
    /// Best tour found.
    pub tour: Tour,
    /// Iterations performed (1 for single-pass solvers).
    pub iterations: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Why the solver stopped.
    pub stop_reason: StopReason,
}

/// A strategy that turns cities into a closed tour.
pub trait TspSolver: Send {
    /// Solve for the given cities.
    fn solve(&mut self, cities: &[City], control: &SolveControl) -> Result<SolveReport>;
}

/// Build the solver for an algorithm.
pub fn create_solver(algorithm: Algorithm, config: &ColonyConfig) -> Box<dyn TspSolver> {
    match algorithm {
        Algorithm::Greedy => Box::new(GreedySolver::new()),
        Algorithm::AntColony => Box::new(AntColonySolver::new(config.clone())),
    }
}
