//! Salesman - A terminal travelling salesman solver.
//!
//! Salesman loads or generates a set of cities, solves the closed tour with
//! either a greedy nearest-neighbour heuristic or an adaptive ant colony,
//! and archives each result with its console log and an SVG chart.
//!
//! # Features
//!
//! - Point files with a strict, line-based format
//! - Greedy and ant colony solvers behind one trait
//! - Background solving with progress and cancellation
//! - Tour chart in the terminal and as SVG
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use salesman::domain::{cities_from_points, PointGenerator};
//! use salesman::solver::{GreedySolver, SolveControl, TspSolver};
//!
//! let points = PointGenerator::seeded(7).generate(25)?;
//! let report = GreedySolver::new().solve(&cities_from_points(&points), &SolveControl::new())?;
//! println!("{}", report.tour);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod domain;
pub mod error;
pub mod menu;
pub mod plot;
pub mod solver;
pub mod storage;
pub mod transcript;
pub mod ui;

pub use error::{Result, SalesmanError};
