//! Configuration for the session, the ant colony and the screen layout.

use std::path::PathBuf;
use std::time::Duration;

/// Default data file for load/save.
pub const DEFAULT_DATA_FILE: &str = "data.txt";

/// Default base directory for archived runs.
pub const DEFAULT_OUTPUTS_DIR: &str = "outputs";

/// Session-level settings, usually filled from command-line arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Point file used by load and save.
    pub data_file: PathBuf,
    /// Base directory for archived runs.
    pub outputs_dir: PathBuf,
    /// Seed for point generation and the colony, for reproducible sessions.
    pub seed: Option<u64>,
    /// Ant colony tuning.
    pub colony: ColonyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            outputs_dir: PathBuf::from(DEFAULT_OUTPUTS_DIR),
            seed: None,
            colony: ColonyConfig::default(),
        }
    }
}

/// Tuning for the ant colony solver.
#[derive(Debug, Clone)]
pub struct ColonyConfig {
    /// Pheromone on every edge before the first iteration.
    pub initial_pheromone: f64,
    /// Fraction of pheromone evaporated per iteration.
    pub evaporation: f64,
    /// Starting exponent on pheromone (alpha).
    pub pheromone_weight: f64,
    /// Starting exponent on visibility (beta).
    pub visibility_weight: f64,
    /// Deposit constant Q; an ant deposits `Q / length`.
    pub deposit: f64,
    /// Lower pheromone bound.
    pub min_pheromone: f64,
    /// Upper pheromone bound.
    pub max_pheromone: f64,
    /// Minimum colony size.
    pub min_ants: usize,
    /// Iterations without improvement before giving up.
    pub stagnation_limit: usize,
    /// Stagnation level above which weights shift toward visibility.
    pub adapt_threshold: usize,
    /// Wall-clock budget per solve.
    pub time_limit: Duration,
    /// Smallest 2-opt gain worth applying.
    pub min_two_opt_gain: f64,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            initial_pheromone: 0.1,
            evaporation: 0.5,
            pheromone_weight: 1.0,
            visibility_weight: 5.0,
            deposit: 100.0,
            min_pheromone: 0.01,
            max_pheromone: 10.0,
            min_ants: 20,
            stagnation_limit: 50,
            adapt_threshold: 10,
            time_limit: Duration::from_secs(180),
            min_two_opt_gain: 0.01,
            seed: None,
        }
    }
}

impl ColonyConfig {
    /// Number of ants for `cities` cities.
    pub fn ant_count(&self, cities: usize) -> usize {
        cities.max(self.min_ants)
    }

    /// Iteration cap, shrinking as instances grow.
    pub fn max_iterations(&self, cities: usize) -> usize {
        match cities {
            0..=20 => 500,
            21..=50 => 300,
            51..=100 => 200,
            _ => 100,
        }
    }
}

/// Screen layout settings.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Width of the left column in percent.
    pub menu_width_percent: u16,
    /// Height of the transcript pane in percent of the right column.
    pub transcript_height_percent: u16,
    /// Widest menu label before truncation.
    pub max_label_width: usize,
    /// Points listed in the preview after a load or generate.
    pub preview_limit: usize,
    /// Padding factor for chart bounds (0.05 = 5% margin).
    pub chart_padding_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            menu_width_percent: 34,
            transcript_height_percent: 35,
            max_label_width: 38,
            preview_limit: 10,
            chart_padding_factor: 0.05,
        }
    }
}
