//! Archiving solver runs to disk.
//!
//! Each archived run gets its own directory under the outputs base:
//! `<base>/<Algorithm_Name>_<YYYYMMDD_HHMMSS>/` holding the session
//! transcript, the tour chart and the tour itself.

use crate::domain::Tour;
use crate::error::{Result, SalesmanError};
use crate::plot;
use crate::storage::points::write_points;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Transcript file name inside a run directory.
pub const LOGS_FILE: &str = "logs.txt";
/// Chart file name inside a run directory.
pub const CHART_FILE: &str = "chart.svg";
/// Tour file name inside a run directory.
pub const TOUR_FILE: &str = "tour.txt";

/// Writes run directories under a base directory.
#[derive(Debug, Clone)]
pub struct SolutionArchiver {
    base_dir: PathBuf,
}

impl SolutionArchiver {
    /// Create an archiver rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Create a fresh, timestamped directory for a run of `algorithm_name`.
    pub fn create_run_dir(&self, algorithm_name: &str) -> Result<PathBuf> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let dir = self
            .base_dir
            .join(format!("{}_{}", algorithm_name.replace(' ', "_"), timestamp));
        std::fs::create_dir_all(&dir).map_err(|e| SalesmanError::file_open(&dir, e))?;
        tracing::debug!("Created run directory {}", dir.display());
        Ok(dir)
    }

    /// Write the session transcript.
    pub fn save_logs(&self, transcript: &str, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(LOGS_FILE);
        std::fs::write(&path, transcript).map_err(|e| SalesmanError::file_open(&path, e))?;
        Ok(path)
    }

    /// Render the tour chart.
    pub fn save_chart(&self, tour: &Tour, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CHART_FILE);
        plot::save_tour_chart(tour, &path)?;
        Ok(path)
    }

    /// Write the tour in point file format, in visiting order.
    pub fn save_tour(&self, tour: &Tour, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(TOUR_FILE);
        let points: Vec<_> = tour.cities().iter().map(|c| c.point).collect();
        write_points(&path, &points)?;
        Ok(path)
    }

    /// Create a run directory and write transcript, chart and tour into it.
    pub fn archive(&self, algorithm_name: &str, tour: &Tour, transcript: &str) -> Result<PathBuf> {
        let dir = self.create_run_dir(algorithm_name)?;
        self.save_logs(transcript, &dir)?;
        self.save_chart(tour, &dir)?;
        self.save_tour(tour, &dir)?;
        tracing::info!("Archived {} run to {}", algorithm_name, dir.display());
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, Point};
    use crate::storage::read_points;
    use tempfile::tempdir;

    fn tour() -> Tour {
        Tour::new(vec![
            City::new("City2", 10, 0),
            City::new("City1", 0, 0),
            City::new("City3", 10, 10),
        ])
        .unwrap()
    }

    #[test]
    fn run_dir_is_named_after_algorithm() {
        let base = tempdir().unwrap();
        let archiver = SolutionArchiver::new(base.path().join("outputs"));

        let dir = archiver.create_run_dir("Ant Colony Optimization").unwrap();

        assert!(dir.is_dir());
        assert!(dir.starts_with(archiver.base_dir()));
        let name = dir.file_name().unwrap().to_string_lossy().to_string();
        let stamp = name.strip_prefix("Ant_Colony_Optimization_").unwrap();
        assert_eq!(stamp.len(), "YYYYMMDD_HHMMSS".len());
        assert_eq!(stamp.as_bytes()[8], b'_');
    }

    #[test]
    fn archive_writes_all_artifacts() {
        let base = tempdir().unwrap();
        let archiver = SolutionArchiver::new(base.path());

        let dir = archiver
            .archive("Greedy Algorithm", &tour(), "line one\nline two\n")
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.join(LOGS_FILE)).unwrap(),
            "line one\nline two\n"
        );
        assert!(dir.join(CHART_FILE).is_file());
        assert_eq!(
            read_points(&dir.join(TOUR_FILE)).unwrap(),
            vec![Point::new(10, 0), Point::new(0, 0), Point::new(10, 10)]
        );
    }
}
