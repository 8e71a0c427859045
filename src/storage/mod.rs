//! Persistence: point files and archived solver runs.

mod archive;
mod points;

pub use archive::SolutionArchiver;
pub use points::{parse_points, read_points, write_points, FilePointRepository, PointRepository};
