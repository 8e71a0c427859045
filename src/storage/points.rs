//! Point file reading and writing.
//!
//! The format is whitespace separated: a point count, then one
//! `index x y` record per point with 1-based indices.
//!
//! ```text
//! 3
//! 1 10 20
//! 2 30 40
//! 3 50 60
//! ```

use crate::domain::Point;
use crate::error::{Result, SalesmanError};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Source and sink for problem points.
pub trait PointRepository: Send {
    /// Load all points.
    fn load_points(&self) -> Result<Vec<Point>>;
    /// Replace stored points.
    fn save_points(&self, points: &[Point]) -> Result<()>;
    /// Human-readable location, for messages.
    fn location(&self) -> String;
}

/// Point repository backed by a single file.
#[derive(Debug, Clone)]
pub struct FilePointRepository {
    path: PathBuf,
}

impl FilePointRepository {
    /// Create a repository for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PointRepository for FilePointRepository {
    fn load_points(&self) -> Result<Vec<Point>> {
        read_points(&self.path)
    }

    fn save_points(&self, points: &[Point]) -> Result<()> {
        write_points(&self.path, points)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read a point file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    if !path.exists() {
        return Err(SalesmanError::file_not_found(path));
    }
    let content =
        std::fs::read_to_string(path).map_err(|e| SalesmanError::file_open(path, e))?;
    let points = parse_points(&content)?;
    tracing::info!("Read {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Parse point file content.
pub fn parse_points(content: &str) -> Result<Vec<Point>> {
    let mut tokens = content.split_whitespace();

    let count: usize = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| SalesmanError::invalid_format("first line must contain point count"))?;

    let mut points = Vec::with_capacity(count.min(1 << 16));
    for k in 1..=count {
        tokens
            .next()
            .and_then(|t| t.parse::<i64>().ok())
            .ok_or_else(|| SalesmanError::invalid_format(format!("Missing index for point {}", k)))?;
        let x = coordinate(tokens.next(), "X", k)?;
        let y = coordinate(tokens.next(), "Y", k)?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

fn coordinate(token: Option<&str>, axis: &str, k: usize) -> Result<i32> {
    let token = token.ok_or_else(|| {
        SalesmanError::invalid_format(format!("Missing {} coordinate for point {}", axis, k))
    })?;
    token.parse().map_err(|_| {
        SalesmanError::invalid_format(format!("Invalid coordinate format for point {}", k))
    })
}

/// Write points, replacing any existing file.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(SalesmanError::NothingToSave);
    }

    let mut text = format!("{}\n", points.len());
    for (i, p) in points.iter().enumerate() {
        let _ = writeln!(text, "{} {} {}", i + 1, p.x, p.y);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SalesmanError::file_open(parent, e))?;
    }
    std::fs::write(path, text).map_err(|e| SalesmanError::file_open(path, e))?;

    tracing::info!("Wrote {} points to {}", points.len(), path.display());
    Ok(())
}
