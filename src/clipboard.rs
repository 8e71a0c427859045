//! Clipboard integration.

use crate::error::Result;
use crate::solver::SolveReport;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Plain-text summary of a solve: algorithm, route and visit list.
pub fn tour_summary(report: &SolveReport) -> String {
    let mut text = format!("Algorithm: {}\n", report.algorithm.name());
    text.push_str(&format!("Tour: {}\n", report.tour));
    text.push_str(&format!(
        "Iterations: {} ({})\n",
        report.iterations,
        report.stop_reason.describe()
    ));
    text.push_str("\nVisits:\n");
    for (i, city) in report.tour.cities().iter().enumerate() {
        text.push_str(&format!("  {:>3}. {} ({}, {})\n", i + 1, city.name, city.point.x, city.point.y));
    }
    text
}

/// Copy a solve summary to the clipboard.
pub fn copy_tour(report: &SolveReport) -> Result<()> {
    copy_to_clipboard(&tour_summary(report))
}
