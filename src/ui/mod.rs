//! User interface rendering.

mod formatters;
mod keymap_bar;
mod layout;
mod overlay;
mod status_bar;
mod theme;
mod tour_chart;

use crate::app::App;
use ratatui::Frame;

pub use formatters::{format_axis_label, format_elapsed};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    layout::draw_main(f, app);
}
