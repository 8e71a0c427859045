//! Keymap help bar UI component.

use crate::app::Mode;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Key hints for a mode.
pub(super) fn keymap_text(mode: &Mode) -> &'static str {
    match mode {
        Mode::Menu => "q:quit | jk/↑↓:nav | Enter:select | 1-7:choose | y:copy tour | T:theme",
        Mode::Prompt(_) => "0-9:type | Backspace:delete | Enter:confirm | Esc:cancel",
        Mode::ChooseAlgorithm(_) => "jk/↑↓:nav | 1-2:choose | Enter:select | Esc:cancel",
        Mode::Solving => "Esc:stop solver (keeps best tour so far)",
    }
}

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, mode: &Mode, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(keymap_text(mode)).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
