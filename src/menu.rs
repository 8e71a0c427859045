//! Main menu model.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Actions reachable from the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Load points from the data file.
    LoadData,
    /// Generate random points.
    GenerateData,
    /// Generate random points and write them to the data file.
    GenerateAndSave,
    /// Pick the solving algorithm.
    ChooseAlgorithm,
    /// Run the selected solver.
    Solve,
    /// Archive the last result.
    SaveOutputs,
    /// Leave the application.
    Exit,
}

impl MenuAction {
    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::LoadData => "Load data from file",
            MenuAction::GenerateData => "Generate random data",
            MenuAction::GenerateAndSave => "Generate and save data",
            MenuAction::ChooseAlgorithm => "Choose algorithm",
            MenuAction::Solve => "Solve TSP",
            MenuAction::SaveOutputs => "Save outputs",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Selectable list of actions with a cursor.
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    items: Vec<MenuAction>,
    cursor: usize,
}

impl Menu {
    /// Create a menu. Panics in debug builds if `items` is empty.
    pub fn new(title: impl Into<String>, items: Vec<MenuAction>) -> Self {
        debug_assert!(!items.is_empty(), "menu must have at least one item");
        Self {
            title: title.into(),
            items,
            cursor: 0,
        }
    }

    /// The application's main menu.
    pub fn main() -> Self {
        Self::new(
            "Main Menu",
            vec![
                MenuAction::LoadData,
                MenuAction::GenerateData,
                MenuAction::GenerateAndSave,
                MenuAction::ChooseAlgorithm,
                MenuAction::Solve,
                MenuAction::SaveOutputs,
                MenuAction::Exit,
            ],
        )
    }

    /// Menu title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items in display order.
    pub fn items(&self) -> &[MenuAction] {
        &self.items
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move cursor up, wrapping to the bottom.
    pub fn cursor_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.items.len() - 1);
    }

    /// Move cursor down, wrapping to the top.
    pub fn cursor_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
    }

    /// Action under the cursor.
    pub fn current(&self) -> Option<MenuAction> {
        self.items.get(self.cursor).copied()
    }

    /// Resolve a 1-based choice and move the cursor to it.
    pub fn choose(&mut self, choice: i64) -> Option<MenuAction> {
        let idx = usize::try_from(choice).ok()?.checked_sub(1)?;
        let action = self.items.get(idx).copied()?;
        self.cursor = idx;
        Some(action)
    }

    /// Numbered label, truncated to `max_width` display columns.
    pub fn entry(&self, idx: usize, max_width: usize) -> String {
        let label = self.items.get(idx).map_or("", |a| a.label());
        format!("{}. {}", idx + 1, truncate_to_width(label, max_width))
    }
}

/// Cut `text` so it occupies at most `max_width` terminal columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut width = 0;
    for (idx, c) in text.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            return &text[..idx];
        }
    }
    text
}
