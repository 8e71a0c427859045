//! Modal dialogs drawn over the main screen.

use super::ThemeColors;
use crate::app::{PromptState, SolveJob};
use crate::solver::Algorithm;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph},
    Frame,
};

fn dialog_block<'a>(title: &'a str, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
}

/// Number entry for the generate actions.
pub(super) fn draw_prompt(f: &mut Frame<'_>, prompt: &PromptState, colors: &ThemeColors) {
    let area = fixed_height_rect(60, 5, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![Line::from(vec![
        Span::styled(prompt.label(), Style::default().fg(colors.label)),
        Span::styled(prompt.buffer.clone(), Style::default().fg(colors.value)),
        Span::styled("_", Style::default().fg(colors.cursor_bg)),
    ])];
    if let Some(error) = &prompt.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors.error),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(" Number of Cities ", colors))
        .style(Style::default().fg(colors.text));
    f.render_widget(paragraph, area);
}

/// Algorithm picker.
pub(super) fn draw_algorithm_chooser(
    f: &mut Frame<'_>,
    cursor: usize,
    selected: Algorithm,
    colors: &ThemeColors,
) {
    let height = Algorithm::ALL.len() as u16 + 2;
    let area = fixed_height_rect(50, height, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem<'_>> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(idx, algorithm)| {
            let marker = if *algorithm == selected { "*" } else { " " };
            let text = format!("{} {}. {}", marker, idx + 1, algorithm.name());
            let style = if idx == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    f.render_widget(
        List::new(items).block(dialog_block(" Choose Algorithm ", colors)),
        area,
    );
}

/// Progress of a running solve.
pub(super) fn draw_progress(f: &mut Frame<'_>, job: &SolveJob, colors: &ThemeColors) {
    let area = fixed_height_rect(60, 3, f.area());
    f.render_widget(Clear, area);

    let (ratio, label) = match job.progress {
        Some(progress) => (
            progress.ratio(),
            format!(
                "{}/{} best {:.2}",
                progress.iteration, progress.max_iterations, progress.best_length
            ),
        ),
        None => (0.0, "starting...".to_string()),
    };
    let title = format!(" {} ", job.algorithm.name());

    let gauge = Gauge::default()
        .block(dialog_block(&title, colors))
        .gauge_style(Style::default().fg(colors.route).bg(colors.status_bg))
        .ratio(ratio)
        .label(label);
    f.render_widget(gauge, area);
}

fn fixed_height_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let top = r.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_is_centered() {
        let area = fixed_height_rect(50, 4, Rect::new(0, 0, 100, 20));
        assert_eq!(area.height, 4);
        assert_eq!(area.y, 8);
        assert_eq!(area.width, 50);
        assert_eq!(area.x, 25);
    }

    #[test]
    fn dialog_shrinks_on_tiny_screens() {
        let area = fixed_height_rect(50, 10, Rect::new(0, 0, 40, 3));
        assert!(area.height <= 3);
    }
}
