//! Main screen layout.

use super::keymap_bar::draw_keymap;
use super::overlay::{draw_algorithm_chooser, draw_progress, draw_prompt};
use super::status_bar::draw_status;
use super::tour_chart::draw_tour_chart;
use super::{format_elapsed, ThemeColors};
use crate::app::{preview_lines, App, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the main screen and any open dialog.
pub(super) fn draw_main(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let layout = &app.layout;

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(layout.menu_width_percent),
            Constraint::Percentage(100 - layout.menu_width_percent),
        ])
        .split(chunks[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(app.menu.items().len() as u16 + 2), Constraint::Min(0)])
        .split(content[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(100 - layout.transcript_height_percent),
            Constraint::Percentage(layout.transcript_height_percent),
        ])
        .split(content[1]);

    draw_menu(f, app, left[0], &colors);
    draw_session(f, app, left[1], &colors);
    draw_tour_chart(
        f,
        right[0],
        &app.session.points,
        app.session.last_report.as_ref().map(|r| &r.tour),
        layout.chart_padding_factor,
        &colors,
    );
    draw_transcript(f, app, right[1], &colors);

    draw_status(f, chunks[1], &app.status, &colors);
    draw_keymap(f, chunks[2], &app.mode, &colors);

    match &app.mode {
        Mode::Menu => {},
        Mode::Prompt(prompt) => draw_prompt(f, prompt, &colors),
        Mode::ChooseAlgorithm(cursor) => {
            draw_algorithm_chooser(f, *cursor, app.session.selected_algorithm, &colors)
        },
        Mode::Solving => {
            if let Some(job) = &app.job {
                draw_progress(f, job, &colors);
            }
        },
    }
}

fn draw_menu(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let cursor = app.menu.cursor();
    let items: Vec<ListItem<'_>> = app
        .menu
        .items()
        .iter()
        .enumerate()
        .map(|(idx, _)| {
            let style = if idx == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            ListItem::new(Line::from(app.menu.entry(idx, app.layout.max_label_width))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", app.menu.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(list, area);
}

fn field<'a>(label: &'a str, value: String, colors: &ThemeColors) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(colors.label)),
        Span::styled(value, Style::default().fg(colors.value)),
    ])
}

fn draw_session(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let session = &app.session;
    let mut lines = vec![
        field("Data file: ", app.config.data_file.display().to_string(), colors),
        field("Points: ", session.points.len().to_string(), colors),
        field("Algorithm: ", session.selected_algorithm.name().to_string(), colors),
    ];

    if let Some(report) = &session.last_report {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Last result",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(field("Solver: ", report.algorithm.name().to_string(), colors));
        lines.push(field(
            "Distance: ",
            format!("{:.2}", report.tour.total_distance()),
            colors,
        ));
        lines.push(field("Iterations: ", report.iterations.to_string(), colors));
        lines.push(field("Time: ", format_elapsed(report.elapsed), colors));
        lines.push(field("Stopped: ", report.stop_reason.describe().to_string(), colors));
        let saved = if session.is_result_saved { "yes" } else { "no" };
        lines.push(field("Saved: ", saved.to_string(), colors));
    }

    if !session.points.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Points Preview",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )));
        for line in preview_lines(&session.points, app.layout.preview_limit) {
            lines.push(Line::from(format!("  {}", line)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Session ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// First line to show so the newest lines fill a pane of `height` rows.
fn scroll_offset(total: usize, height: u16) -> usize {
    total.saturating_sub(height as usize)
}

fn draw_transcript(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let transcript = app.transcript.lines();
    let start = scroll_offset(transcript.len(), area.height.saturating_sub(2));
    let lines: Vec<Line<'_>> = transcript[start..]
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.text.as_str(),
                Style::default().fg(colors.line_color(line.kind)),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Console ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}
