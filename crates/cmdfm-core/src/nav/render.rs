//! Drawing of the navigator screen.
//!
//! Layout, top to bottom: a two-row header (current directory and a rule),
//! the entry list, and a one-row footer with the key legend. The info
//! overlay is drawn as a centered popup on top of the list.

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::fs::entry::FileEntry;
use crate::fs::metadata::{format_time, FileMetadata};
use crate::nav::navigator::{NavMode, Navigator};

const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 1;
/// Header, footer and at least one list row.
const MIN_HEIGHT: u16 = HEADER_ROWS + FOOTER_ROWS + 1;

pub const KEY_LEGEND: &str = "↑↓:Navigate  Enter:Open  Backspace:Parent  i:Info  q:Quit";

/// Rows left for the entry list on a terminal `height` rows tall.
pub fn list_rows(height: u16) -> usize {
    height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize
}

/// Renders the whole navigator screen.
///
/// A terminal too short to show a single entry gets a notice instead.
pub fn render(f: &mut Frame, nav: &Navigator) {
    if f.area().height < MIN_HEIGHT {
        let notice = Line::from(Span::styled(
            "Terminal too small",
            Style::default().fg(Color::Yellow),
        ));
        f.render_widget(Paragraph::new(notice), f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(0),
            Constraint::Length(FOOTER_ROWS),
        ])
        .split(f.area());

    render_header(f, chunks[0], nav);
    render_list(f, chunks[1], nav);
    render_footer(f, chunks[2], nav.status());

    if let NavMode::ShowingInfo(metadata) = nav.mode() {
        render_info(f, metadata, &nav.config().date_format);
    }
}

fn render_header(f: &mut Frame, area: Rect, nav: &Navigator) {
    let title = format!("Current directory: {}", nav.state().current_dir().display());
    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_list(f: &mut Frame, area: Rect, nav: &Navigator) {
    let state = nav.state();
    if state.entries().is_empty() {
        let empty = Line::from(Span::styled(
            " (empty)",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        f.render_widget(Paragraph::new(empty), area);
        return;
    }

    let lines: Vec<Line> = state
        .visible_entries(area.height as usize)
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = state.scroll_offset() + i == state.selected_index();
            entry_line(entry, selected, area.width as usize)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn entry_line(entry: &FileEntry, selected: bool, width: usize) -> Line<'static> {
    let suffix = if entry.is_dir() { "/" } else { "" };
    let label = format!(" {}{}", entry.name(), suffix);

    let style = if selected {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else if entry.is_dir() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    // Pad the selected row so the highlight spans the full width.
    let label = if selected {
        format!("{label:<width$}")
    } else {
        label
    };
    Line::from(Span::styled(label, style))
}

fn render_footer(f: &mut Frame, area: Rect, status: Option<&str>) {
    let line = match status {
        Some(message) => Line::from(Span::styled(
            message.to_owned(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            KEY_LEGEND,
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_info(f: &mut Frame, metadata: &FileMetadata, date_format: &str) {
    let lines = vec![
        format!("Name:        {}", metadata.name()),
        format!("Size:        {} bytes", metadata.size()),
        format!("Type:        {}", metadata.type_label()),
        format!("Created:     {}", format_time(metadata.created(), date_format)),
        format!("Modified:    {}", format_time(metadata.modified(), date_format)),
        format!("Accessed:    {}", format_time(metadata.accessed(), date_format)),
        format!("Permissions: {}", metadata.permissions()),
        String::new(),
        "Press any key to continue...".to_owned(),
    ];

    let area = centered_rect(70, lines.len() as u16 + 2, f.area());
    f.render_widget(Clear, area);

    let content: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" File Information ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(popup, area);
}

/// A rectangle `percent_x` wide and `height` rows tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
