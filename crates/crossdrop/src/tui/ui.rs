//! Stateless UI rendering for the crossword board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crossdrop_puzzle::{CellView, Coord};

use super::app::{App, Focus};

/// Width of one grid cell in terminal columns.
const CELL_WIDTH: u16 = 3;

/// Renders the board, the pool and the status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board + pool
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = app.view().title.as_deref().unwrap_or("Untitled");
    let heading = format!(
        "Crossdrop - {} ({}/{} words)",
        title,
        app.view().placed,
        app.view().total
    );
    let heading = Paragraph::new(heading)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let width = grid_width(app.view().cols);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(width), Constraint::Min(20)])
        .split(chunks[1]);

    draw_grid(frame, body[0], app);
    draw_pool(frame, body[1], app);

    let status_style = if app.view().solved {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Columns needed for a grid of `cols` cells plus its border.
fn grid_width(cols: usize) -> u16 {
    u16::try_from(cols)
        .unwrap_or(u16::MAX)
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2)
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border)
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let highlighted = app.auto_solved_cells();
    let focused = app.focus() == Focus::Grid;

    let lines: Vec<Line> = app
        .view()
        .grid()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .into_iter()
                .enumerate()
                .map(|(col, cell)| {
                    let coord = Coord::new(row, col);
                    let (symbol, style) = cell_symbol(cell, highlighted.contains(&coord));
                    let style = if focused && coord == app.cursor() {
                        style.bg(Color::White).fg(Color::Black)
                    } else {
                        style
                    };
                    Span::styled(symbol, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).block(panel("Grid", focused));
    frame.render_widget(grid, area);
}

fn cell_symbol(cell: CellView, auto_solved: bool) -> (String, Style) {
    match cell {
        CellView::Blocked => ("███".to_string(), Style::default().fg(Color::DarkGray)),
        CellView::Hidden { start: true } => (" • ".to_string(), Style::default().fg(Color::Gray)),
        CellView::Hidden { start: false } => (" · ".to_string(), Style::default().fg(Color::Gray)),
        CellView::Revealed(letter) => {
            let color = if auto_solved { Color::Magenta } else { Color::Blue };
            (
                format!(" {} ", letter),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    }
}

fn draw_pool(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Pool;

    let mut lines: Vec<Line> = app
        .view()
        .tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            let holding = app.held() == Some(&tile.id);
            let marker = if holding { "✋" } else { "  " };
            let text = format!(
                "{} [{}] {} ({})",
                marker,
                tile.orientation.badge(),
                tile.text,
                tile.len()
            );
            let style = if focused && index == app.selected() {
                Style::default().bg(Color::White).fg(Color::Black)
            } else if holding {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::from("All words placed."));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ select  r rotate  Enter pick/drop  Esc drop off-grid",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "Tab switch  h hint  n new  q quit",
        Style::default().fg(Color::DarkGray),
    )));

    let pool = Paragraph::new(lines).block(panel("Words", focused));
    frame.render_widget(pool, area);
}
