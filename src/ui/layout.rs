//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the app name, search box and theme
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let listing = &app.state.listing;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Logo
            Constraint::Min(20),    // Search
            Constraint::Length(16), // Theme
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("Dev", Style::default().fg(palette.text)),
        Span::styled(
            "Overflow",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(palette.border)));
    frame.render_widget(logo, chunks[0]);

    let search_border = if listing.search_focused {
        palette.accent
    } else {
        palette.border
    };
    let search_text = if listing.search_query.is_empty() && !listing.search_focused {
        Span::styled("Search questions...", Style::default().fg(palette.muted))
    } else {
        Span::styled(listing.search_query.as_str(), Style::default().fg(palette.text))
    };
    let mut search_line = vec![search_text];
    if listing.search_focused {
        search_line.push(Span::styled("▌", Style::default().fg(palette.accent)));
    }
    let search = Paragraph::new(Line::from(search_line)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(search_border)),
    );
    frame.render_widget(search, chunks[1]);

    let theme = Paragraph::new(app.theme.mode().label())
        .style(Style::default().fg(palette.muted))
        .block(
            Block::default()
                .title(" Theme ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(theme, chunks[2]);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.server_connected {
        Span::styled(" ● ", Style::default().fg(palette.success))
    } else {
        Span::styled(" ○ ", Style::default().fg(palette.error))
    };
    spans.push(conn_status);
    spans.push(Span::styled(
        format!("{} ", app.server_address),
        Style::default().fg(palette.muted),
    ));

    spans.push(Span::styled(
        format!("| {} ", app.state.current_view().title()),
        Style::default().fg(palette.text),
    ));

    // View-specific hints
    let hints = get_view_hints(app.state.current_view(), app.state.listing.search_focused);
    spans.push(Span::raw("| "));
    spans.push(Span::styled(hints, Style::default().fg(palette.muted)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.success)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.tag_bg));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View, searching: bool) -> &'static str {
    match view {
        View::Questions if searching => "type to filter  Enter:search server  Esc:done",
        View::Questions => "j/k:nav  /:search  f:filter  a:ask  r:reload  t:theme  q:quit",
        View::AskQuestion => "Tab:next  Enter:add tag  ^S:post  Esc:cancel",
    }
}
