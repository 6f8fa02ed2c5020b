//! Home page question list

use super::components::tag_badges;
use crate::app::App;
use crate::format::{format_number, timestamp};
use crate::state::{HomeFilter, Question};
use crate::theme::Palette;
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the filter bar and question cards
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let listing = &app.state.listing;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(filter_bar(listing.filter, palette)),
        chunks[0],
    );

    let block = Block::default()
        .title(" All Questions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let visible = listing.visible();
    if visible.is_empty() {
        let message = if app.state.server_connected {
            "No questions found.\nPress 'a' to ask the first one."
        } else {
            "Not connected to the question service.\nPress 'r' to retry."
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(palette.muted))
            .block(block);
        frame.render_widget(content, chunks[1]);
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, question)| {
            question_card(question, idx == listing.selected_index, palette, now)
        })
        .collect();

    // Keep the selected card scrolled into view
    let mut list_state = ListState::default().with_selected(Some(listing.selected_index));
    frame.render_stateful_widget(List::new(items).block(block), chunks[1], &mut list_state);
}

fn filter_bar(active: HomeFilter, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for filter in HomeFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!("[{}]", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("f:cycle", Style::default().fg(palette.muted)));
    Line::from(spans)
}

fn question_card<'a>(
    question: &'a Question,
    is_selected: bool,
    palette: &Palette,
    now: chrono::DateTime<Utc>,
) -> ListItem<'a> {
    let prefix = if is_selected { "▸ " } else { "  " };
    let title_style = if is_selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
    };

    let tag_names: Vec<&str> = question.tags.iter().map(|t| t.name.as_str()).collect();
    let mut tags = vec![Span::raw("  ")];
    tags.extend(tag_badges(&tag_names, palette));

    let meta = Line::from(vec![
        Span::raw("  "),
        Span::styled(question.author.name.as_str(), Style::default().fg(palette.text)),
        Span::styled(
            format!(" • asked {}", timestamp(question.created_at, now)),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format!(
                "   {} Votes  {} Answers  {} Views",
                format_number(question.upvotes),
                format_number(u64::from(question.answer_count)),
                format_number(question.views),
            ),
            Style::default().fg(palette.muted),
        ),
    ]);

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(prefix, title_style),
            Span::styled(question.title.as_str(), title_style),
        ]),
        Line::from(tags),
        meta,
        Line::from(""),
    ])
}
