//! Field rendering utilities for forms

use crate::state::QuestionField;
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field should be drawn
pub struct FieldView<'a> {
    pub field: QuestionField,
    pub value: &'a str,
    pub is_active: bool,
    pub error: Option<&'a str>,
}

/// Draw a bordered input with the field label on top and either its
/// validation message or its description underneath.
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView, palette: &Palette) {
    let border_color = if view.error.is_some() {
        palette.error
    } else if view.is_active {
        palette.accent
    } else {
        palette.border
    };

    let cursor = Span::styled("▌", Style::default().fg(palette.accent));
    let text_style = Style::default().fg(palette.text);

    let mut lines: Vec<Line> = if view.field.is_multiline() {
        view.value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, text_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(view.value, text_style))]
    };
    if view.is_active {
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
    }

    let footer = match view.error {
        Some(message) => Span::styled(format!(" {message} "), Style::default().fg(palette.error)),
        None => Span::styled(
            format!(" {} ", view.field.description()),
            Style::default().fg(palette.muted),
        ),
    };

    let block = Block::default()
        .title(format!(" {} ", view.field.label()))
        .title_bottom(Line::from(footer))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
