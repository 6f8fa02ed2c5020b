//! Tag badges

use crate::theme::Palette;
use ratatui::{style::Style, text::Span};

/// Render tag names as a row of badges separated by a space
pub fn tag_badges<'a>(tags: &[&'a str], palette: &Palette) -> Vec<Span<'a>> {
    let style = Style::default().fg(palette.tag_fg).bg(palette.tag_bg);
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (idx, tag) in tags.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {tag} "), style));
    }
    spans
}
