//! Ask-a-question form

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::{FormFocus, FormPhase, QuestionField, QuestionForm, MAX_TAGS};
use crate::ui::components::{render_button, tag_badges, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Submit button label while idle and while the question is posting
fn submit_label(form: &QuestionForm) -> &'static str {
    match form.phase() {
        FormPhase::Submitting => "Posting...",
        FormPhase::Editing | FormPhase::Validating => "Ask a Question",
    }
}

/// Draw the ask-a-question page
pub fn draw_question_form(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let form = &app.state.question_form;

    let block = Block::default()
        .title(Span::styled(
            " Ask a public question ",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Min(6),                // Explanation
            Constraint::Length(3),             // Tag input
            Constraint::Length(1),             // Tag badges
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    let focus = form.focus();
    let values = form.values();

    for (field, area) in QuestionField::ALL.into_iter().zip(chunks.iter().copied()) {
        let value = match field {
            QuestionField::Title => values.title.as_str(),
            QuestionField::Explanation => values.explanation.as_str(),
            QuestionField::Tags => form.tag_input(),
        };
        draw_field(
            frame,
            area,
            FieldView {
                field,
                value,
                is_active: focus.field() == Some(field),
                error: form.field_error(field),
            },
            palette,
        );
    }

    let mut badge_line = vec![Span::styled(
        format!(" {}/{MAX_TAGS} ", values.tags.len()),
        Style::default().fg(palette.muted),
    )];
    if values.tags.is_empty() {
        badge_line.push(Span::styled("no tags yet", Style::default().fg(palette.muted)));
    } else {
        let tags: Vec<&str> = values.tags.iter().collect();
        badge_line.extend(tag_badges(&tags, palette));
    }
    frame.render_widget(Paragraph::new(Line::from(badge_line)), chunks[3]);

    let footer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(chunks[4]);
    render_button(
        frame,
        footer[0],
        submit_label(form),
        focus == FormFocus::SubmitButton,
        !form.is_submitting(),
        palette,
    );

    let failed_visible = !form.is_submitting() && app.state.submission.last_error().is_some();
    if failed_visible && footer[1].height > 0 {
        let failed = Paragraph::new(Line::from(Span::styled(
            " Posting failed, press Ctrl+S to retry",
            Style::default().fg(palette.error),
        )));
        let label_area = Rect {
            y: footer[1].y + footer[1].height / 2,
            height: 1,
            ..footer[1]
        };
        frame.render_widget(failed, label_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label_reflects_phase() {
        let mut form = QuestionForm::new();
        assert_eq!(submit_label(&form), "Ask a Question");
        form.mark_submitting();
        assert_eq!(submit_label(&form), "Posting...");
        form.mark_editing();
        assert_eq!(submit_label(&form), "Ask a Question");
    }
}
