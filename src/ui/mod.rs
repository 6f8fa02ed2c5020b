//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod questions;

use crate::app::App;
use crate::state::View;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view() {
        View::Questions => questions::draw(frame, main_area, app),
        View::AskQuestion => forms::draw_question_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockQuestionApi;
    use crate::config::TuiConfig;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app_with_error() -> App {
        let mut app = App::with_api(
            TuiConfig::default(),
            Arc::new(MockQuestionApi::new()),
            "http://test".to_string(),
        );
        app.push_error("Failed to post question: connection refused");
        app
    }

    #[test]
    fn test_error_overlay_draws_on_tiny_terminals() {
        let app = app_with_error();
        for (width, height) in [(6, 3), (3, 2), (1, 1)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal.draw(|frame| draw(frame, &app)).unwrap();
        }
    }

    #[test]
    fn test_error_overlay_shows_message() {
        let app = app_with_error();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("connection refused"));
    }
}
