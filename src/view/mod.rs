//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `layout`: Query bar, filter panel, status line
//! - `results`: Results table
//! - `overlays`: Modal overlays (error, help)

mod layout;
mod overlays;
mod results;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{SearchSessionState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, session: &SearchSessionState, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Query bar
                Constraint::Min(0),    // Filters + results
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_query_bar(frame, chunks[0], session, ui_state);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // Filter panel
                Constraint::Percentage(70), // Results
            ])
            .split(chunks[1]);

        layout::render_filter_panel(frame, main_chunks[0], session, ui_state);
        results::render_results(frame, main_chunks[1], session, ui_state);
        layout::render_status_line(frame, chunks[2], session, ui_state);

        if session.error.is_some() {
            overlays::render_error_popup(frame, session);
        } else if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
