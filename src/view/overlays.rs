//! Modal overlays (error, help)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::SearchSessionState;

pub fn render_error_popup(frame: &mut Frame, session: &SearchSessionState) {
    let Some(message) = &session.error else {
        return;
    };

    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(message.as_str())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error (Esc to dismiss) ")
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(popup, area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let text = "\
Tab / Shift+Tab  switch section
Enter            run the search
Esc              clear query / abort search / back
Up / Down        move selection
Left / Right     previous / next page
Delete           clear the selected filter
Ctrl+R           reset the session
Ctrl+Q           quit";

    let popup = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help (Esc to close) "),
        );
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
