//! Results table rendering

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::model::{ActiveSection, Record, SearchSessionState, UiState};

pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    session: &SearchSessionState,
    ui_state: &UiState,
) {
    let active = ui_state.active_section == ActiveSection::Results;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(if active {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        });

    if session.results.is_empty() {
        let hint = if session.loading {
            "Searching the catalog..."
        } else if session.can_search() {
            "Press Enter to search"
        } else {
            "Enter a query or set a filter to search"
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Keep the selected row visible within the table viewport.
    let visible = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(ui_state.result_selected, session.results.len(), visible);

    let header = Row::new(vec!["Title", "Year", "Label", "Country", "Format"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = session
        .results
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible.max(1))
        .map(|(i, record)| {
            let selected = active && i == ui_state.result_selected;
            let bg = if selected { Color::DarkGray } else { Color::Reset };
            Row::new(vec![
                Cell::from(format_title(record))
                    .style(Style::default().fg(Color::White).bg(bg)),
                Cell::from(record.year.clone().unwrap_or_default())
                    .style(Style::default().fg(Color::Yellow).bg(bg)),
                Cell::from(record.label.clone().unwrap_or_default())
                    .style(Style::default().fg(Color::Gray).bg(bg)),
                Cell::from(record.country.clone().unwrap_or_default())
                    .style(Style::default().fg(Color::Gray).bg(bg)),
                Cell::from(format_formats(record))
                    .style(Style::default().fg(Color::Blue).bg(bg)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn format_formats(record: &Record) -> String {
    record.formats.join(", ")
}

// Search results usually embed the artist in the title already; only
// prepend it when the catalog sent it as a separate field.
fn format_title(record: &Record) -> String {
    match &record.artist {
        Some(artist) if !artist.is_empty() => format!("{} - {}", artist, record.title),
        _ => record.title.clone(),
    }
}

fn scroll_offset(selected: usize, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    if selected < visible {
        0
    } else {
        (selected + 1 - visible).min(total - visible)
    }
}
