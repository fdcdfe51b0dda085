//! Layout rendering (query bar, filter panel, status line)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, SearchSessionState, UiState};

pub fn render_query_bar(
    frame: &mut Frame,
    area: Rect,
    session: &SearchSessionState,
    ui_state: &UiState,
) {
    let active = ui_state.active_section == ActiveSection::Query;

    let text = if session.query.is_empty() && !active {
        "Type to search the catalog...".to_string()
    } else if session.loading {
        format!("{} (searching...)", session.query)
    } else {
        session.query.clone()
    };

    let style = if active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let query = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if active {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(query, area);
}

pub fn render_filter_panel(
    frame: &mut Frame,
    area: Rect,
    session: &SearchSessionState,
    ui_state: &UiState,
) {
    let active = ui_state.active_section == ActiveSection::Filters;

    let items: Vec<ListItem> = session
        .filters
        .entries()
        .enumerate()
        .map(|(i, (key, value))| {
            let text = if value.is_empty() {
                format!("{}: -", key)
            } else {
                format!("{}: {}", key, value)
            };
            let mut style = if value.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            if active && i == ui_state.filter_selected {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .border_style(if active {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(list, area);
}

pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    session: &SearchSessionState,
    ui_state: &UiState,
) {
    let pagination = &session.pagination;
    let status = if session.loading {
        " Searching...".to_string()
    } else if let Some(record) = session.results.get(ui_state.result_selected) {
        let mut parts = vec![format!(
            "Page {}/{} · {} records",
            pagination.current_page,
            pagination.total_pages.max(1),
            pagination.total_items,
        )];
        if !record.genres.is_empty() {
            parts.push(record.genres.join("/"));
        }
        if !record.styles.is_empty() {
            parts.push(record.styles.join("/"));
        }
        if let Some(community) = record.community {
            parts.push(format!(
                "want {} / have {}",
                community.want.unwrap_or(0),
                community.have.unwrap_or(0)
            ));
        }
        format!(" {}", parts.join(" · "))
    } else {
        " Tab switch section · Enter search · Ctrl+R reset · Ctrl+Q quit".to_string()
    };

    let line = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(line, area);
}
