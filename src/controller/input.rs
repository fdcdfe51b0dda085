//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, SearchAction};

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Ctrl+Q quits from anywhere, including text entry.
        if let KeyCode::Char('q' | 'Q') = key.code {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                self.model.set_should_quit(true).await;
                return Ok(());
            }
        }

        // An error message blocks all other interactions until dismissed.
        if self.model.session_snapshot().await.error.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.model.dispatch(SearchAction::SetError(None)).await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        if self.model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    self.model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Ctrl+R resets the whole session from anywhere.
        if let KeyCode::Char('r' | 'R') = key.code {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                self.reset_search().await;
                return Ok(());
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.model.cycle_section_forward().await;
                return Ok(());
            }
            KeyCode::BackTab => {
                self.model.cycle_section_backward().await;
                return Ok(());
            }
            _ => {}
        }

        let active_section = self.model.get_ui_state().await.active_section;
        match active_section {
            ActiveSection::Query => self.handle_query_key(key).await,
            ActiveSection::Filters => self.handle_filter_key(key).await,
            ActiveSection::Results => self.handle_results_key(key).await,
        }

        Ok(())
    }

    async fn handle_query_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.spawn_search().await,
            KeyCode::Esc => self.set_query(String::new()).await,
            KeyCode::Backspace => self.backspace_query().await,
            KeyCode::Char(c) => self.push_query_char(c).await,
            _ => {}
        }
    }

    async fn handle_filter_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.model.filter_move_up().await,
            KeyCode::Down => self.model.filter_move_down().await,
            KeyCode::Enter => self.spawn_search().await,
            KeyCode::Backspace => {
                let selected = self.model.selected_filter().await;
                self.backspace_filter(selected).await;
            }
            KeyCode::Delete => {
                let selected = self.model.selected_filter().await;
                self.clear_filter(selected).await;
            }
            KeyCode::Char(c) => {
                let selected = self.model.selected_filter().await;
                self.push_filter_char(selected, c).await;
            }
            _ => {}
        }
    }

    async fn handle_results_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.model.result_move_up().await,
            KeyCode::Down => self.model.result_move_down().await,
            KeyCode::Left => {
                let controller = self.clone();
                tokio::spawn(async move {
                    controller.prev_page().await;
                });
            }
            KeyCode::Right => {
                let controller = self.clone();
                tokio::spawn(async move {
                    controller.next_page().await;
                });
            }
            KeyCode::Esc => {
                // Abort a search still in flight; otherwise jump back to the query.
                if self.model.session_snapshot().await.loading {
                    self.cancel_search().await;
                } else {
                    self.model.set_active_section(ActiveSection::Query).await;
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit(true).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.model.show_help_popup().await;
            }
            _ => {}
        }
    }

    /// Run the search in the background so a later intent can supersede
    /// a call still in flight.
    async fn spawn_search(&self) {
        if !self.model.can_search().await {
            return;
        }
        let controller = self.clone();
        tokio::spawn(async move {
            controller.trigger_search().await;
        });
    }
}
