//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::session::{SearchAction, SearchSession, SearchSessionState};
use super::types::{ActiveSection, FilterKey, SearchParams, UiState};

/// Shared application model: the search session plus UI-local state.
///
/// The session is owned behind its own lock so the request lifecycle
/// manager can hold a handle to it independently of the UI state.
pub struct AppModel {
    session: Arc<Mutex<SearchSession>>,
    ui_state: Arc<Mutex<UiState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(SearchSession::new())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    /// Handle to the session store, for the request lifecycle manager.
    pub fn session_handle(&self) -> Arc<Mutex<SearchSession>> {
        self.session.clone()
    }

    pub async fn dispatch(&self, action: SearchAction) {
        self.session.lock().await.dispatch(action);
    }

    pub async fn session_snapshot(&self) -> SearchSessionState {
        self.session.lock().await.snapshot()
    }

    pub async fn search_params(&self) -> SearchParams {
        self.session.lock().await.search_params()
    }

    pub async fn can_search(&self) -> bool {
        self.session.lock().await.can_search()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    /// The filter key currently focused in the filter panel.
    pub async fn selected_filter(&self) -> FilterKey {
        let state = self.ui_state.lock().await;
        FilterKey::ALL[state.filter_selected % FilterKey::ALL.len()]
    }

    pub async fn filter_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.filter_selected > 0 {
            state.filter_selected -= 1;
        }
    }

    pub async fn filter_move_down(&self) {
        let mut state = self.ui_state.lock().await;
        if state.filter_selected < FilterKey::ALL.len() - 1 {
            state.filter_selected += 1;
        }
    }

    pub async fn result_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.result_selected > 0 {
            state.result_selected -= 1;
        }
    }

    pub async fn result_move_down(&self) {
        let result_count = self.session.lock().await.state().results.len();
        let mut state = self.ui_state.lock().await;
        if state.result_selected < result_count.saturating_sub(1) {
            state.result_selected += 1;
        }
    }

    /// Snap the result cursor back to the top, for a fresh result set.
    pub async fn reset_result_selection(&self) {
        let mut state = self.ui_state.lock().await;
        state.result_selected = 0;
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
