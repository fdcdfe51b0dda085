//! Search session state machine.
//!
//! All session state is mutated through [`reduce`]: a pure transition
//! table applied to an owned state value, returning the next state. No
//! transition performs I/O, every transition is total over valid inputs,
//! and the same `(state, action)` pair always produces the same result.
//! The request lifecycle (loading/error flags driven by outbound calls)
//! lives in `controller::lifecycle`; it talks to this module exclusively
//! through [`SearchAction`] dispatches.

use super::record::Record;
use super::types::{FilterKey, Pagination, PaginationPatch, SearchFilters, SearchParams};

/// The complete state of one search session.
///
/// Created when a search screen opens, discarded when it closes. `results`
/// and `pagination` are only ever updated together (see
/// [`SearchAction::SetResults`]), so neither can go stale relative to the
/// other.
#[derive(Clone, Debug, Default)]
pub struct SearchSessionState {
    pub query: String,
    pub filters: SearchFilters,
    pub pagination: Pagination,
    pub results: Vec<Record>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SearchSessionState {
    /// Flatten query, filters, and the pagination cursor into the
    /// parameter record for one outbound call.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            query: self.query.clone(),
            filters: self.filters.clone(),
            page: self.pagination.current_page,
            per_page: self.pagination.items_per_page,
        }
    }

    /// Whether the session holds enough input to be worth searching:
    /// a non-blank query or at least one non-blank filter. This gates the
    /// UI trigger; the lifecycle manager does not enforce it.
    pub fn can_search(&self) -> bool {
        !self.query.trim().is_empty() || self.filters.any_set()
    }
}

/// The named transitions of the session state machine.
#[derive(Clone, Debug)]
pub enum SearchAction {
    /// Replace the query text. Filters and pagination are untouched.
    SetQuery(String),
    /// Replace one filter value, leaving the others untouched.
    UpdateFilter { key: FilterKey, value: String },
    /// Clear the query and all filters. Pagination is untouched.
    ResetFilters,
    /// Move the pagination cursor. Out-of-range values clamp into
    /// `[1, max(total_pages, 1)]` rather than being rejected.
    SetPage(u32),
    /// Replace the result set and merge a pagination patch, atomically.
    /// Does not touch `loading`; only the lifecycle manager drives it.
    SetResults {
        results: Vec<Record>,
        pagination: PaginationPatch,
    },
    /// Set the loading flag. `error` is untouched.
    SetLoading(bool),
    /// Set or clear the error message. Always forces `loading = false`.
    SetError(Option<String>),
    /// Return to the initial state.
    ResetSearch,
}

/// Apply one transition, producing the next state.
pub fn reduce(mut state: SearchSessionState, action: SearchAction) -> SearchSessionState {
    match action {
        SearchAction::SetQuery(query) => {
            state.query = query;
        }
        SearchAction::UpdateFilter { key, value } => {
            state.filters.set(key, value);
        }
        SearchAction::ResetFilters => {
            state.query.clear();
            state.filters = SearchFilters::default();
        }
        SearchAction::SetPage(page) => {
            state.pagination.current_page = page;
            state.pagination.clamp_page();
        }
        SearchAction::SetResults {
            results,
            pagination,
        } => {
            state.results = results;
            state.pagination.apply(pagination);
        }
        SearchAction::SetLoading(loading) => {
            state.loading = loading;
        }
        SearchAction::SetError(error) => {
            state.error = error;
            state.loading = false;
        }
        SearchAction::ResetSearch => {
            state = SearchSessionState::default();
        }
    }
    state
}

/// Owner of one session's state, exposing dispatch plus read access.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchSessionState,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: SearchAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    pub fn state(&self) -> &SearchSessionState {
        &self.state
    }

    pub fn snapshot(&self) -> SearchSessionState {
        self.state.clone()
    }

    pub fn search_params(&self) -> SearchParams {
        self.state.search_params()
    }

    pub fn can_search(&self) -> bool {
        self.state.can_search()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::DEFAULT_PAGE_SIZE;

    fn record(id: u64, title: &str) -> Record {
        Record {
            id,
            title: title.to_string(),
            artist: None,
            year: None,
            genres: vec![],
            styles: vec![],
            label: None,
            country: None,
            price: None,
            image_url: None,
            formats: vec![],
            tracklist: None,
            resource_url: String::new(),
            community: None,
        }
    }

    fn full_patch(page: u32, pages: u32, items: u64, per_page: u32) -> PaginationPatch {
        PaginationPatch {
            page: Some(page),
            pages: Some(pages),
            items: Some(items),
            per_page: Some(per_page),
        }
    }

    #[test]
    fn set_query_replaces_only_the_query() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::UpdateFilter {
            key: FilterKey::Genre,
            value: "jazz".to_string(),
        });
        session.dispatch(SearchAction::SetQuery("coltrane".to_string()));

        assert_eq!(session.state().query, "coltrane");
        assert_eq!(session.state().filters.genre, "jazz");
        assert_eq!(session.state().pagination, Pagination::default());
    }

    #[test]
    fn update_filter_touches_a_single_key() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::UpdateFilter {
            key: FilterKey::Country,
            value: "UK".to_string(),
        });
        session.dispatch(SearchAction::UpdateFilter {
            key: FilterKey::YearFrom,
            value: "1970".to_string(),
        });

        let filters = &session.state().filters;
        assert_eq!(filters.country, "UK");
        assert_eq!(filters.year_from, "1970");
        assert!(filters.genre.is_empty());
    }

    #[test]
    fn reset_filters_clears_query_and_filters_but_not_pagination() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::SetQuery("beatles".to_string()));
        session.dispatch(SearchAction::UpdateFilter {
            key: FilterKey::Label,
            value: "Apple".to_string(),
        });
        session.dispatch(SearchAction::SetResults {
            results: vec![],
            pagination: full_patch(3, 7, 321, 50),
        });
        session.dispatch(SearchAction::ResetFilters);

        assert!(session.state().query.is_empty());
        assert_eq!(session.state().filters, SearchFilters::default());
        assert_eq!(session.state().pagination.current_page, 3);
        assert_eq!(session.state().pagination.total_pages, 7);
    }

    #[test]
    fn set_page_clamps_out_of_range_values() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::SetResults {
            results: vec![],
            pagination: full_patch(1, 4, 200, 50),
        });

        session.dispatch(SearchAction::SetPage(0));
        assert_eq!(session.state().pagination.current_page, 1);

        session.dispatch(SearchAction::SetPage(99));
        assert_eq!(session.state().pagination.current_page, 4);

        // No results yet: total_pages is 0 and the only valid page is 1.
        session.dispatch(SearchAction::ResetSearch);
        session.dispatch(SearchAction::SetPage(5));
        assert_eq!(session.state().pagination.current_page, 1);
    }

    #[test]
    fn page_invariant_holds_over_any_transition_sequence() {
        let mut session = SearchSession::new();
        let actions = vec![
            SearchAction::SetPage(12),
            SearchAction::SetResults {
                results: vec![record(1, "a")],
                pagination: full_patch(2, 5, 240, 50),
            },
            SearchAction::SetPage(5),
            SearchAction::SetResults {
                results: vec![],
                pagination: PaginationPatch {
                    pages: Some(2),
                    ..PaginationPatch::default()
                },
            },
            SearchAction::ResetFilters,
            SearchAction::SetPage(0),
            SearchAction::ResetSearch,
        ];
        for action in actions {
            session.dispatch(action);
            let pagination = &session.state().pagination;
            assert!(pagination.current_page >= 1);
            assert!(pagination.current_page <= pagination.total_pages.max(1));
        }
    }

    #[test]
    fn set_results_merges_partial_pagination_patch() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::SetResults {
            results: vec![record(1, "a"), record(2, "b")],
            pagination: PaginationPatch {
                page: Some(2),
                pages: Some(5),
                items: Some(240),
                per_page: None,
            },
        });

        let state = session.state();
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.pagination.current_page, 2);
        assert_eq!(state.pagination.total_pages, 5);
        assert_eq!(state.pagination.total_items, 240);
        assert_eq!(state.pagination.items_per_page, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn set_results_leaves_loading_untouched() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::SetLoading(true));
        session.dispatch(SearchAction::SetResults {
            results: vec![record(1, "a")],
            pagination: PaginationPatch::default(),
        });
        assert!(session.state().loading);
    }

    #[test]
    fn set_loading_does_not_touch_error() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::SetError(Some("boom".to_string())));
        session.dispatch(SearchAction::SetLoading(true));
        assert_eq!(session.state().error.as_deref(), Some("boom"));
        assert!(session.state().loading);
    }

    #[test]
    fn set_error_forces_loading_false() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::SetLoading(true));
        session.dispatch(SearchAction::SetError(Some("Network timeout".to_string())));
        assert_eq!(session.state().error.as_deref(), Some("Network timeout"));
        assert!(!session.state().loading);

        // Clearing the error also clears loading.
        session.dispatch(SearchAction::SetLoading(true));
        session.dispatch(SearchAction::SetError(None));
        assert!(session.state().error.is_none());
        assert!(!session.state().loading);
    }

    #[test]
    fn reset_search_restores_the_initial_state() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::SetQuery("pink floyd".to_string()));
        session.dispatch(SearchAction::UpdateFilter {
            key: FilterKey::Style,
            value: "prog".to_string(),
        });
        session.dispatch(SearchAction::SetResults {
            results: vec![record(1, "a")],
            pagination: full_patch(3, 9, 420, 25),
        });
        session.dispatch(SearchAction::SetError(Some("boom".to_string())));
        session.dispatch(SearchAction::ResetSearch);

        let state = session.state();
        assert!(state.query.is_empty());
        assert_eq!(state.filters, SearchFilters::default());
        assert_eq!(state.pagination, Pagination::default());
        assert!(state.results.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn can_search_requires_query_or_filter() {
        let mut session = SearchSession::new();
        assert!(!session.can_search());

        session.dispatch(SearchAction::SetQuery("   ".to_string()));
        assert!(!session.can_search());

        session.dispatch(SearchAction::SetQuery("beatles".to_string()));
        assert!(session.can_search());

        session.dispatch(SearchAction::SetQuery(String::new()));
        session.dispatch(SearchAction::UpdateFilter {
            key: FilterKey::Genre,
            value: "rock".to_string(),
        });
        assert!(session.can_search());
    }

    #[test]
    fn search_params_reflect_the_current_cursor() {
        let mut session = SearchSession::new();
        session.dispatch(SearchAction::SetQuery("dub".to_string()));
        session.dispatch(SearchAction::SetResults {
            results: vec![],
            pagination: full_patch(2, 6, 300, 25),
        });

        let params = session.search_params();
        assert_eq!(params.query, "dub");
        assert_eq!(params.page, 2);
        assert_eq!(params.per_page, 25);
    }
}
