//! Search, filter, and pagination intents

use crate::model::{ActiveSection, FilterKey, SearchAction};

use super::AppController;

impl AppController {
    /// Compose the current search parameters with the lifecycle manager
    /// and apply the outcome. A newer trigger supersedes any call still
    /// in flight.
    pub async fn trigger_search(&self) {
        if !self.model.can_search().await {
            tracing::debug!("search skipped, no query or filters set");
            return;
        }

        let params = self.model.search_params().await;
        tracing::debug!(query = %params.query, page = params.page, "performing catalog search");

        let client = self.client.clone();
        let outcome = self
            .lifecycle
            .execute(move |token| async move { client.search(&token, &params).await })
            .await;

        match outcome {
            Ok(Some(page)) => {
                tracing::info!(
                    results = page.results.len(),
                    page = page.pagination.page,
                    pages = page.pagination.pages,
                    "search completed"
                );
                self.model
                    .dispatch(SearchAction::SetResults {
                        results: page.results,
                        pagination: page.pagination.into(),
                    })
                    .await;
                self.model.reset_result_selection().await;
                self.model.set_active_section(ActiveSection::Results).await;
            }
            Ok(None) => {}
            Err(err) if err.is_cancelled() => {
                tracing::debug!("search superseded or cancelled");
            }
            Err(err) => {
                // Error state was already set by the lifecycle manager.
                tracing::error!(error = %err, "search failed");
            }
        }
    }

    pub async fn set_query(&self, query: String) {
        self.model.dispatch(SearchAction::SetQuery(query)).await;
    }

    pub async fn push_query_char(&self, c: char) {
        let mut query = self.model.session_snapshot().await.query;
        query.push(c);
        self.set_query(query).await;
    }

    pub async fn backspace_query(&self) {
        let mut query = self.model.session_snapshot().await.query;
        query.pop();
        self.set_query(query).await;
    }

    pub async fn update_filter(&self, key: FilterKey, value: String) {
        self.model
            .dispatch(SearchAction::UpdateFilter { key, value })
            .await;
    }

    pub async fn push_filter_char(&self, key: FilterKey, c: char) {
        let mut value = self.model.session_snapshot().await.filters.get(key).to_string();
        value.push(c);
        self.update_filter(key, value).await;
    }

    pub async fn backspace_filter(&self, key: FilterKey) {
        let mut value = self.model.session_snapshot().await.filters.get(key).to_string();
        value.pop();
        self.update_filter(key, value).await;
    }

    pub async fn clear_filter(&self, key: FilterKey) {
        self.update_filter(key, String::new()).await;
    }

    pub async fn reset_filters(&self) {
        self.model.dispatch(SearchAction::ResetFilters).await;
    }

    /// Reset the whole session to its initial state. Any in-flight call
    /// is cancelled; its late completion must not land on the fresh state.
    pub async fn reset_search(&self) {
        self.lifecycle.cancel_request().await;
        self.model.dispatch(SearchAction::ResetSearch).await;
        self.model.reset_result_selection().await;
    }

    pub async fn set_page(&self, page: u32) {
        self.model.dispatch(SearchAction::SetPage(page)).await;
    }

    pub async fn next_page(&self) {
        let pagination = self.model.session_snapshot().await.pagination;
        if pagination.current_page < pagination.total_pages {
            self.set_page(pagination.current_page + 1).await;
            self.trigger_search().await;
        }
    }

    pub async fn prev_page(&self) {
        let pagination = self.model.session_snapshot().await.pagination;
        if pagination.current_page > 1 {
            self.set_page(pagination.current_page - 1).await;
            self.trigger_search().await;
        }
    }

    pub async fn cancel_search(&self) {
        self.lifecycle.cancel_request().await;
    }
}
