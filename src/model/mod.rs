//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (filter keys, pagination, request tokens, UI state)
//! - `session`: The search session state machine (reducer and store)
//! - `record`: Wire types for the catalog search payload
//! - `error`: Transition and request error types
//! - `discogs_client`: Discogs API client implementing the outbound call contract
//! - `app_model`: Main application model with state management methods

mod app_model;
mod discogs_client;
mod error;
mod record;
mod session;
mod types;

pub use app_model::AppModel;

pub use discogs_client::DiscogsClient;

pub use error::{SearchError, UnknownFilterKey};

pub use record::{Community, PageInfo, Record, SearchPage, TracklistEntry};

pub use session::{reduce, SearchAction, SearchSession, SearchSessionState};

pub use types::{
    ActiveSection, FilterKey, Pagination, PaginationPatch, RequestToken, SearchFilters,
    SearchParams, UiState, DEFAULT_PAGE_SIZE,
};
