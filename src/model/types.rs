//! Core type definitions for the application

use std::fmt;
use std::str::FromStr;

use tokio_util::sync::CancellationToken;

use super::error::UnknownFilterKey;

/// Default number of results requested per page from the catalog.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Query,
    Filters,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Query => ActiveSection::Filters,
            ActiveSection::Filters => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Query,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Query => ActiveSection::Results,
            ActiveSection::Filters => ActiveSection::Query,
            ActiveSection::Results => ActiveSection::Filters,
        }
    }
}

/// UI-local state: focus and selection cursors. Everything the search
/// itself depends on lives in [`super::session::SearchSessionState`].
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub filter_selected: usize,
    pub result_selected: usize,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Query,
            filter_selected: 0,
            result_selected: 0,
            show_help_popup: false,
        }
    }
}

/// The recognized search filter keys.
///
/// The set is closed: parsing any other name fails with
/// [`UnknownFilterKey`] instead of silently accepting a key the catalog
/// would ignore.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKey {
    Genre,
    Style,
    Artist,
    Label,
    Country,
    YearFrom,
    YearTo,
    MinPrice,
    MaxPrice,
    MaxReleases,
}

impl FilterKey {
    /// All keys, in the order the filter panel displays them.
    pub const ALL: [FilterKey; 10] = [
        FilterKey::Genre,
        FilterKey::Style,
        FilterKey::Artist,
        FilterKey::Label,
        FilterKey::Country,
        FilterKey::YearFrom,
        FilterKey::YearTo,
        FilterKey::MinPrice,
        FilterKey::MaxPrice,
        FilterKey::MaxReleases,
    ];

    /// Canonical name, also used as the request parameter name.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Genre => "genre",
            FilterKey::Style => "style",
            FilterKey::Artist => "artist",
            FilterKey::Label => "label",
            FilterKey::Country => "country",
            FilterKey::YearFrom => "year_from",
            FilterKey::YearTo => "year_to",
            FilterKey::MinPrice => "min_price",
            FilterKey::MaxPrice => "max_price",
            FilterKey::MaxReleases => "max_releases",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = UnknownFilterKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFilterKey(s.to_string()))
    }
}

/// The filter values of a search session. An empty string means "unset".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub genre: String,
    pub style: String,
    pub artist: String,
    pub label: String,
    pub country: String,
    pub year_from: String,
    pub year_to: String,
    pub min_price: String,
    pub max_price: String,
    pub max_releases: String,
}

impl SearchFilters {
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Genre => &self.genre,
            FilterKey::Style => &self.style,
            FilterKey::Artist => &self.artist,
            FilterKey::Label => &self.label,
            FilterKey::Country => &self.country,
            FilterKey::YearFrom => &self.year_from,
            FilterKey::YearTo => &self.year_to,
            FilterKey::MinPrice => &self.min_price,
            FilterKey::MaxPrice => &self.max_price,
            FilterKey::MaxReleases => &self.max_releases,
        }
    }

    pub fn set(&mut self, key: FilterKey, value: String) {
        let slot = match key {
            FilterKey::Genre => &mut self.genre,
            FilterKey::Style => &mut self.style,
            FilterKey::Artist => &mut self.artist,
            FilterKey::Label => &mut self.label,
            FilterKey::Country => &mut self.country,
            FilterKey::YearFrom => &mut self.year_from,
            FilterKey::YearTo => &mut self.year_to,
            FilterKey::MinPrice => &mut self.min_price,
            FilterKey::MaxPrice => &mut self.max_price,
            FilterKey::MaxReleases => &mut self.max_releases,
        };
        *slot = value;
    }

    /// True when at least one filter holds a non-blank value.
    pub fn any_set(&self) -> bool {
        FilterKey::ALL
            .into_iter()
            .any(|key| !self.get(key).trim().is_empty())
    }

    /// Iterate over `(key, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        FilterKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

/// Pagination cursor and counters for the current result set.
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)`. Every mutation
/// goes through [`Pagination::clamp_page`] to re-establish it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_items: 0,
            items_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Clamp `current_page` into `[1, max(total_pages, 1)]`.
    pub fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages.max(1));
    }

    /// Merge a partial update; only supplied fields change.
    pub fn apply(&mut self, patch: PaginationPatch) {
        if let Some(page) = patch.page {
            self.current_page = page;
        }
        if let Some(pages) = patch.pages {
            self.total_pages = pages;
        }
        if let Some(items) = patch.items {
            self.total_items = items;
        }
        if let Some(per_page) = patch.per_page {
            self.items_per_page = per_page;
        }
        self.clamp_page();
    }
}

/// A partial pagination update, typically derived from a response payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaginationPatch {
    pub page: Option<u32>,
    pub pages: Option<u32>,
    pub items: Option<u64>,
    pub per_page: Option<u32>,
}

/// Flattened request parameters for one outbound search call: query,
/// filters, and the pagination cursor in a single record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub filters: SearchFilters,
    pub page: u32,
    pub per_page: u32,
}

impl SearchParams {
    /// Query-string pairs for the catalog endpoint. Blank values are
    /// omitted; `page` and `per_page` are always sent.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.query.trim().is_empty() {
            pairs.push(("q", self.query.trim().to_string()));
        }
        for (key, value) in self.filters.entries() {
            if !value.trim().is_empty() {
                pairs.push((key.as_str(), value.trim().to_string()));
            }
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("per_page", self.per_page.to_string()));
        pairs
    }
}

/// Cancellation token handed to one outbound call.
///
/// Wraps [`CancellationToken`] with the generation number of the call it
/// belongs to, so a stale token can never be mistaken for the current one.
/// Cancellation is cooperative: the call implementation is expected to
/// observe the token promptly.
#[derive(Clone, Debug)]
pub struct RequestToken {
    generation: u64,
    cancel: CancellationToken,
}

impl RequestToken {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            cancel: CancellationToken::new(),
        }
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// True once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Future resolving when cancellation is requested.
    pub async fn cancelled(&self) {
        self.cancel.cancelled().await;
    }
}
