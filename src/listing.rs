/// Paginated player list: request planning, fetching and per-view state
///
/// One parameterized controller serves the search, position and team views.
/// The state is mutated only by reducers; fetching happens in effects and
/// comes back as a `(token, result)` pair that `apply_page` accepts only if
/// the token is still the latest one issued for the view.
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::catalog;
use crate::data_provider::{PlayerQuery, StatsDataProvider};
use crate::error::{ViewError, MIN_SEARCH_LEN};
use crate::types::Player;

pub const DEFAULT_SEARCH_PAGE_SIZE: usize = 13;
pub const DEFAULT_POSITION_PAGE_SIZE: usize = 15;
pub const DEFAULT_TEAM_PAGE_SIZE: usize = 10;

static REQUEST_SEQ: AtomicU64 = AtomicU64::new(1);

/// Issue a new request token
///
/// Tokens are unique across all views for the lifetime of the process, so a
/// view that was closed and reopened can never accept an older result.
pub fn next_token() -> u64 {
    REQUEST_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// What a list view is filtered by
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListFilter {
    /// Free-text name search; a query needs at least 2 characters
    Search,
    /// Position category key, e.g. "guards"
    Position(String),
    /// Team slug, e.g. "celtics"
    Team(String),
}

impl ListFilter {
    pub fn title(&self) -> String {
        match self {
            ListFilter::Search => "Player Search".to_string(),
            ListFilter::Position(key) => key.replace('-', " ").to_uppercase(),
            ListFilter::Team(slug) => catalog::team_by_slug(slug)
                .map(|t| t.name.to_uppercase())
                .unwrap_or_else(|| slug.to_uppercase()),
        }
    }

    /// The search view refuses to query without a name; filtered views treat
    /// a short name as "no name filter"
    pub fn requires_name(&self) -> bool {
        matches!(self, ListFilter::Search)
    }

    /// Whether typing in the search box re-queries immediately
    pub fn queries_while_typing(&self) -> bool {
        !matches!(self, ListFilter::Search)
    }
}

/// How `has_next_page` is derived from a fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndOfResults {
    /// Request one lookahead row; a next page exists iff it came back
    #[default]
    Exact,
    /// A full page implies a next page. Wrong when the total is an exact
    /// multiple of the page size: the last page offers an empty "next".
    FullPage,
}

/// Everything needed to fetch one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub filter: ListFilter,
    pub search_text: String,
    /// 1-indexed
    pub page: usize,
    pub page_size: usize,
    pub end_detection: EndOfResults,
}

/// Outcome of resolving a request against the static tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPlan {
    Fetch(PlayerQuery),
    /// The filter resolved to an empty set; the answer is zero rows
    Empty,
    /// Rejected locally, nothing may be sent
    Rejected(ViewError),
}

impl PageRequest {
    /// Trimmed name text, if long enough to filter on
    pub fn name_filter(&self) -> Option<&str> {
        let text = self.search_text.trim();
        (text.chars().count() >= MIN_SEARCH_LEN).then_some(text)
    }

    /// Zero-indexed inclusive row window, including the lookahead row in exact mode
    ///
    /// `None` when the window does not fit in a row index.
    pub fn range(&self) -> Option<(usize, usize)> {
        let size = self.page_size.max(1);
        let from = (self.page.max(1) - 1).checked_mul(size)?;
        let to = match self.end_detection {
            EndOfResults::Exact => from.checked_add(size)?,
            EndOfResults::FullPage => from.checked_add(size - 1)?,
        };
        // the limit sent is `to - from + 1`
        to.checked_add(1)?;
        Some((from, to))
    }

    pub fn plan(&self) -> RequestPlan {
        let name = self.name_filter();
        let Some((from, to)) = self.range() else {
            return RequestPlan::Rejected(ViewError::page_out_of_range());
        };
        let mut query = PlayerQuery {
            name_contains: name.map(str::to_string),
            offset: from,
            limit: to - from + 1,
            ..Default::default()
        };

        match &self.filter {
            ListFilter::Search => {
                if name.is_none() {
                    return RequestPlan::Rejected(ViewError::search_too_short());
                }
            }
            ListFilter::Position(key) => {
                let codes = catalog::position_codes(key);
                if codes.is_empty() {
                    return RequestPlan::Empty;
                }
                query.positions = codes.to_vec();
            }
            ListFilter::Team(slug) => match catalog::slug_to_code(slug) {
                Some(code) => query.team_code = Some(code),
                None => return RequestPlan::Empty,
            },
        }
        RequestPlan::Fetch(query)
    }
}

/// One page of results as shown by a view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerPage {
    pub rows: Vec<Player>,
    pub has_next_page: bool,
}

/// Trim fetched rows to the page size and derive `has_next_page`
pub fn page_from_rows(mut rows: Vec<Player>, page_size: usize, end: EndOfResults) -> PlayerPage {
    let has_next_page = match end {
        EndOfResults::Exact => rows.len() > page_size,
        EndOfResults::FullPage => page_size > 0 && rows.len() == page_size,
    };
    rows.truncate(page_size);
    PlayerPage {
        rows,
        has_next_page,
    }
}

/// Resolve and run a page request
pub async fn fetch_page(
    provider: &dyn StatsDataProvider,
    request: &PageRequest,
) -> Result<PlayerPage, ViewError> {
    match request.plan() {
        RequestPlan::Fetch(query) => {
            let rows = provider.players(&query).await?;
            Ok(page_from_rows(rows, request.page_size, request.end_detection))
        }
        RequestPlan::Empty => Ok(PlayerPage::default()),
        RequestPlan::Rejected(err) => Err(err),
    }
}

/// Which part of a list view receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFocus {
    #[default]
    SearchBox,
    Table,
}

/// A load that must be performed by an effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub token: u64,
    pub request: PageRequest,
}

/// State of one list view instance
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    pub filter: ListFilter,
    pub page_size: usize,
    pub end_detection: EndOfResults,
    pub search_text: String,
    pub page: usize,
    pub loading: bool,
    pub error: Option<ViewError>,
    pub rows: Vec<Player>,
    pub has_next_page: bool,
    pub selected: usize,
    pub focus: ListFocus,
    /// Token of the latest issued request, if it has not resolved yet
    pub pending: Option<u64>,
    /// Set once any load has resolved, distinguishes "no results" from "not searched yet"
    pub loaded_once: bool,
}

impl ListViewState {
    pub fn new(filter: ListFilter, page_size: usize, end_detection: EndOfResults) -> Self {
        Self {
            filter,
            page_size: page_size.max(1),
            end_detection,
            search_text: String::new(),
            page: 1,
            loading: false,
            error: None,
            rows: Vec::new(),
            has_next_page: false,
            selected: 0,
            focus: ListFocus::SearchBox,
            pending: None,
            loaded_once: false,
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest {
            filter: self.filter.clone(),
            search_text: self.search_text.clone(),
            page: self.page,
            page_size: self.page_size,
            end_detection: self.end_detection,
        }
    }

    /// Replace the search text; a change resets to page 1
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.search_text {
            return false;
        }
        self.search_text = text;
        self.page = 1;
        true
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// Advance one page; no-op when there is no next page
    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page {
            return false;
        }
        self.page = self.page.saturating_add(1);
        true
    }

    /// Go back one page; no-op on page 1
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Start loading the current page
    ///
    /// Returns the load an effect must perform, or `None` when the request was
    /// settled locally (validation failure or an empty filter set).
    pub fn begin_load(&mut self) -> Option<PendingLoad> {
        let request = self.request();
        match request.plan() {
            RequestPlan::Rejected(err) => {
                self.pending = None;
                self.settle(Err(err));
                None
            }
            RequestPlan::Empty => {
                debug!(filter = ?self.filter, "Filter resolves to no codes, skipping request");
                self.pending = None;
                self.settle(Ok(PlayerPage::default()));
                None
            }
            RequestPlan::Fetch(_) => {
                let token = next_token();
                self.loading = true;
                self.error = None;
                self.pending = Some(token);
                Some(PendingLoad { token, request })
            }
        }
    }

    /// Apply a fetched page if `token` is still current
    pub fn apply_page(&mut self, token: u64, result: Result<PlayerPage, ViewError>) -> bool {
        if self.pending != Some(token) {
            debug!(
                token,
                pending = ?self.pending,
                filter = ?self.filter,
                "Discarding stale page result"
            );
            return false;
        }
        self.pending = None;
        self.settle(result);
        true
    }

    /// Forget the in-flight request; its result will be dropped
    pub fn cancel_pending(&mut self) {
        self.pending = None;
        self.loading = false;
    }

    /// Forget the shown page; rows belong to text that is no longer in the box
    pub fn clear_results(&mut self) {
        self.cancel_pending();
        self.rows.clear();
        self.has_next_page = false;
        self.selected = 0;
        self.error = None;
        self.loaded_once = false;
    }

    fn settle(&mut self, result: Result<PlayerPage, ViewError>) {
        self.loading = false;
        self.loaded_once = true;
        self.selected = 0;
        match result {
            Ok(page) => {
                self.rows = page.rows;
                self.has_next_page = page.has_next_page;
                self.error = None;
            }
            Err(err) => {
                self.rows.clear();
                self.has_next_page = false;
                self.error = Some(err);
            }
        }
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.rows.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.rows.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// "No results" is only meaningful after a successful load
    pub fn is_empty_result(&self) -> bool {
        self.loaded_once && !self.loading && self.error.is_none() && self.rows.is_empty()
    }
}
