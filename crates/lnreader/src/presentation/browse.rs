//! Top novels listing with infinite scroll and search.
//!
//! [`BrowseState`] holds the list and decides which request to issue for each
//! user action. Every request carries an id and only the latest one is allowed
//! to change the list, so a front-end that runs requests concurrently can feed
//! responses back in any order. [`BrowseScreen`] drives the state against a
//! [`Scraper`] one request at a time.

use lnreader_lib::{models::NovelSummary, traits::Scraper};

use super::toast::Toaster;

/// Growth of the ranking offset for each page.
pub const PAGE_SIZE: u32 = 50;

/// Distance from the end of the list at which the next page is requested.
pub const PADDING_TO_BOTTOM: f64 = 20.0;

pub const EMPTY_MESSAGE: &str = "No results found";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub visible_height: f64,
    pub scroll_offset: f64,
    pub content_height: f64,
}

impl ScrollMetrics {
    pub fn is_close_to_bottom(&self) -> bool {
        self.visible_height + self.scroll_offset >= self.content_height - PADDING_TO_BOTTOM
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Error,
    Searching,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    TopNovels { limit: u32 },
    Search { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    Append,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: u64,
    pub query: Query,
    pub merge: Merge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Toast(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Shown in place of the list when there is nothing to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub message: String,
    pub actions: Vec<Action>,
}

#[derive(Debug)]
pub struct BrowseState {
    phase: Phase,
    items: Vec<NovelSummary>,
    error: Option<String>,
    page_limit: u32,
    search_text: String,
    next_id: u64,
    pending: Option<u64>,
    last: Option<Request>,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            items: vec![],
            error: None,
            page_limit: 0,
            search_text: String::new(),
            next_id: 0,
            pending: None,
            last: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn items(&self) -> &[NovelSummary] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Searching)
    }

    /// The spinner below the list only makes sense while more pages can follow.
    pub fn shows_footer_spinner(&self) -> bool {
        self.search_text.is_empty()
    }

    pub fn error_view(&self) -> Option<ErrorView> {
        if self.is_loading() || !self.items.is_empty() {
            return None;
        }

        Some(ErrorView {
            message: self
                .error
                .clone()
                .unwrap_or_else(|| EMPTY_MESSAGE.to_string()),
            actions: vec![Action {
                name: "Retry",
                icon: "reload",
            }],
        })
    }

    fn issue(&mut self, query: Query, merge: Merge) -> Request {
        self.next_id += 1;
        self.phase = match query {
            Query::TopNovels { .. } => Phase::Loading,
            Query::Search { .. } => Phase::Searching,
        };

        let request = Request {
            id: self.next_id,
            query,
            merge,
        };
        self.pending = Some(request.id);
        self.last = Some(request.clone());

        request
    }

    pub fn mount(&mut self) -> Request {
        self.issue(
            Query::TopNovels {
                limit: self.page_limit,
            },
            Merge::Append,
        )
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Requests the next page when the list is settled, in browse mode and scrolled
    /// close enough to its end.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<Request> {
        if self.phase != Phase::Loaded
            || !self.search_text.is_empty()
            || !metrics.is_close_to_bottom()
        {
            return None;
        }

        let Some(page_limit) = self.page_limit.checked_add(PAGE_SIZE) else {
            warn!("page limit {} cannot grow further", self.page_limit);
            return None;
        };
        self.page_limit = page_limit;
        Some(self.issue(
            Query::TopNovels {
                limit: self.page_limit,
            },
            Merge::Append,
        ))
    }

    pub fn submit_search(&mut self) -> Option<Request> {
        if self.search_text.trim().is_empty() {
            return None;
        }

        Some(self.issue(
            Query::Search {
                text: self.search_text.clone(),
            },
            Merge::Replace,
        ))
    }

    /// Back to browsing at the current page limit, the search results are replaced.
    pub fn clear_search(&mut self) -> Request {
        self.search_text.clear();
        self.issue(
            Query::TopNovels {
                limit: self.page_limit,
            },
            Merge::Replace,
        )
    }

    /// Browses again at the current page limit, whatever failed last.
    /// Does nothing while a request is running.
    pub fn retry(&mut self) -> Option<Request> {
        if self.is_loading() {
            return None;
        }

        self.error = None;
        Some(self.issue(
            Query::TopNovels {
                limit: self.page_limit,
            },
            Merge::Append,
        ))
    }

    pub fn resolve(
        &mut self,
        id: u64,
        result: Result<Vec<NovelSummary>, String>,
    ) -> Option<Effect> {
        if self.pending != Some(id) {
            debug!("ignoring superseded response {id}, waiting for {:?}", self.pending);
            return None;
        }
        self.pending = None;

        let merge = self
            .last
            .as_ref()
            .map(|last| last.merge)
            .unwrap_or(Merge::Append);

        match result {
            Ok(novels) => {
                debug!("request {id} returned {} novels", novels.len());
                match merge {
                    Merge::Append => self.items.extend(novels),
                    Merge::Replace => self.items = novels,
                }
                self.error = None;
                self.phase = Phase::Loaded;

                None
            }
            Err(message) => {
                error!("request {id} failed: {message}");
                self.items.clear();
                self.error = Some(message.clone());
                self.phase = Phase::Error;

                Some(Effect::Toast(message))
            }
        }
    }
}

/// Runs [`BrowseState`] requests against a scraper, one at a time.
pub struct BrowseScreen<S, T> {
    scraper: S,
    toaster: T,
    state: BrowseState,
}

impl<S, T> BrowseScreen<S, T>
where
    S: Scraper,
    T: Toaster,
{
    pub fn new(scraper: S, toaster: T) -> Self {
        Self {
            scraper,
            toaster,
            state: BrowseState::new(),
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub async fn mount(&mut self) {
        let request = self.state.mount();
        self.run(request).await;
    }

    pub async fn scroll(&mut self, metrics: ScrollMetrics) {
        if let Some(request) = self.state.on_scroll(metrics) {
            self.run(request).await;
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    pub async fn submit_search(&mut self) {
        if let Some(request) = self.state.submit_search() {
            self.run(request).await;
        }
    }

    pub async fn clear_search(&mut self) {
        let request = self.state.clear_search();
        self.run(request).await;
    }

    pub async fn retry(&mut self) {
        if let Some(request) = self.state.retry() {
            self.run(request).await;
        }
    }

    async fn run(&mut self, request: Request) {
        let result = match &request.query {
            Query::TopNovels { limit } => self.scraper.scrape_top_novels(*limit).await,
            Query::Search { text } => self.scraper.scrape_search_results(text).await,
        }
        .map_err(|e| e.to_string());

        if let Some(Effect::Toast(message)) = self.state.resolve(request.id, result) {
            self.toaster.show(&message);
        }
    }
}
