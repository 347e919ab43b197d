use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard,
    },
};

use serde::Serialize;
use tokio::sync::watch;

use crate::{
    models::{GenreId, QueryState, ResultPage},
    services::discovery::DiscoveryResolver,
};

/// Token identifying one issued request; only the latest may commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter for last-request-wins ordering
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    pub fn issue(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Loading,
    Ready,
    /// The latest query produced nothing, either empty or failed
    NoResults,
}

/// What a discovery view currently displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub status: ViewStatus,
    pub query: QueryState,
    pub page: ResultPage,
}

impl ViewState {
    fn initial() -> Self {
        Self {
            status: ViewStatus::Loading,
            query: QueryState::new(),
            page: ResultPage::empty(1),
        }
    }
}

/// Owns one view's query state and publishes the results of its latest request
///
/// Responses to superseded requests are dropped even if they complete last.
#[derive(Clone)]
pub struct DiscoverySession {
    resolver: DiscoveryResolver,
    query: Arc<Mutex<QueryState>>,
    generation: Arc<Generation>,
    view: Arc<watch::Sender<ViewState>>,
}

impl DiscoverySession {
    pub fn new(resolver: DiscoveryResolver) -> Self {
        let (view, _) = watch::channel(ViewState::initial());
        Self {
            resolver,
            query: Arc::new(Mutex::new(QueryState::new())),
            generation: Arc::new(Generation::default()),
            view: Arc::new(view),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.subscribe()
    }

    pub fn current(&self) -> ViewState {
        self.view.borrow().clone()
    }

    pub fn query(&self) -> QueryState {
        self.lock_query().clone()
    }

    fn lock_query(&self) -> MutexGuard<'_, QueryState> {
        // State stays consistent even if a holder panicked mid-update.
        self.query.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.lock_query().set_text(text);
    }

    pub fn select_genre(&self, genre: GenreId) {
        self.lock_query().select_genre(Some(genre));
    }

    pub fn clear_genre(&self) {
        self.lock_query().select_genre(None);
    }

    pub fn go_to_page(&self, page: u32) {
        self.lock_query().set_page(page);
    }

    /// Bounded by the page count known for the current listing
    ///
    /// A displayed page count only applies while it belongs to the same text
    /// and genre; otherwise the listing is assumed to have a single page.
    pub fn next_page(&self) -> bool {
        let mut query = self.lock_query();
        let known_total = {
            let view = self.view.borrow();
            if view.query.same_listing(&query) {
                view.page.total_pages
            } else {
                1
            }
        };
        query.next_page(known_total)
    }

    pub fn previous_page(&self) -> bool {
        self.lock_query().previous_page()
    }

    /// Resolve the current query and publish it unless a newer refresh was issued
    ///
    /// The ticket is taken and `Loading` published before this returns; the
    /// returned future resolves to whether its result was committed.
    pub fn refresh(&self) -> impl Future<Output = bool> + Send + 'static {
        let query = self.query();
        let ticket = self.generation.issue();

        let loading_page = {
            let view = self.view.borrow();
            if view.query.same_listing(&query) {
                view.page.clone()
            } else {
                ResultPage::empty(query.page)
            }
        };
        commit(
            &self.view,
            &self.generation,
            ticket,
            ViewState {
                status: ViewStatus::Loading,
                query: query.clone(),
                page: loading_page,
            },
        );

        let resolver = self.resolver.clone();
        let generation = Arc::clone(&self.generation);
        let view = Arc::clone(&self.view);

        async move {
            let page = resolver.resolve(&query).await;
            let status = if page.is_empty() {
                ViewStatus::NoResults
            } else {
                ViewStatus::Ready
            };
            let search_text = query.search_text().to_string();

            let committed = commit(&view, &generation, ticket, ViewState { status, query, page });
            if !committed {
                tracing::debug!(?ticket, query = %search_text, "Discarding stale discovery result");
            }
            committed
        }
    }
}

/// Publish `state` only if `ticket` is still the latest issued
///
/// The check runs under the watch lock, so a newer commit can never be
/// overwritten by one that checked before it.
fn commit(
    view: &watch::Sender<ViewState>,
    generation: &Generation,
    ticket: Ticket,
    state: ViewState,
) -> bool {
    view.send_if_modified(|current| {
        if !generation.is_current(ticket) {
            return false;
        }
        *current = state;
        true
    })
}
