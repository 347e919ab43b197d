use std::sync::Arc;

use tracing::instrument;

use crate::{
    error::AppResult,
    models::{
        clamp_total_pages, ApiListResponse, Category, DiscoveryMode, QueryState, ResultItem,
        ResultPage,
    },
    services::providers::MovieProvider,
};

/// Turn a raw list envelope into a result page for `requested_page`
///
/// Missing results become an empty list and the page count is kept within
/// `1..=MAX_TOTAL_PAGES`.
pub fn normalize_page(response: ApiListResponse, requested_page: u32) -> ResultPage {
    let items: Vec<ResultItem> = response
        .results
        .unwrap_or_default()
        .into_iter()
        .map(ResultItem::from)
        .collect();

    ResultPage {
        items,
        current_page: requested_page.max(1),
        total_pages: clamp_total_pages(response.total_pages),
    }
}

/// Resolves search text, genre filter and page into one page of results
///
/// The single entry point for every discovery call site. Resolution never
/// fails: provider errors are logged and produce an empty page.
#[derive(Clone)]
pub struct DiscoveryResolver {
    provider: Arc<dyn MovieProvider>,
}

impl DiscoveryResolver {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self { provider }
    }

    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn resolve(&self, query: &QueryState) -> ResultPage {
        let mode = DiscoveryMode::select(query);
        let page = query.page.max(1);

        match self.fetch(&mode, page).await {
            Ok(response) => {
                let result = normalize_page(response, page);
                tracing::info!(
                    mode = mode.name(),
                    page,
                    results = result.items.len(),
                    total_pages = result.total_pages,
                    "Discovery resolved"
                );
                result
            }
            Err(e) => {
                tracing::warn!(
                    mode = mode.name(),
                    page,
                    error = %e,
                    "Discovery lookup failed, showing no results"
                );
                ResultPage::empty(page)
            }
        }
    }

    async fn fetch(&self, mode: &DiscoveryMode, page: u32) -> AppResult<ApiListResponse> {
        match mode {
            DiscoveryMode::Search { query } => self.provider.search_movies(query, page).await,
            DiscoveryMode::Genre { genre_id } => {
                self.provider.discover_by_genre(*genre_id, page).await
            }
            DiscoveryMode::Popular => self.provider.list_category(Category::Popular, page).await,
        }
    }
}
