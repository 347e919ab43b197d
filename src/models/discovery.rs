use serde::{Deserialize, Serialize};

/// Provider-imposed ceiling on reachable list pages
pub const MAX_TOTAL_PAGES: u32 = 500;

pub type GenreId = u32;
pub type MovieId = u64;

/// A genre from the provider's vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// Search text, genre filter and page as driven by user input
///
/// The page goes back to 1 whenever the effective search text or the genre
/// filter changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub free_text: String,
    pub selected_genre: Option<GenreId>,
    pub page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            free_text: String::new(),
            selected_genre: None,
            page: 1,
        }
    }

    /// Trimmed search text, empty when the user has typed nothing meaningful
    pub fn search_text(&self) -> &str {
        self.free_text.trim()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.trim() != self.search_text() {
            self.page = 1;
        }
        self.free_text = text;
    }

    pub fn select_genre(&mut self, genre: Option<GenreId>) {
        if genre != self.selected_genre {
            self.page = 1;
        }
        self.selected_genre = genre;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Advances one page unless already at `total_pages`. Returns whether it moved.
    pub fn next_page(&mut self, total_pages: u32) -> bool {
        if self.page >= total_pages.max(1) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Steps back one page unless already on the first. Returns whether it moved.
    pub fn previous_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Whether both states list the same results, ignoring the page
    pub fn same_listing(&self, other: &QueryState) -> bool {
        self.search_text() == other.search_text() && self.selected_genre == other.selected_genre
    }
}

/// Which list endpoint a query state resolves against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DiscoveryMode {
    Search { query: String },
    Genre { genre_id: GenreId },
    Popular,
}

impl DiscoveryMode {
    /// Search text wins over the genre filter; with neither, fall back to popular.
    pub fn select(query: &QueryState) -> Self {
        let text = query.search_text();
        if !text.is_empty() {
            DiscoveryMode::Search {
                query: text.to_string(),
            }
        } else if let Some(genre_id) = query.selected_genre {
            DiscoveryMode::Genre { genre_id }
        } else {
            DiscoveryMode::Popular
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DiscoveryMode::Search { .. } => "search",
            DiscoveryMode::Genre { .. } => "genre",
            DiscoveryMode::Popular => "popular",
        }
    }
}

/// One movie card in a result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub average_rating: f64,
}

/// A normalized page of results with pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub items: Vec<ResultItem>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl ResultPage {
    /// Degraded page used when a lookup fails
    pub fn empty(current_page: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: current_page.max(1),
            total_pages: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Clamp a raw provider page count into `1..=MAX_TOTAL_PAGES`
pub fn clamp_total_pages(raw: Option<u32>) -> u32 {
    raw.unwrap_or(1).clamp(1, MAX_TOTAL_PAGES)
}
