use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        Category, CategoryListing, DiscoveryMode, Genre, GenreId, HomeFeed, MovieDetailView,
        MovieId, QueryState, ResultPage, Trailer,
    },
};

use super::AppState;

const NO_RESULTS: &str = "No results";

// Request/Response types

#[derive(Debug, Default, Deserialize)]
pub struct DiscoverParams {
    pub q: Option<String>,
    pub genre: Option<GenreId>,
    /// Display name of the genre, as carried by genre links
    pub name: Option<String>,
    pub page: Option<u32>,
}

impl DiscoverParams {
    fn into_query_state(self) -> AppResult<QueryState> {
        let page = validate_page(self.page)?;
        let mut state = QueryState::new();
        state.set_text(self.q.unwrap_or_default());
        state.select_genre(self.genre);
        state.set_page(page);
        Ok(state)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct DiscoverResponse {
    #[serde(flatten)]
    pub mode: DiscoveryMode,
    pub heading: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(flatten)]
    pub results: ResultPage,
}

fn validate_page(page: Option<u32>) -> AppResult<u32> {
    match page {
        Some(0) => Err(AppError::InvalidInput("page must be 1 or greater".to_string())),
        Some(page) => Ok(page),
        None => Ok(1),
    }
}

fn headings(
    mode: &DiscoveryMode,
    genre_name: Option<&str>,
    result_count: usize,
) -> (String, String) {
    match mode {
        DiscoveryMode::Search { query } => (
            "Search results".to_string(),
            format!("{} results for “{}”", result_count, query),
        ),
        DiscoveryMode::Genre { .. } => {
            let name = genre_name.unwrap_or("Genre");
            (name.to_string(), format!("Movies in “{}”", name))
        }
        DiscoveryMode::Popular => (
            "Popular".to_string(),
            "Trending / popular movies".to_string(),
        ),
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Genre vocabulary
pub async fn list_genres(State(state): State<AppState>) -> Json<Vec<Genre>> {
    Json(state.genres.list_genres().await)
}

/// Combined search / genre / popular discovery view
pub async fn discover(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<DiscoverParams>,
) -> AppResult<Json<DiscoverResponse>> {
    let supplied_name = params
        .name
        .clone()
        .filter(|n| !n.trim().is_empty());
    let query = params.into_query_state()?;
    let mode = DiscoveryMode::select(&query);

    tracing::info!(
        request_id = %request_id,
        mode = mode.name(),
        page = query.page,
        "Processing discovery request"
    );

    let results = state.resolver.resolve(&query).await;

    let genre_name = match (&mode, supplied_name) {
        (DiscoveryMode::Genre { .. }, Some(name)) => Some(name),
        (DiscoveryMode::Genre { genre_id }, None) => state.genres.genre_name(*genre_id).await,
        _ => None,
    };

    let (heading, subtitle) = headings(&mode, genre_name.as_deref(), results.items.len());

    Ok(Json(DiscoverResponse {
        mode,
        heading,
        subtitle,
        message: results.is_empty().then_some(NO_RESULTS),
        results,
    }))
}

/// Paged listing for one category
pub async fn list_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<CategoryListing>> {
    let category: Category = name.parse().map_err(AppError::NotFound)?;
    let page = validate_page(params.page)?;
    Ok(Json(state.catalog.list_category(category, page).await))
}

/// Hero strip and category sections for the landing page
pub async fn home(State(state): State<AppState>) -> Json<HomeFeed> {
    Json(state.catalog.home().await)
}

/// Detail view for one title
pub async fn movie_detail(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(movie_id): Path<MovieId>,
) -> AppResult<Json<MovieDetailView>> {
    tracing::info!(request_id = %request_id, movie_id, "Processing movie detail request");

    match state.details.movie_detail(movie_id).await {
        Ok(view) => Ok(Json(view)),
        Err(AppError::NotFound(_)) => Err(AppError::NotFound("Movie not found".to_string())),
        Err(e) => {
            tracing::warn!(request_id = %request_id, movie_id, error = %e, "Movie detail failed");
            Err(e)
        }
    }
}

/// Trailer for one title
pub async fn movie_trailer(
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
) -> AppResult<Json<Trailer>> {
    state
        .trailers
        .find_trailer(movie_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Trailer not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_build_query_state() {
        let params = DiscoverParams {
            q: Some("Wicked".to_string()),
            genre: Some(28),
            name: None,
            page: Some(3),
        };
        let state = params.into_query_state().unwrap();
        assert_eq!(state.free_text, "Wicked");
        assert_eq!(state.selected_genre, Some(28));
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_page_zero_rejected() {
        let params = DiscoverParams {
            page: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            params.into_query_state(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_headings() {
        let search = DiscoveryMode::Search {
            query: "Wicked".to_string(),
        };
        assert_eq!(
            headings(&search, None, 24),
            (
                "Search results".to_string(),
                "24 results for “Wicked”".to_string()
            )
        );

        let genre = DiscoveryMode::Genre { genre_id: 28 };
        assert_eq!(
            headings(&genre, Some("Action"), 20).1,
            "Movies in “Action”"
        );
        assert_eq!(headings(&genre, None, 20).0, "Genre");

        assert_eq!(headings(&DiscoveryMode::Popular, None, 20).0, "Popular");
    }
}
