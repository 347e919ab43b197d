/// TMDB v3 provider
///
/// All requests carry the bearer token and `accept: application/json`.
///
/// Endpoint map:
/// - genres: /genre/movie/list
/// - text search: /search/movie
/// - genre discovery: /discover/movie?with_genres=..&sort_by=popularity.desc
/// - category listing: /movie/{popular|now_playing|top_rated|upcoming}
/// - detail, credits, similar, videos: /movie/{id}[/credits|/similar|/videos]
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{
        ApiCredits, ApiGenreList, ApiListResponse, ApiMovieDetails, ApiVideoList, Category,
        GenreId, MovieId,
    },
    services::providers::MovieProvider,
};
use reqwest::{header::ACCEPT, Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

const GENRE_SORT: &str = "popularity.desc";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_token: String,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    pub fn new(config: &Config) -> AppResult<Self> {
        if config.tmdb_api_token.trim().is_empty() {
            return Err(AppError::Config("TMDB_API_TOKEN cannot be empty".to_string()));
        }

        let http_client = HttpClient::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http_client,
            api_token: config.tmdb_api_token.clone(),
            api_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
            language: config.tmdb_language.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Genre names are requested by primary language subtag ("en", not "en-US")
    fn genre_language(&self) -> &str {
        self.language.split('-').next().unwrap_or("en")
    }

    fn paged_params(&self, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("language", self.language.clone()),
            ("page", page.max(1).to_string()),
        ]
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> AppResult<T> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, params = ?params, "Calling TMDB");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_token)
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("TMDB resource not found: {}", path)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, path = %path, "Failed to deserialize TMDB response");
            AppError::Decode(e)
        })
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    async fn list_genres(&self) -> AppResult<ApiGenreList> {
        let params = [("language", self.genre_language().to_string())];
        let genres: ApiGenreList = self.get_json("genre/movie/list", &params).await?;

        tracing::info!(
            genres = genres.genres.len(),
            provider = "tmdb",
            "Genre list fetched"
        );

        Ok(genres)
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<ApiListResponse> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let mut params = self.paged_params(page);
        params.push(("query", query.trim().to_string()));
        self.get_json("search/movie", &params).await
    }

    async fn discover_by_genre(&self, genre_id: GenreId, page: u32) -> AppResult<ApiListResponse> {
        let mut params = self.paged_params(page);
        params.push(("with_genres", genre_id.to_string()));
        params.push(("sort_by", GENRE_SORT.to_string()));
        self.get_json("discover/movie", &params).await
    }

    async fn list_category(&self, category: Category, page: u32) -> AppResult<ApiListResponse> {
        let path = format!("movie/{}", category.path_segment());
        self.get_json(&path, &self.paged_params(page)).await
    }

    async fn movie_details(&self, movie_id: MovieId) -> AppResult<ApiMovieDetails> {
        let params = [("language", self.language.clone())];
        self.get_json(&format!("movie/{}", movie_id), &params).await
    }

    async fn movie_credits(&self, movie_id: MovieId) -> AppResult<ApiCredits> {
        let params = [("language", self.language.clone())];
        self.get_json(&format!("movie/{}/credits", movie_id), &params)
            .await
    }

    async fn similar_movies(&self, movie_id: MovieId, page: u32) -> AppResult<ApiListResponse> {
        self.get_json(
            &format!("movie/{}/similar", movie_id),
            &self.paged_params(page),
        )
        .await
    }

    async fn movie_videos(&self, movie_id: MovieId) -> AppResult<ApiVideoList> {
        let params = [("language", self.language.clone())];
        self.get_json(&format!("movie/{}/videos", movie_id), &params)
            .await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
