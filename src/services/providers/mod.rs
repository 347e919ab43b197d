/// Movie metadata provider abstraction
///
/// Services talk to the metadata source only through this trait, so the TMDB
/// client can be replaced by a scripted provider in tests or by another
/// TMDB-compatible backend.
use crate::{
    error::AppResult,
    models::{
        ApiCredits, ApiGenreList, ApiListResponse, ApiMovieDetails, ApiVideoList, Category,
        GenreId, MovieId,
    },
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
///
/// Every list method takes a 1-based page and returns the provider's raw
/// paged envelope; normalization is left to the services.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Genre vocabulary for movies
    async fn list_genres(&self) -> AppResult<ApiGenreList>;

    /// Search titles by free text
    async fn search_movies(&self, query: &str, page: u32) -> AppResult<ApiListResponse>;

    /// Titles in one genre, most popular first
    async fn discover_by_genre(&self, genre_id: GenreId, page: u32) -> AppResult<ApiListResponse>;

    /// A curated listing such as popular or now playing
    async fn list_category(&self, category: Category, page: u32) -> AppResult<ApiListResponse>;

    async fn movie_details(&self, movie_id: MovieId) -> AppResult<ApiMovieDetails>;

    async fn movie_credits(&self, movie_id: MovieId) -> AppResult<ApiCredits>;

    async fn similar_movies(&self, movie_id: MovieId, page: u32) -> AppResult<ApiListResponse>;

    async fn movie_videos(&self, movie_id: MovieId) -> AppResult<ApiVideoList>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
