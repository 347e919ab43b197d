use serde::Deserialize;

pub mod discovery;
pub mod movie;

pub use discovery::{
    clamp_total_pages, DiscoveryMode, Genre, GenreId, MovieId, QueryState, ResultItem,
    ResultPage, MAX_TOTAL_PAGES,
};
pub use movie::{
    CastMember, Category, CategoryListing, HeroItem, HomeFeed, HomeSection, MovieDetailView,
    Trailer,
};

// ============================================================================
// TMDB API Types
// ============================================================================

/// Paged list envelope shared by search, discover and category endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiListResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<ApiMovie>>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

/// Movie entry inside a list response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMovie {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl ApiMovie {
    /// Localized title, or the original one when the localized title is blank
    pub fn display_title(&self) -> &str {
        match self.original_title.as_deref() {
            Some(original) if self.title.trim().is_empty() => original,
            _ => &self.title,
        }
    }
}

impl From<ApiMovie> for ResultItem {
    fn from(movie: ApiMovie) -> Self {
        ResultItem {
            id: movie.id,
            title: movie.display_title().to_string(),
            poster_path: movie.poster_path.filter(|p| !p.is_empty()),
            average_rating: movie.vote_average.unwrap_or(0.0),
        }
    }
}

/// Response from GET /genre/movie/list
#[derive(Debug, Clone, Deserialize)]
pub struct ApiGenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Response from GET /movie/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMovieDetails {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub runtime: Option<i64>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Response from GET /movie/{id}/credits
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCredits {
    #[serde(default)]
    pub cast: Vec<ApiCastMember>,
    #[serde(default)]
    pub crew: Vec<ApiCrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Response from GET /movie/{id}/videos
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiVideoList {
    #[serde(default)]
    pub results: Vec<ApiVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiVideo {
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
    #[serde(default)]
    pub name: String,
}
