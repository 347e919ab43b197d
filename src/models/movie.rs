use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::discovery::{Genre, MovieId, ResultItem, ResultPage};

/// Curated provider listings, addressed by their path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Popular,
    NowPlaying,
    TopRated,
    Upcoming,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Popular,
        Category::NowPlaying,
        Category::TopRated,
        Category::Upcoming,
    ];

    pub fn path_segment(&self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::NowPlaying => "now_playing",
            Category::TopRated => "top_rated",
            Category::Upcoming => "upcoming",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Popular => "Popular",
            Category::NowPlaying => "Now Playing",
            Category::TopRated => "Top Rated",
            Category::Upcoming => "Upcoming",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.path_segment() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// A playable trailer on the video platform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trailer {
    pub key: String,
    pub name: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
}

/// Everything shown on a single title's page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetailView {
    pub id: MovieId,
    pub title: String,
    pub release_date: Option<String>,
    pub release_year: Option<i32>,
    /// "R" for adult titles, "PG" otherwise
    pub rating_label: &'static str,
    pub runtime: String,
    pub average_rating: f64,
    pub vote_count: u64,
    pub poster_url: String,
    pub backdrop_url: String,
    pub genres: Vec<Genre>,
    pub overview: Option<String>,
    pub director: Option<String>,
    pub writers: Vec<String>,
    pub stars: Vec<String>,
    pub cast: Vec<CastMember>,
    pub similar: Vec<ResultItem>,
}

/// Large banner entry on the home page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroItem {
    pub id: MovieId,
    pub title: String,
    pub overview: Option<String>,
    pub average_rating: f64,
    pub backdrop_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSection {
    pub category: Category,
    pub title: &'static str,
    pub items: Vec<ResultItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeFeed {
    pub hero: Vec<HeroItem>,
    pub sections: Vec<HomeSection>,
}

/// Paged listing for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub category: Category,
    pub title: &'static str,
    #[serde(flatten)]
    pub page: ResultPage,
}
