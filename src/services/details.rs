use std::{collections::HashSet, sync::Arc};

use chrono::{Datelike, NaiveDate};

use crate::{
    error::AppResult,
    models::{
        ApiCredits, ApiCrewMember, ApiMovieDetails, CastMember, MovieDetailView, MovieId,
        ResultItem,
    },
    services::{
        images::{ImageSize, ImageUrls},
        providers::MovieProvider,
    },
};

const MAX_GENRES: usize = 10;
const MAX_WRITERS: usize = 4;
const MAX_STARS: usize = 3;
const MAX_CAST: usize = 12;
const MAX_SIMILAR: usize = 8;

/// Crew jobs credited as writing even outside the Writing department
const WRITING_JOBS: [&str; 11] = [
    "Writer",
    "Screenplay",
    "Story",
    "Novel",
    "Characters",
    "Author",
    "Original Story",
    "Teleplay",
    "Comic Book",
    "Book",
    "Adaptation",
];

/// "2h 5m" for 125 minutes, empty when unknown
pub fn runtime_label(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) if m > 0 => format!("{}h {}m", m / 60, m % 60),
        _ => String::new(),
    }
}

pub fn director(credits: &ApiCredits) -> Option<String> {
    credits
        .crew
        .iter()
        .find(|p| p.job.as_deref() == Some("Director"))
        .map(|p| p.name.clone())
}

fn is_writer(person: &ApiCrewMember) -> bool {
    let job = person.job.as_deref().unwrap_or_default().trim();
    let department = person.department.as_deref().unwrap_or_default().trim();
    department == "Writing" || WRITING_JOBS.contains(&job)
}

/// Writing credits in billing order, one entry per person name
pub fn writers(credits: &ApiCredits) -> Vec<String> {
    let mut seen = HashSet::new();
    credits
        .crew
        .iter()
        .filter(|p| is_writer(p))
        .filter(|p| seen.insert(p.name.as_str()))
        .take(MAX_WRITERS)
        .map(|p| p.name.clone())
        .collect()
}

pub fn stars(credits: &ApiCredits) -> Vec<String> {
    credits
        .cast
        .iter()
        .take(MAX_STARS)
        .map(|c| c.name.clone())
        .collect()
}

fn release_year(release_date: Option<&str>) -> Option<i32> {
    release_date
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.year())
}

/// Combines movie details, credits and similar titles into one detail view
#[derive(Clone)]
pub struct DetailsAggregator {
    provider: Arc<dyn MovieProvider>,
    images: ImageUrls,
}

impl DetailsAggregator {
    pub fn new(provider: Arc<dyn MovieProvider>, images: ImageUrls) -> Self {
        Self { provider, images }
    }

    /// Fails only when the movie itself cannot be loaded; missing credits or
    /// similar titles leave those sections empty.
    pub async fn movie_detail(&self, movie_id: MovieId) -> AppResult<MovieDetailView> {
        let (details, credits, similar) = tokio::join!(
            self.provider.movie_details(movie_id),
            self.provider.movie_credits(movie_id),
            self.provider.similar_movies(movie_id, 1),
        );

        let details = details?;

        let credits = credits.unwrap_or_else(|e| {
            tracing::warn!(movie_id, error = %e, "Credits unavailable");
            ApiCredits::default()
        });

        let similar: Vec<ResultItem> = match similar {
            Ok(list) => list
                .results
                .unwrap_or_default()
                .into_iter()
                .take(MAX_SIMILAR)
                .map(ResultItem::from)
                .collect(),
            Err(e) => {
                tracing::warn!(movie_id, error = %e, "Similar titles unavailable");
                Vec::new()
            }
        };

        tracing::info!(
            movie_id,
            cast = credits.cast.len(),
            crew = credits.crew.len(),
            similar = similar.len(),
            "Movie detail assembled"
        );

        Ok(self.build_view(details, &credits, similar))
    }

    fn build_view(
        &self,
        details: ApiMovieDetails,
        credits: &ApiCredits,
        similar: Vec<ResultItem>,
    ) -> MovieDetailView {
        let poster_url = self
            .images
            .url(details.poster_path.as_deref(), ImageSize::W500);
        let backdrop_url = self.images.backdrop_or_poster(
            details.backdrop_path.as_deref(),
            details.poster_path.as_deref(),
        );

        MovieDetailView {
            id: details.id,
            release_year: release_year(details.release_date.as_deref()),
            title: details.title,
            release_date: details.release_date,
            rating_label: if details.adult { "R" } else { "PG" },
            runtime: runtime_label(details.runtime),
            average_rating: details.vote_average.unwrap_or(0.0),
            vote_count: details.vote_count.unwrap_or(0),
            poster_url,
            backdrop_url,
            genres: details.genres.into_iter().take(MAX_GENRES).collect(),
            overview: details.overview,
            director: director(credits),
            writers: writers(credits),
            stars: stars(credits),
            cast: credits
                .cast
                .iter()
                .take(MAX_CAST)
                .map(|c| CastMember {
                    id: c.id,
                    name: c.name.clone(),
                    character: c.character.clone(),
                })
                .collect(),
            similar,
        }
    }
}
