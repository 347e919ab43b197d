#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use moviez_api::{
    error::{AppError, AppResult},
    models::{
        ApiCastMember, ApiCredits, ApiCrewMember, ApiGenreList, ApiListResponse, ApiMovie,
        ApiMovieDetails, ApiVideo, ApiVideoList, Category, Genre, GenreId, MovieId,
    },
    services::providers::MovieProvider,
};
use tokio::sync::oneshot;

pub const MISSING_MOVIE: MovieId = 404;
pub const MOVIE_WITH_TRAILER: MovieId = 1;
pub const MOVIE_WITHOUT_TRAILER: MovieId = 2;

/// In-process provider with canned responses, call recording, scripted
/// failures and per-query release gates
#[derive(Default)]
pub struct ScriptedProvider {
    calls: Mutex<Vec<String>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    failing: Mutex<bool>,
}

impl ScriptedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// Holds the search for `query` until the returned sender fires
    pub fn gate(&self, query: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(query.to_string(), rx);
        tx
    }

    fn record(&self, call: String) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);
        if *self.failing.lock().unwrap() {
            return Err(AppError::ExternalApi("connection refused".to_string()));
        }
        Ok(())
    }
}

pub fn movie(id: u64, title: &str) -> ApiMovie {
    ApiMovie {
        id,
        title: title.to_string(),
        original_title: None,
        poster_path: Some(format!("/poster{}.jpg", id)),
        backdrop_path: Some(format!("/backdrop{}.jpg", id)),
        overview: Some(format!("About {}", title)),
        vote_average: Some(7.2),
    }
}

pub fn page_of(prefix: &str, count: u64, total_pages: u32) -> ApiListResponse {
    ApiListResponse {
        page: Some(1),
        results: Some(
            (1..=count)
                .map(|i| movie(i, &format!("{} {}", prefix, i)))
                .collect(),
        ),
        total_pages: Some(total_pages),
        total_results: Some(count * total_pages as u64),
    }
}

fn video(key: &str, site: &str, video_type: &str) -> ApiVideo {
    ApiVideo {
        key: key.to_string(),
        site: site.to_string(),
        video_type: video_type.to_string(),
        name: format!("{} {}", site, video_type),
    }
}

#[async_trait::async_trait]
impl MovieProvider for ScriptedProvider {
    async fn list_genres(&self) -> AppResult<ApiGenreList> {
        self.record("genres".to_string())?;
        Ok(ApiGenreList {
            genres: vec![
                Genre {
                    id: 28,
                    name: "Action".to_string(),
                },
                Genre {
                    id: 35,
                    name: "Comedy".to_string(),
                },
            ],
        })
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<ApiListResponse> {
        self.record(format!("search:{}:{}", query, page))?;

        let gate = self.gates.lock().unwrap().remove(query);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        match query {
            "Wicked" => Ok(page_of("Wicked", 24, 2)),
            "zzzz" => Ok(ApiListResponse {
                page: Some(1),
                results: Some(Vec::new()),
                total_pages: Some(0),
                total_results: Some(0),
            }),
            other => Ok(page_of(other, 5, 1)),
        }
    }

    async fn discover_by_genre(&self, genre_id: GenreId, page: u32) -> AppResult<ApiListResponse> {
        self.record(format!("genre:{}:{}", genre_id, page))?;
        Ok(page_of(&format!("Genre {}", genre_id), 20, 612))
    }

    async fn list_category(&self, category: Category, page: u32) -> AppResult<ApiListResponse> {
        self.record(format!("category:{}:{}", category, page))?;
        Ok(page_of(category.title(), 20, 48))
    }

    async fn movie_details(&self, movie_id: MovieId) -> AppResult<ApiMovieDetails> {
        self.record(format!("details:{}", movie_id))?;
        if movie_id == MISSING_MOVIE {
            return Err(AppError::NotFound(format!("movie/{}", movie_id)));
        }
        Ok(ApiMovieDetails {
            id: movie_id,
            title: "Wicked".to_string(),
            overview: Some("Elphaba, an ostracized but defiant girl".to_string()),
            release_date: Some("2024-11-20".to_string()),
            poster_path: Some("/wicked.jpg".to_string()),
            backdrop_path: Some("/wicked-backdrop.jpg".to_string()),
            vote_average: Some(7.4),
            vote_count: Some(1520),
            runtime: Some(161),
            adult: false,
            genres: vec![Genre {
                id: 18,
                name: "Drama".to_string(),
            }],
        })
    }

    async fn movie_credits(&self, movie_id: MovieId) -> AppResult<ApiCredits> {
        self.record(format!("credits:{}", movie_id))?;
        Ok(ApiCredits {
            cast: ["Cynthia Erivo", "Ariana Grande", "Jonathan Bailey", "Ethan Slater"]
                .iter()
                .enumerate()
                .map(|(i, name)| ApiCastMember {
                    id: i as u64,
                    name: name.to_string(),
                    character: None,
                })
                .collect(),
            crew: vec![
                ApiCrewMember {
                    id: 10,
                    name: "Jon M. Chu".to_string(),
                    job: Some("Director".to_string()),
                    department: Some("Directing".to_string()),
                },
                ApiCrewMember {
                    id: 11,
                    name: "Winnie Holzman".to_string(),
                    job: Some("Screenplay".to_string()),
                    department: Some("Writing".to_string()),
                },
            ],
        })
    }

    async fn similar_movies(&self, movie_id: MovieId, page: u32) -> AppResult<ApiListResponse> {
        self.record(format!("similar:{}:{}", movie_id, page))?;
        Ok(page_of("Similar", 20, 5))
    }

    async fn movie_videos(&self, movie_id: MovieId) -> AppResult<ApiVideoList> {
        self.record(format!("videos:{}", movie_id))?;
        let results = match movie_id {
            MOVIE_WITH_TRAILER => vec![
                video("teaser-key", "YouTube", "Teaser"),
                video("trailer-key", "YouTube", "Trailer"),
            ],
            MOVIE_WITHOUT_TRAILER => vec![video("vimeo-key", "Vimeo", "Trailer")],
            _ => Vec::new(),
        };
        Ok(ApiVideoList { results })
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
