use std::sync::Arc;

use crate::{
    models::{ApiVideo, MovieId, Trailer},
    services::providers::MovieProvider,
};

const VIDEO_PLATFORM: &str = "YouTube";
const TRAILER_TYPE: &str = "Trailer";

/// Embed URL for a clip on the video platform
pub fn embed_url(key: &str) -> String {
    format!("https://www.youtube.com/embed/{}?autoplay=1&rel=0", key)
}

/// Prefer a platform "Trailer", then any clip on the platform
pub fn select_trailer(videos: &[ApiVideo]) -> Option<&ApiVideo> {
    videos
        .iter()
        .find(|v| v.site == VIDEO_PLATFORM && v.video_type == TRAILER_TYPE)
        .or_else(|| videos.iter().find(|v| v.site == VIDEO_PLATFORM))
}

/// Finds a playable trailer for a title
#[derive(Clone)]
pub struct TrailerLookup {
    provider: Arc<dyn MovieProvider>,
}

impl TrailerLookup {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self { provider }
    }

    /// `None` when the title has no platform clip or the lookup fails
    pub async fn find_trailer(&self, movie_id: MovieId) -> Option<Trailer> {
        let videos = match self.provider.movie_videos(movie_id).await {
            Ok(list) => list.results,
            Err(e) => {
                tracing::warn!(movie_id, error = %e, "Video lookup failed");
                return None;
            }
        };

        let trailer = select_trailer(&videos).map(|v| Trailer {
            key: v.key.clone(),
            name: v.name.clone(),
            embed_url: embed_url(&v.key),
        });

        tracing::info!(
            movie_id,
            videos = videos.len(),
            found = trailer.is_some(),
            "Trailer lookup completed"
        );

        trailer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, models::ApiVideoList, services::providers::MockMovieProvider};
    use mockall::predicate::eq;

    fn video(key: &str, site: &str, video_type: &str) -> ApiVideo {
        ApiVideo {
            key: key.to_string(),
            site: site.to_string(),
            video_type: video_type.to_string(),
            name: format!("{} {}", site, video_type),
        }
    }

    #[test]
    fn test_trailer_preferred_over_teaser() {
        let videos = vec![
            video("teaser-key", "YouTube", "Teaser"),
            video("trailer-key", "YouTube", "Trailer"),
        ];
        assert_eq!(select_trailer(&videos).unwrap().key, "trailer-key");
    }

    #[test]
    fn test_falls_back_to_any_platform_clip() {
        let videos = vec![
            video("vimeo-trailer", "Vimeo", "Trailer"),
            video("featurette", "YouTube", "Featurette"),
        ];
        assert_eq!(select_trailer(&videos).unwrap().key, "featurette");
    }

    #[test]
    fn test_no_platform_match() {
        let videos = vec![video("vimeo-trailer", "Vimeo", "Trailer")];
        assert!(select_trailer(&videos).is_none());
        assert!(select_trailer(&[]).is_none());
    }

    #[tokio::test]
    async fn test_find_trailer_builds_embed_url() {
        let mut mock = MockMovieProvider::new();
        mock.expect_movie_videos()
            .with(eq(402431))
            .returning(|_| {
                Ok(ApiVideoList {
                    results: vec![video("6COmYeLsz4c", "YouTube", "Trailer")],
                })
            });

        let trailer = TrailerLookup::new(Arc::new(mock))
            .find_trailer(402431)
            .await
            .unwrap();
        assert_eq!(trailer.key, "6COmYeLsz4c");
        assert_eq!(
            trailer.embed_url,
            "https://www.youtube.com/embed/6COmYeLsz4c?autoplay=1&rel=0"
        );
    }

    #[tokio::test]
    async fn test_find_trailer_failure_is_not_found() {
        let mut mock = MockMovieProvider::new();
        mock.expect_movie_videos()
            .returning(|_| Err(AppError::ExternalApi("timeout".to_string())));

        assert!(TrailerLookup::new(Arc::new(mock))
            .find_trailer(1)
            .await
            .is_none());
    }
}
