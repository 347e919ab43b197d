use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::{
    models::{Genre, GenreId},
    services::providers::MovieProvider,
};

/// Read-only genre reference data, fetched once and reused for label lookup
pub struct GenreVocabulary {
    provider: Arc<dyn MovieProvider>,
    genres: OnceCell<Vec<Genre>>,
}

impl GenreVocabulary {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            provider,
            genres: OnceCell::new(),
        }
    }

    /// All movie genres. A failed fetch yields an empty list and is retried
    /// on the next call.
    pub async fn list_genres(&self) -> Vec<Genre> {
        let result = self
            .genres
            .get_or_try_init(|| async {
                let list = self.provider.list_genres().await?;
                tracing::info!(genres = list.genres.len(), "Genre vocabulary loaded");
                Ok::<_, crate::error::AppError>(list.genres)
            })
            .await;

        match result {
            Ok(genres) => genres.clone(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load genre vocabulary");
                Vec::new()
            }
        }
    }

    pub async fn genre_name(&self, id: GenreId) -> Option<String> {
        self.list_genres()
            .await
            .into_iter()
            .find(|g| g.id == id)
            .map(|g| g.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, models::ApiGenreList, services::providers::MockMovieProvider};

    fn genre_list() -> ApiGenreList {
        ApiGenreList {
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
        }
    }

    #[tokio::test]
    async fn test_fetched_once() {
        let mut mock = MockMovieProvider::new();
        mock.expect_list_genres()
            .times(1)
            .returning(|| Ok(genre_list()));

        let vocabulary = GenreVocabulary::new(Arc::new(mock));
        assert_eq!(vocabulary.list_genres().await.len(), 2);
        assert_eq!(vocabulary.list_genres().await.len(), 2);
        assert_eq!(vocabulary.genre_name(28).await.as_deref(), Some("Action"));
        assert_eq!(vocabulary.genre_name(99).await, None);
    }

    #[tokio::test]
    async fn test_failure_is_not_memoized() {
        let mut mock = MockMovieProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_genres()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(AppError::ExternalApi("503".to_string())));
        mock.expect_list_genres()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(genre_list()));

        let vocabulary = GenreVocabulary::new(Arc::new(mock));
        assert!(vocabulary.list_genres().await.is_empty());
        assert_eq!(vocabulary.list_genres().await.len(), 2);
    }
}
