use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{
        providers::{MovieProvider, TmdbProvider},
        Catalog, DetailsAggregator, DiscoveryResolver, GenreVocabulary, ImageUrls, TrailerLookup,
    },
};

/// Shared application state
///
/// Every service is built over the same provider instance.
#[derive(Clone)]
pub struct AppState {
    pub resolver: DiscoveryResolver,
    pub genres: Arc<GenreVocabulary>,
    pub trailers: TrailerLookup,
    pub details: DetailsAggregator,
    pub catalog: Catalog,
}

impl AppState {
    /// Builds the TMDB provider from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider: Arc<dyn MovieProvider> = Arc::new(TmdbProvider::new(config)?);
        Ok(Self::with_provider(provider, ImageUrls::from_config(config)))
    }

    pub fn with_provider(provider: Arc<dyn MovieProvider>, images: ImageUrls) -> Self {
        tracing::info!(provider = provider.name(), "Initializing application state");

        Self {
            resolver: DiscoveryResolver::new(Arc::clone(&provider)),
            genres: Arc::new(GenreVocabulary::new(Arc::clone(&provider))),
            trailers: TrailerLookup::new(Arc::clone(&provider)),
            details: DetailsAggregator::new(Arc::clone(&provider), images.clone()),
            catalog: Catalog::new(provider, images),
        }
    }
}
