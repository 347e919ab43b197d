use crate::config::Config;

/// Width token understood by the image service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W500,
    Original,
}

impl ImageSize {
    pub fn token(&self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Builds poster and backdrop URLs from provider image paths
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base_url: String,
    placeholder: String,
}

impl ImageUrls {
    pub fn new(base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            placeholder: placeholder.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.tmdb_image_url, &config.poster_placeholder)
    }

    /// `{base}/{size}{path}`, or the placeholder when there is no path
    pub fn url(&self, path: Option<&str>, size: ImageSize) -> String {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => format!(
                "{}/{}/{}",
                self.base_url,
                size.token(),
                path.trim_start_matches('/')
            ),
            None => self.placeholder.clone(),
        }
    }

    /// Original-size backdrop, falling back to the w500 poster when absent
    pub fn backdrop_or_poster(&self, backdrop: Option<&str>, poster: Option<&str>) -> String {
        match backdrop.filter(|p| !p.trim().is_empty()) {
            Some(_) => self.url(backdrop, ImageSize::Original),
            None => self.url(poster, ImageSize::W500),
        }
    }
}
