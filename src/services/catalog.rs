use std::sync::Arc;

use crate::{
    models::{
        ApiListResponse, Category, CategoryListing, HeroItem, HomeFeed, HomeSection, ResultItem,
        ResultPage,
    },
    services::{
        discovery::normalize_page,
        images::ImageUrls,
        providers::MovieProvider,
    },
};

const HERO_COUNT: usize = 3;
const SECTION_COUNT: usize = 10;

/// Sections shown under the hero strip, in display order
pub const HOME_SECTIONS: [Category; 3] =
    [Category::Upcoming, Category::Popular, Category::TopRated];

/// Category listings and the home page feed
#[derive(Clone)]
pub struct Catalog {
    provider: Arc<dyn MovieProvider>,
    images: ImageUrls,
}

impl Catalog {
    pub fn new(provider: Arc<dyn MovieProvider>, images: ImageUrls) -> Self {
        Self { provider, images }
    }

    /// Same normalization and failure policy as discovery
    pub async fn list_category(&self, category: Category, page: u32) -> CategoryListing {
        let page = page.max(1);
        let result = match self.provider.list_category(category, page).await {
            Ok(response) => normalize_page(response, page),
            Err(e) => {
                tracing::warn!(%category, page, error = %e, "Category listing failed");
                ResultPage::empty(page)
            }
        };

        CategoryListing {
            category,
            title: category.title(),
            page: result,
        }
    }

    pub async fn home(&self) -> HomeFeed {
        let (hero, upcoming, popular, top_rated) = tokio::join!(
            self.provider.list_category(Category::NowPlaying, 1),
            self.provider.list_category(HOME_SECTIONS[0], 1),
            self.provider.list_category(HOME_SECTIONS[1], 1),
            self.provider.list_category(HOME_SECTIONS[2], 1),
        );

        let hero = match hero {
            Ok(list) => list
                .results
                .unwrap_or_default()
                .into_iter()
                .take(HERO_COUNT)
                .map(|m| HeroItem {
                    backdrop_url: self
                        .images
                        .backdrop_or_poster(m.backdrop_path.as_deref(), m.poster_path.as_deref()),
                    id: m.id,
                    title: m.display_title().to_string(),
                    overview: m.overview,
                    average_rating: m.vote_average.unwrap_or(0.0),
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Now playing strip unavailable");
                Vec::new()
            }
        };

        let sections = HOME_SECTIONS
            .into_iter()
            .zip([upcoming, popular, top_rated])
            .map(|(category, response)| HomeSection {
                category,
                title: category.title(),
                items: section_items(category, response),
            })
            .collect();

        HomeFeed { hero, sections }
    }
}

fn section_items(
    category: Category,
    response: crate::error::AppResult<ApiListResponse>,
) -> Vec<ResultItem> {
    match response {
        Ok(list) => list
            .results
            .unwrap_or_default()
            .into_iter()
            .take(SECTION_COUNT)
            .map(ResultItem::from)
            .collect(),
        Err(e) => {
            tracing::warn!(%category, error = %e, "Home section unavailable");
            Vec::new()
        }
    }
}
