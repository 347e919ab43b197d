pub mod catalog;
pub mod debounce;
pub mod details;
pub mod discovery;
pub mod genres;
pub mod images;
pub mod providers;
pub mod session;
pub mod trailer;

pub use catalog::Catalog;
pub use debounce::Debouncer;
pub use details::DetailsAggregator;
pub use discovery::DiscoveryResolver;
pub use genres::GenreVocabulary;
pub use images::{ImageSize, ImageUrls};
pub use session::{DiscoverySession, ViewState, ViewStatus};
pub use trailer::TrailerLookup;
