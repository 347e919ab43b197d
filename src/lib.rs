//! Movie discovery backend over a TMDB-compatible metadata provider.
//!
//! The [`services::DiscoveryResolver`] turns search text, a genre filter and a
//! page into one normalized result page; the HTTP API and the terminal browser
//! both go through it.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
