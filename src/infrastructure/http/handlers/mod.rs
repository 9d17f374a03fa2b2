//! HTTP Handlers

mod member;
mod ping;
mod sitemap;

pub use member::*;
pub use ping::*;
pub use sitemap::*;
