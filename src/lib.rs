pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::SyncConfig;

pub use adapters::decode::JsonDecoder;
pub use adapters::http::{EndpointSource, HttpTransport};
pub use adapters::storage::{FileSink, PrefsStore, TokenVault};
pub use core::catalog::CatalogScreen;
pub use core::fetcher::{AlienFetcher, JsonFetcher, ProductFetcher, UserFetcher};
pub use core::sync::FeedSync;
pub use domain::geometry::{Rectangle, Shape, Square};
pub use utils::error::{KitError, Result};
