pub mod catalog;
pub mod fetcher;
pub mod sync;

pub use crate::domain::model::{AccessToken, Alien, Post, Product, User};
pub use crate::domain::ports::{
    ByteSource, CredentialStore, IdentifierStore, RecordFetcher, RecordParser, RecordSink,
    Transport, ValueStore,
};
pub use crate::utils::error::Result;
