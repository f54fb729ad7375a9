use crate::core::{Alien, Product, RecordFetcher, Result, Transport, User};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use url::Url;

// Fetch-and-decode component, parameterized over the record type: a
// new record kind needs a type argument, not a new fetcher.
pub struct JsonFetcher<R, T> {
    transport: T,
    base_url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R, T> JsonFetcher<R, T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            _record: PhantomData,
        }
    }

    fn endpoint_for(&self, user_id: &str) -> Option<Url> {
        Url::parse(&format!("{}/user/{}", self.base_url, user_id)).ok()
    }
}

#[async_trait::async_trait]
impl<R, T> RecordFetcher for JsonFetcher<R, T>
where
    R: DeserializeOwned + Send + Sync,
    T: Transport,
{
    type Record = R;

    // An endpoint that cannot be built yields an empty result rather
    // than a failure. Transport and decode failures both propagate;
    // an empty payload is a valid zero-record response.
    async fn fetch(&self, user_id: &str) -> Result<Vec<R>> {
        let url = match self.endpoint_for(user_id) {
            Some(url) => url,
            None => {
                tracing::warn!(user_id, base_url = %self.base_url, "endpoint not buildable, returning no records");
                return Ok(Vec::new());
            }
        };

        tracing::debug!(%url, "requesting records");
        let raw = self.transport.get(&url).await?;

        if raw.is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<R> = serde_json::from_slice(&raw)?;
        tracing::debug!(count = records.len(), "records decoded");
        Ok(records)
    }
}

pub type ProductFetcher<T> = JsonFetcher<Product, T>;
pub type UserFetcher<T> = JsonFetcher<User, T>;
pub type AlienFetcher<T> = JsonFetcher<Alien, T>;
