use crate::core::{ByteSource, Result, Transport};
use reqwest::Client;
use url::Url;

// reqwest-backed transport. Non-2xx responses surface as transport
// failures; callers see nothing of the response beyond the body.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!(%url, status = %response.status(), "transport response");

        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

// Byte source pinned to one endpoint, for workflows that always read
// the same feed.
pub struct EndpointSource<T> {
    transport: T,
    endpoint: Url,
}

impl<T> EndpointSource<T> {
    pub fn new(transport: T, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> ByteSource for EndpointSource<T> {
    async fn acquire(&self) -> Result<Vec<u8>> {
        self.transport.get(&self.endpoint).await
    }
}
