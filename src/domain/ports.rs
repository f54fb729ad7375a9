use crate::domain::model::AccessToken;
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

// Transport collaborator: raw bytes for a target, success or failure.
// Callers never see status codes or headers.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Vec<u8>>;
}

// One-shot fetch capability: one request, one terminal outcome. The
// contract names neither a concrete transport nor a record type.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    type Record;

    async fn fetch(&self, user_id: &str) -> Result<Vec<Self::Record>>;
}

// Storage capabilities are split by role: a backend implements only
// the read operation of its own domain. Absent values read back as
// Ok(None).
pub trait ValueStore: Send + Sync {
    fn save(&self, value: &[u8]) -> Result<()>;
}

pub trait IdentifierStore: ValueStore {
    fn user_id(&self) -> Result<Option<String>>;
}

pub trait CredentialStore: ValueStore {
    fn access_token(&self) -> Result<Option<AccessToken>>;
}

// Workflow ports: one operation and one reason to change each.
#[async_trait]
pub trait ByteSource: Send + Sync {
    async fn acquire(&self) -> Result<Vec<u8>>;
}

pub trait RecordParser: Send + Sync {
    type Record;

    fn parse(&self, raw: &[u8]) -> Result<Vec<Self::Record>>;
}

#[async_trait]
pub trait RecordSink: Send + Sync {
    type Record;

    async fn persist(&self, records: &[Self::Record]) -> Result<()>;
}
