use crate::core::{AccessToken, CredentialStore, IdentifierStore, RecordSink, ValueStore};
use crate::utils::error::Result;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

const USER_ID_KEY: &str = "user_id";
const ACCESS_TOKEN_KEY: &str = "access_token";

/// Simple key-value backend holding the user identifier under a fixed
/// namespace key. It implements only the identifier role; asking it
/// for a credential is rejected at compile time, not answered with an
/// empty stub:
///
/// ```compile_fail
/// use solid_kit::adapters::storage::PrefsStore;
/// use solid_kit::domain::ports::CredentialStore;
///
/// fn wants_credentials<S: CredentialStore>(_store: S) {}
/// wants_credentials(PrefsStore::new("/tmp/prefs"));
/// ```
#[derive(Debug, Clone)]
pub struct PrefsStore {
    base_path: PathBuf,
}

impl PrefsStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ValueStore for PrefsStore {
    fn save(&self, value: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.base_path.join(USER_ID_KEY), value)?;
        Ok(())
    }
}

impl IdentifierStore for PrefsStore {
    fn user_id(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.base_path.join(USER_ID_KEY)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

// Secure-store stand-in for the access token, isolated from the
// preferences backend: its own directory, its own namespace key, and
// the token serialized as JSON. Implements only the credential role.
#[derive(Debug, Clone)]
pub struct TokenVault {
    base_path: PathBuf,
}

impl TokenVault {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ValueStore for TokenVault {
    fn save(&self, value: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.base_path.join(ACCESS_TOKEN_KEY), value)?;
        Ok(())
    }
}

impl CredentialStore for TokenVault {
    fn access_token(&self) -> Result<Option<AccessToken>> {
        match fs::read(self.base_path.join(ACCESS_TOKEN_KEY)) {
            Ok(raw) => {
                let token = serde_json::from_slice(&raw)?;
                Ok(Some(token))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

// Record sink writing the whole batch as one pretty-printed JSON file.
pub struct FileSink<R> {
    base_path: PathBuf,
    file_name: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> FileSink<R> {
    pub fn new(base_path: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            file_name: file_name.into(),
            _record: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<R> RecordSink for FileSink<R>
where
    R: Serialize + Send + Sync,
{
    type Record = R;

    async fn persist(&self, records: &[R]) -> Result<()> {
        let path = self.base_path.join(&self.file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&path, json)?;

        tracing::debug!(path = %path.display(), count = records.len(), "records persisted");
        Ok(())
    }
}
