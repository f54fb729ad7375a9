use crate::core::{RecordParser, Result};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

// JSON decoder collaborator. An empty payload means zero records; a
// payload that does not match the record shape is a decode failure,
// and the two never collapse into each other.
pub struct JsonDecoder<R> {
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonDecoder<R> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<R> Default for JsonDecoder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RecordParser for JsonDecoder<R>
where
    R: DeserializeOwned + Send + Sync,
{
    type Record = R;

    fn parse(&self, raw: &[u8]) -> Result<Vec<R>> {
        if raw.is_empty() {
            return Ok(Vec::new());
        }

        let records = serde_json::from_slice(raw)?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Post;
    use crate::utils::error::KitError;

    #[test]
    fn test_parse_decodes_records() {
        let raw = serde_json::to_vec(&serde_json::json!([
            {"id": 7, "title": "a title", "body": "a body"}
        ]))
        .unwrap();

        let decoder: JsonDecoder<Post> = JsonDecoder::new();
        let posts = decoder.parse(&raw).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 7);
    }

    #[test]
    fn test_empty_input_is_zero_records() {
        let decoder: JsonDecoder<Post> = JsonDecoder::new();
        assert!(decoder.parse(b"").unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_payload_is_a_decode_failure() {
        let decoder: JsonDecoder<Post> = JsonDecoder::new();
        let result = decoder.parse(b"{\"unexpected\": true}");

        assert!(matches!(result, Err(KitError::DecodeError(_))));
    }
}
