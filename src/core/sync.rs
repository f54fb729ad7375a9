use crate::core::{ByteSource, RecordParser, RecordSink, Result};

// Coordinator for the acquire -> parse -> persist workflow. It owns
// none of the step logic: all three collaborators are injected at
// construction, and each step's output is the next step's only input.
pub struct FeedSync<S, P, K> {
    source: S,
    parser: P,
    sink: K,
}

impl<S, P, K> FeedSync<S, P, K>
where
    S: ByteSource,
    P: RecordParser,
    K: RecordSink<Record = P::Record>,
    P::Record: Send + Sync,
{
    pub fn new(source: S, parser: P, sink: K) -> Self {
        Self {
            source,
            parser,
            sink,
        }
    }

    // Strict sequencing; the first failing step aborts the rest, so a
    // bad feed never reaches the sink.
    pub async fn run(&self) -> Result<usize> {
        tracing::info!("starting feed sync");

        let raw = self.source.acquire().await?;
        tracing::debug!(bytes = raw.len(), "raw feed acquired");

        let records = self.parser.parse(&raw)?;
        tracing::info!(count = records.len(), "feed parsed");

        self.sink.persist(&records).await?;
        tracing::info!("feed persisted");

        Ok(records.len())
    }
}
