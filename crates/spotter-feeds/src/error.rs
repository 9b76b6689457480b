//! Feed failure kinds.

use thiserror::Error;

/// What went wrong talking to a data source. Neither kind is ever fatal:
/// callers degrade the affected data to "unknown" and carry on.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure, timeout or a non-success HTTP status.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
    /// A body arrived but did not parse as the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub type FeedResult<T> = Result<T, FeedError>;
