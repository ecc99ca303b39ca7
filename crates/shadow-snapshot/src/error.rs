use thiserror::Error;

use crate::protocol::RequestId;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("worker failed to parse request {id}: {message}")]
    WorkerFailed { id: RequestId, message: String },
    #[error("parse result for request {id} carries no tree")]
    MissingTree { id: RequestId },
    #[error("expected a parse result, found a `{kind}` message")]
    UnexpectedMessage { kind: &'static str },
}
