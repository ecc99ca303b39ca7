//! Plain-data description of a syntax tree parsed on a worker.
//!
//! A snapshot carries no behaviour: it is what crosses the transport between
//! the parsing worker and the thread that rebuilds a navigable tree from it.

mod error;
mod node;
mod point;
/// Messages exchanged with the parsing worker.
pub mod protocol;
#[cfg(test)]
mod tests;

pub use error::SnapshotError;
pub use node::{NodeKey, Sibling, SnapshotNode, TreeSnapshot};
pub use point::{InputEdit, Point, Range};
pub use text_size::{TextRange, TextSize};

use protocol::WorkerMessage;

/// Decodes a tree snapshot from JSON.
///
/// Accepts either a bare `{ "rootNode": ... }` object or a complete
/// `parseResult` message as sent by the worker.
pub fn decode_tree(json: &str) -> Result<TreeSnapshot, SnapshotError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("type").is_some() {
        match serde_json::from_value(value)? {
            WorkerMessage::ParseResult(response) => response.into_tree(),
            other => Err(SnapshotError::UnexpectedMessage { kind: other.kind() }),
        }
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

/// Decodes a single worker message from JSON.
pub fn decode_message(json: &str) -> Result<WorkerMessage, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
