use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::node::TreeSnapshot;
use crate::point::Range;

pub type RequestId = u64;

/// A message posted by the parsing worker, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WorkerMessage {
    /// The worker finished loading its grammar.
    Ready,
    Log {
        message: String,
    },
    /// The worker failed outside of any request and is about to exit.
    Error {
        error: String,
    },
    Pong {
        id: RequestId,
        #[serde(default)]
        timestamp: Option<u64>,
    },
    ParseResult(ParseResponse),
    /// Any message this side does not consume (format and compare results).
    #[serde(other)]
    Unknown,
}

impl WorkerMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Log { .. } => "log",
            Self::Error { .. } => "error",
            Self::Pong { .. } => "pong",
            Self::ParseResult(_) => "parseResult",
            Self::Unknown => "unknown",
        }
    }
}

/// Reply to a parse request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub id: RequestId,
    #[serde(default)]
    pub file_id: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub tree: Option<TreeSnapshot>,
    #[serde(default)]
    pub error_ranges: Vec<Range>,
    #[serde(default = "default_eol")]
    pub eol: String,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_eol() -> String {
    "\n".to_owned()
}

impl ParseResponse {
    /// Extracts the tree, failing if the worker reported an error.
    pub fn into_tree(self) -> Result<TreeSnapshot, SnapshotError> {
        if !self.success {
            let message = self.error.unwrap_or_else(|| "unknown error".to_owned());
            return Err(SnapshotError::WorkerFailed { id: self.id, message });
        }
        let mut tree = self.tree.ok_or(SnapshotError::MissingTree { id: self.id })?;
        tree.file_id = self.file_id;
        Ok(tree)
    }
}
