//! Typed errors for tree edits and backend synchronization.

use thiserror::Error;

use crate::model::{NodeKind, NodePath};

/// Local invariant violations. These are caught before any network call and
/// leave the tree unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node at {path} is not a sublist and cannot hold children")]
    InvalidParentKind { path: NodePath },

    #[error("field '{field}' is not valid for a {kind} node")]
    UnknownFieldForKind { field: &'static str, kind: NodeKind },

    #[error("index {index} out of range (sublist has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no node at {path}")]
    PathNotFound { path: NodePath },

    #[error("nothing is selected")]
    NoSelection,

    #[error("the root sublist is named after its channel and cannot be renamed")]
    RootRename,

    #[error("adding under {path} would nest deeper than {max} levels")]
    TooDeep { path: NodePath, max: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("{}", network_message(.status, .message))]
    Network {
        status: Option<u16>,
        message: String,
    },

    #[error("malformed channel document: {reason}")]
    MalformedDocument { reason: String },

    #[error("invalid channel name '{name}'")]
    InvalidChannelName { name: String },
}

impl SyncError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        SyncError::MalformedDocument {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SyncError::Network { status, .. } => *status,
            _ => None,
        }
    }
}

fn network_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("network error (HTTP {}): {}", code, message),
        None => format!("network error: {}", message),
    }
}

/// Either half of an edit-then-save step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}
