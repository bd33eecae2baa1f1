//! Channel builder client: the channel tree model, its wire format, and the
//! whole-document synchronization engine, plus the HTTP client and terminal
//! front end built on top of them.

pub mod error;
pub mod logging;
pub mod model;
pub mod registry;
pub mod remote;
pub mod selection;
pub mod store;
pub mod sync;
#[cfg(test)]
mod test_support;
pub mod tui;
mod tui_shell;
pub mod wire;
pub mod xml;

pub use self::error::{ChannelError, SyncError, TreeError};
