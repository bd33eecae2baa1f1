mod config;
mod node;
mod path;
mod tree;

pub use self::config::{ClientConfig, ClientState, RemoteConfig};
pub use self::node::{FieldUpdate, Media, MediaType, Node, NodeKind, NodeRef, Sublist};
pub use self::path::NodePath;
pub use self::tree::{ChannelTree, MAX_DEPTH, Walk, WalkEntry};
