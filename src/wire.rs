//! Conversion between [`ChannelTree`] and the JSON document the backend
//! stores for each channel.
//!
//! Writes strip UI-only state (`expanded`) and emit exactly the field set of
//! each node kind. Reads reject untyped or unknown-typed nodes, default the
//! optional fields, and always rename the root after the channel.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::error::SyncError;
use crate::model::{ChannelTree, Media, MediaType, Node, Sublist};

const TYPE_SUBLIST: &str = "sublist";
const TYPE_VIDEO: &str = "video";

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WireNode {
    Sublist {
        name: String,

        #[serde(rename = "imageUrl", alias = "image", default)]
        image_url: String,

        #[serde(default)]
        entries: Vec<WireNode>,
    },
    Video {
        name: String,

        #[serde(rename = "imageUrl", alias = "image", default)]
        image_url: String,

        #[serde(rename = "mediaUrl", alias = "videourl")]
        media_url: String,

        #[serde(rename = "mediaType", alias = "videotype")]
        media_type: MediaType,

        #[serde(rename = "loop", default)]
        looping: bool,
    },
}

// The root's name and type are reassigned by the client, and freshly
// created channels are stored as `{"entries": []}`, so both are optional.
#[derive(Debug, Deserialize)]
struct WireRoot {
    #[serde(rename = "type", default)]
    kind: Option<String>,

    #[serde(rename = "imageUrl", alias = "image", default)]
    image_url: String,

    #[serde(default)]
    entries: Vec<WireNode>,
}

pub fn to_wire_document(tree: &ChannelTree) -> Value {
    sublist_to_wire(tree.root())
}

/// Compact JSON text of [`to_wire_document`], as sent in `listdata`.
pub fn to_wire_string(tree: &ChannelTree) -> String {
    to_wire_document(tree).to_string()
}

pub fn from_wire_str(channel: &str, doc: &str) -> Result<ChannelTree, SyncError> {
    let value: Value = serde_json::from_str(doc)
        .map_err(|e| SyncError::malformed(format!("invalid JSON: {}", e)))?;
    from_wire_document(channel, &value)
}

pub fn from_wire_document(channel: &str, doc: &Value) -> Result<ChannelTree, SyncError> {
    if !doc.is_object() {
        return Err(SyncError::malformed("top level is not an object"));
    }

    let root = WireRoot::deserialize(doc).map_err(|e| SyncError::malformed(e.to_string()))?;
    if let Some(kind) = root.kind.as_deref()
        && kind != TYPE_SUBLIST
    {
        return Err(SyncError::malformed(format!(
            "root must be a sublist, found type '{}'",
            kind
        )));
    }

    let mut sublist = Sublist::new(channel, root.image_url);
    sublist.children = root.entries.into_iter().map(node_from_wire).collect();
    Ok(ChannelTree::from_root(channel, sublist))
}

fn node_from_wire(node: WireNode) -> Node {
    match node {
        WireNode::Sublist {
            name,
            image_url,
            entries,
        } => {
            let mut s = Sublist::new(name, image_url);
            s.children = entries.into_iter().map(node_from_wire).collect();
            Node::Sublist(s)
        }
        WireNode::Video {
            name,
            image_url,
            media_url,
            media_type,
            looping,
        } => {
            let mut m = Media::new(name, image_url, media_url, media_type);
            m.looping = looping;
            Node::Media(m)
        }
    }
}

fn node_to_wire(node: &Node) -> Value {
    match node {
        Node::Sublist(s) => sublist_to_wire(s),
        Node::Media(m) => media_to_wire(m),
    }
}

fn sublist_to_wire(s: &Sublist) -> Value {
    let entries: Vec<Value> = s.children.iter().map(node_to_wire).collect();

    let mut out = Map::new();
    out.insert("name".to_string(), json!(s.name));
    out.insert("imageUrl".to_string(), json!(s.image_url));
    out.insert("type".to_string(), json!(TYPE_SUBLIST));
    out.insert("entries".to_string(), Value::Array(entries));
    Value::Object(out)
}

fn media_to_wire(m: &Media) -> Value {
    let mut out = Map::new();
    out.insert("name".to_string(), json!(m.name));
    out.insert("imageUrl".to_string(), json!(m.image_url));
    out.insert("type".to_string(), json!(TYPE_VIDEO));
    out.insert("mediaUrl".to_string(), json!(m.media_url));
    out.insert("mediaType".to_string(), json!(m.media_type.as_str()));
    out.insert("loop".to_string(), json!(m.looping));
    Value::Object(out)
}

#[cfg(test)]
#[path = "tests/wire_tests.rs"]
mod tests;
