use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Mp4,
    Audio,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Mp4 => "mp4",
            MediaType::Audio => "audio",
        }
    }

    /// Cycles through the supported encodings (used by the editor toggle).
    pub fn next(self) -> Self {
        match self {
            MediaType::Mp4 => MediaType::Audio,
            MediaType::Audio => MediaType::Mp4,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp4" => Ok(MediaType::Mp4),
            "audio" => Ok(MediaType::Audio),
            other => Err(format!("unknown media type '{}' (expected mp4 or audio)", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Sublist,
    Media,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Sublist => f.write_str("sublist"),
            NodeKind::Media => f.write_str("media"),
        }
    }
}

/// A sublist groups other nodes; child order is playback order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sublist {
    pub name: String,
    pub image_url: String,
    pub expanded: bool,
    pub children: Vec<Node>,
}

impl Sublist {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            expanded: false,
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Media {
    pub name: String,
    pub image_url: String,
    pub expanded: bool,
    pub media_url: String,
    pub media_type: MediaType,
    pub looping: bool,
}

impl Media {
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        media_url: impl Into<String>,
        media_type: MediaType,
    ) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            expanded: false,
            media_url: media_url.into(),
            media_type,
            looping: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Sublist(Sublist),
    Media(Media),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Sublist(_) => NodeKind::Sublist,
            Node::Media(_) => NodeKind::Media,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Sublist(s) => &s.name,
            Node::Media(m) => &m.name,
        }
    }

    pub fn image_url(&self) -> &str {
        match self {
            Node::Sublist(s) => &s.image_url,
            Node::Media(m) => &m.image_url,
        }
    }

    pub fn expanded(&self) -> bool {
        match self {
            Node::Sublist(s) => s.expanded,
            Node::Media(m) => m.expanded,
        }
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        match self {
            Node::Sublist(s) => s.expanded = expanded,
            Node::Media(m) => m.expanded = expanded,
        }
    }

    pub fn as_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Sublist(s) => NodeRef::Sublist(s),
            Node::Media(m) => NodeRef::Media(m),
        }
    }
}

impl From<Sublist> for Node {
    fn from(s: Sublist) -> Self {
        Node::Sublist(s)
    }
}

impl From<Media> for Node {
    fn from(m: Media) -> Self {
        Node::Media(m)
    }
}

/// Borrowed view of a node. The root is a bare `Sublist`, so walks and
/// lookups hand out this instead of `&Node`.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
    Sublist(&'a Sublist),
    Media(&'a Media),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Sublist(_) => NodeKind::Sublist,
            NodeRef::Media(_) => NodeKind::Media,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            NodeRef::Sublist(s) => &s.name,
            NodeRef::Media(m) => &m.name,
        }
    }

    pub fn image_url(&self) -> &'a str {
        match self {
            NodeRef::Sublist(s) => &s.image_url,
            NodeRef::Media(m) => &m.image_url,
        }
    }

    pub fn expanded(&self) -> bool {
        match self {
            NodeRef::Sublist(s) => s.expanded,
            NodeRef::Media(m) => m.expanded,
        }
    }

    pub fn as_sublist(&self) -> Option<&'a Sublist> {
        match self {
            NodeRef::Sublist(s) => Some(s),
            NodeRef::Media(_) => None,
        }
    }

    pub fn as_media(&self) -> Option<&'a Media> {
        match self {
            NodeRef::Sublist(_) => None,
            NodeRef::Media(m) => Some(m),
        }
    }
}

/// One field assignment as submitted by an edit form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    ImageUrl(String),
    MediaUrl(String),
    MediaType(MediaType),
    Loop(bool),
}

impl FieldUpdate {
    /// Wire name of the field.
    pub fn field(&self) -> &'static str {
        match self {
            FieldUpdate::Name(_) => "name",
            FieldUpdate::ImageUrl(_) => "imageUrl",
            FieldUpdate::MediaUrl(_) => "mediaUrl",
            FieldUpdate::MediaType(_) => "mediaType",
            FieldUpdate::Loop(_) => "loop",
        }
    }

    pub fn applies_to(&self, kind: NodeKind) -> bool {
        match self {
            FieldUpdate::Name(_) | FieldUpdate::ImageUrl(_) => true,
            FieldUpdate::MediaUrl(_) | FieldUpdate::MediaType(_) | FieldUpdate::Loop(_) => {
                kind == NodeKind::Media
            }
        }
    }
}

impl Sublist {
    pub(crate) fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::ImageUrl(v) => self.image_url = v,
            // Filtered out by `FieldUpdate::applies_to` before we get here.
            FieldUpdate::MediaUrl(_) | FieldUpdate::MediaType(_) | FieldUpdate::Loop(_) => {}
        }
    }
}

impl Media {
    pub(crate) fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::ImageUrl(v) => self.image_url = v,
            FieldUpdate::MediaUrl(v) => self.media_url = v,
            FieldUpdate::MediaType(v) => self.media_type = v,
            FieldUpdate::Loop(v) => self.looping = v,
        }
    }
}
