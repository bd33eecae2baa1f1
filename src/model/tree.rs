use crate::error::TreeError;

use super::node::{FieldUpdate, Media, MediaType, Node, NodeKind, NodeRef, Sublist};
use super::path::NodePath;

/// Deepest path a node may sit at (root is depth 0). Each level costs two
/// JSON nesting levels on the wire, which keeps every buildable tree well
/// inside the decoder's recursion limit.
pub const MAX_DEPTH: usize = 32;

/// One channel's content. The root is always a sublist named after the
/// channel; the tree owns every node exclusively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelTree {
    root: Sublist,
}

/// An entry yielded by [`ChannelTree::walk`].
#[derive(Clone, Debug)]
pub struct WalkEntry<'a> {
    pub path: NodePath,
    pub depth: usize,
    pub node: NodeRef<'a>,
}

impl ChannelTree {
    /// Empty placeholder tree for `channel`.
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            root: Sublist::new(channel, ""),
        }
    }

    /// Builds a tree around an existing root, forcing the root name to the
    /// channel name.
    pub fn from_root(channel: impl Into<String>, mut root: Sublist) -> Self {
        root.name = channel.into();
        Self { root }
    }

    pub fn channel_name(&self) -> &str {
        &self.root.name
    }

    pub fn root(&self) -> &Sublist {
        &self.root
    }

    /// Total node count, root included.
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub fn get(&self, path: &NodePath) -> Option<NodeRef<'_>> {
        let mut cur = NodeRef::Sublist(&self.root);
        for &i in path.indices() {
            let parent = cur.as_sublist()?;
            cur = parent.children.get(i)?.as_ref();
        }
        Some(cur)
    }

    pub fn sublist(&self, path: &NodePath) -> Result<&Sublist, TreeError> {
        match self.get(path) {
            Some(NodeRef::Sublist(s)) => Ok(s),
            Some(NodeRef::Media(_)) => Err(TreeError::InvalidParentKind { path: path.clone() }),
            None => Err(TreeError::PathNotFound { path: path.clone() }),
        }
    }

    fn sublist_mut(&mut self, path: &NodePath) -> Result<&mut Sublist, TreeError> {
        let mut cur = &mut self.root;
        let indices = path.indices();
        for (depth, &i) in indices.iter().enumerate() {
            let not_found = || TreeError::PathNotFound { path: path.clone() };
            match cur.children.get_mut(i).ok_or_else(not_found)? {
                Node::Sublist(s) => cur = s,
                Node::Media(_) => {
                    // A media node in the middle of the path means the path
                    // overshoots; at the end it means the wrong kind.
                    if depth + 1 == indices.len() {
                        return Err(TreeError::InvalidParentKind { path: path.clone() });
                    }
                    return Err(TreeError::PathNotFound { path: path.clone() });
                }
            }
        }
        Ok(cur)
    }

    fn node_mut(&mut self, path: &NodePath) -> Result<&mut Node, TreeError> {
        let (parent, index) = path
            .split_last()
            .ok_or_else(|| TreeError::PathNotFound { path: path.clone() })?;
        let parent = self
            .sublist_mut(&parent)
            .map_err(|_| TreeError::PathNotFound { path: path.clone() })?;
        parent
            .children
            .get_mut(index)
            .ok_or_else(|| TreeError::PathNotFound { path: path.clone() })
    }

    pub fn add_sublist(
        &mut self,
        parent: &NodePath,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<NodePath, TreeError> {
        self.push_child(parent, Sublist::new(name, image_url).into())
    }

    pub fn add_media(
        &mut self,
        parent: &NodePath,
        name: impl Into<String>,
        image_url: impl Into<String>,
        media_url: impl Into<String>,
        media_type: MediaType,
    ) -> Result<NodePath, TreeError> {
        self.push_child(parent, Media::new(name, image_url, media_url, media_type).into())
    }

    /// Appends an arbitrary node (or subtree) under `parent`. Fails with
    /// [`TreeError::TooDeep`] when any node of the subtree would land below
    /// [`MAX_DEPTH`].
    pub fn push_child(&mut self, parent: &NodePath, node: Node) -> Result<NodePath, TreeError> {
        let deepest = parent.depth() + 1 + subtree_height(&node);
        let sublist = self.sublist_mut(parent)?;
        if deepest > MAX_DEPTH {
            return Err(TreeError::TooDeep {
                path: parent.clone(),
                max: MAX_DEPTH,
            });
        }
        sublist.children.push(node);
        Ok(parent.child(sublist.children.len() - 1))
    }

    /// Applies `fields` to the node at `path`. Every field is checked against
    /// the node's kind before anything is written.
    pub fn modify(
        &mut self,
        path: &NodePath,
        fields: impl IntoIterator<Item = FieldUpdate>,
    ) -> Result<(), TreeError> {
        let fields: Vec<FieldUpdate> = fields.into_iter().collect();
        let kind = self
            .get(path)
            .map(|n| n.kind())
            .ok_or_else(|| TreeError::PathNotFound { path: path.clone() })?;

        for f in &fields {
            if !f.applies_to(kind) {
                return Err(TreeError::UnknownFieldForKind {
                    field: f.field(),
                    kind,
                });
            }
        }

        if path.is_root() {
            if fields.iter().any(|f| matches!(f, FieldUpdate::Name(_))) {
                return Err(TreeError::RootRename);
            }
            for f in fields {
                self.root.apply(f);
            }
            return Ok(());
        }

        match self.node_mut(path)? {
            Node::Sublist(s) => fields.into_iter().for_each(|f| s.apply(f)),
            Node::Media(m) => fields.into_iter().for_each(|f| m.apply(f)),
        }
        Ok(())
    }

    /// Removes the child at `index` of `parent` and returns it. Later siblings
    /// shift down by one; see [`NodePath::after_removal`].
    pub fn delete(&mut self, parent: &NodePath, index: usize) -> Result<Node, TreeError> {
        let sublist = self.sublist_mut(parent)?;
        let len = sublist.children.len();
        if index >= len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        Ok(sublist.children.remove(index))
    }

    pub fn set_expanded(&mut self, path: &NodePath, expanded: bool) -> Result<(), TreeError> {
        if path.is_root() {
            self.root.expanded = expanded;
            return Ok(());
        }
        self.node_mut(path)?.set_expanded(expanded);
        Ok(())
    }

    pub fn toggle_expanded(&mut self, path: &NodePath) -> Result<bool, TreeError> {
        let cur = self
            .get(path)
            .map(|n| n.expanded())
            .ok_or_else(|| TreeError::PathNotFound { path: path.clone() })?;
        self.set_expanded(path, !cur)?;
        Ok(!cur)
    }

    /// Depth-first, pre-order: parent before children, children in order.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(NodePath::root(), NodeRef::Sublist(&self.root))],
            prune_collapsed: false,
        }
    }

    /// The walk restricted to rows a tree view shows: the root, its
    /// children, and the children of every expanded sublist on the way down.
    pub fn visible_rows(&self) -> Walk<'_> {
        Walk {
            stack: vec![(NodePath::root(), NodeRef::Sublist(&self.root))],
            prune_collapsed: true,
        }
    }

    pub fn kind_at(&self, path: &NodePath) -> Option<NodeKind> {
        self.get(path).map(|n| n.kind())
    }
}

fn subtree_height(node: &Node) -> usize {
    match node {
        Node::Sublist(s) => s
            .children
            .iter()
            .map(|c| 1 + subtree_height(c))
            .max()
            .unwrap_or(0),
        Node::Media(_) => 0,
    }
}

pub struct Walk<'a> {
    stack: Vec<(NodePath, NodeRef<'a>)>,
    prune_collapsed: bool,
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;

        if let NodeRef::Sublist(s) = node {
            let descend = !self.prune_collapsed || path.is_root() || s.expanded;
            if descend {
                for (i, child) in s.children.iter().enumerate().rev() {
                    self.stack.push((path.child(i), child.as_ref()));
                }
            }
        }

        Some(WalkEntry {
            depth: path.depth(),
            path,
            node,
        })
    }
}

#[cfg(test)]
#[path = "../tests/model/tree_tests.rs"]
mod tests;
