//! The single selected node of an open channel.
//!
//! Selection is an explicit value owned by whoever has the channel open; it
//! holds a positional [`NodePath`] and rebases it whenever a delete goes
//! through it.

use crate::error::TreeError;
use crate::model::{ChannelTree, FieldUpdate, MediaType, Node, NodeKind, NodePath, NodeRef};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<NodePath>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Starts on the root.
    pub fn new() -> Self {
        Self {
            selected: Some(NodePath::root()),
        }
    }

    pub fn none() -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<&NodePath> {
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn select(&mut self, tree: &ChannelTree, path: NodePath) -> Result<(), TreeError> {
        if tree.get(&path).is_none() {
            return Err(TreeError::PathNotFound { path });
        }
        self.selected = Some(path);
        Ok(())
    }

    pub fn resolve<'a>(&self, tree: &'a ChannelTree) -> Option<NodeRef<'a>> {
        tree.get(self.selected.as_ref()?)
    }

    pub fn can_add_children(&self, tree: &ChannelTree) -> bool {
        self.resolve(tree).map(|n| n.kind()) == Some(NodeKind::Sublist)
    }

    fn require(&self) -> Result<&NodePath, TreeError> {
        self.selected.as_ref().ok_or(TreeError::NoSelection)
    }

    pub fn add_sublist(
        &self,
        tree: &mut ChannelTree,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<NodePath, TreeError> {
        tree.add_sublist(self.require()?, name, image_url)
    }

    pub fn add_media(
        &self,
        tree: &mut ChannelTree,
        name: impl Into<String>,
        image_url: impl Into<String>,
        media_url: impl Into<String>,
        media_type: MediaType,
    ) -> Result<NodePath, TreeError> {
        tree.add_media(self.require()?, name, image_url, media_url, media_type)
    }

    pub fn modify(
        &self,
        tree: &mut ChannelTree,
        fields: impl IntoIterator<Item = FieldUpdate>,
    ) -> Result<(), TreeError> {
        tree.modify(self.require()?, fields)
    }

    /// Deletes the selected node and moves the selection to its parent.
    pub fn delete_selected(&mut self, tree: &mut ChannelTree) -> Result<Node, TreeError> {
        let path = self.require()?.clone();
        let Some((parent, index)) = path.split_last() else {
            return Err(TreeError::InvalidParentKind { path });
        };
        let removed = tree.delete(&parent, index)?;
        self.selected = Some(parent);
        Ok(removed)
    }

    /// Rebases the selection after `tree.delete(parent, index)` was called by
    /// someone else.
    pub fn after_removal(&mut self, parent: &NodePath, index: usize) {
        self.selected = self
            .selected
            .take()
            .and_then(|p| p.after_removal(parent, index));
    }

    pub fn move_down(&mut self, tree: &ChannelTree) {
        self.step(tree, 1);
    }

    pub fn move_up(&mut self, tree: &ChannelTree) {
        self.step(tree, -1);
    }

    fn step(&mut self, tree: &ChannelTree, delta: isize) {
        let rows: Vec<NodePath> = tree.visible_rows().map(|e| e.path).collect();
        if rows.is_empty() {
            return;
        }

        let cur = self
            .selected
            .as_ref()
            .and_then(|p| rows.iter().position(|r| r == p));
        let next = match cur {
            None => 0,
            Some(i) => {
                let last = rows.len() as isize - 1;
                (i as isize + delta).clamp(0, last) as usize
            }
        };
        self.selected = Some(rows[next].clone());
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
