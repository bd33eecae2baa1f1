use std::fmt;
use std::str::FromStr;

/// Positional handle of a node: child indices walked from the root.
///
/// Paths are not stable identities. Removing the child at `(parent, index)`
/// shifts every later sibling down by one, so any path captured before the
/// removal that runs through one of those siblings now names a different
/// node. Holders must rebase with [`NodePath::after_removal`] or re-resolve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn child(&self, index: usize) -> Self {
        let mut v = self.0.clone();
        v.push(index);
        Self(v)
    }

    /// Parent path and index within it; `None` for the root.
    pub fn split_last(&self) -> Option<(NodePath, usize)> {
        let (last, rest) = self.0.split_last()?;
        Some((NodePath(rest.to_vec()), *last))
    }

    pub fn starts_with(&self, prefix: &NodePath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Rebases this path after the child at `(parent, index)` was removed.
    ///
    /// Returns `None` when the removed node is this node or one of its
    /// ancestors.
    pub fn after_removal(&self, parent: &NodePath, index: usize) -> Option<NodePath> {
        let depth = parent.depth();
        if !self.starts_with(parent) || self.depth() <= depth {
            return Some(self.clone());
        }

        let at = self.0[depth];
        if at == index {
            return None;
        }
        if at < index {
            return Some(self.clone());
        }

        let mut v = self.0.clone();
        v[depth] = at - 1;
        Some(NodePath(v))
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(v: Vec<usize>) -> Self {
        Self(v)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for i in &self.0 {
            write!(f, "/{}", i)?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = String;

    /// Parses `/`, `/0/2/1` (the leading slash is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('/').trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(NodePath::root());
        }

        let mut out = Vec::new();
        for part in trimmed.split('/') {
            let i = part
                .parse::<usize>()
                .map_err(|_| format!("invalid path segment '{}' in '{}'", part, s))?;
            out.push(i);
        }
        Ok(NodePath(out))
    }
}
