//! A folder tree where files and folders share one node type.

use crate::output::LineSink;

/// Errors from tree edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// Leaves have no children to add or remove
    #[error("Operation not supported")]
    Unsupported,
}

/// A file or a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderNode {
    File {
        name: String,
    },
    Folder {
        name: String,
        children: Vec<FolderNode>,
    },
}

impl FolderNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self::File { name: name.into() }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self::Folder {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File { name } | Self::Folder { name, .. } => name,
        }
    }

    /// Append a child. Files reject children.
    pub fn add(&mut self, node: FolderNode) -> Result<(), NodeError> {
        match self {
            Self::Folder { children, .. } => {
                children.push(node);
                Ok(())
            }
            Self::File { .. } => Err(NodeError::Unsupported),
        }
    }

    /// Remove the first direct child called `name`, returning it if found.
    pub fn remove(&mut self, name: &str) -> Result<Option<FolderNode>, NodeError> {
        match self {
            Self::Folder { children, .. } => Ok(children
                .iter()
                .position(|child| child.name() == name)
                .map(|index| children.remove(index))),
            Self::File { .. } => Err(NodeError::Unsupported),
        }
    }

    /// Mutable access to a direct child folder or file by name.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut FolderNode> {
        match self {
            Self::Folder { children, .. } => children.iter_mut().find(|c| c.name() == name),
            Self::File { .. } => None,
        }
    }

    /// Print this node and everything below it, one line per node,
    /// prefixed by one `-` per level (the root is level 1).
    pub fn display(&self, out: &dyn LineSink) {
        self.display_at(out, 1);
    }

    fn display_at(&self, out: &dyn LineSink, level: usize) {
        let marker = "-".repeat(level);
        match self {
            Self::File { name } => out.write_line(&format!("{} File: {}", marker, name)),
            Self::Folder { name, children } => {
                out.write_line(&format!("{} Folder: {}", marker, name));
                for child in children {
                    child.display_at(out, level + 1);
                }
            }
        }
    }
}
