//! 文件树数据模型
//!
//! 树在构造后不可变；展开/折叠属于视图状态，见 `kernel::state::ExplorerState`。

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(CompactString);

impl NodeId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(CompactString::new(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    Folder {
        id: NodeId,
        name: String,
        children: Vec<FileNode>,
    },
    File {
        id: NodeId,
        name: String,
        extension: String,
    },
}

impl FileNode {
    pub fn folder(id: impl AsRef<str>, name: impl Into<String>, children: Vec<FileNode>) -> Self {
        FileNode::Folder {
            id: NodeId::new(id),
            name: name.into(),
            children,
        }
    }

    pub fn file(
        id: impl AsRef<str>,
        name: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        FileNode::File {
            id: NodeId::new(id),
            name: name.into(),
            extension: extension.into(),
        }
    }

    pub fn id(&self) -> &NodeId {
        match self {
            FileNode::Folder { id, .. } | FileNode::File { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FileNode::Folder { name, .. } | FileNode::File { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, FileNode::Folder { .. })
    }

    pub fn extension(&self) -> Option<&str> {
        match self {
            FileNode::File { extension, .. } => Some(extension),
            FileNode::Folder { .. } => None,
        }
    }

    pub fn children(&self) -> &[FileNode] {
        match self {
            FileNode::Folder { children, .. } => children,
            FileNode::File { .. } => &[],
        }
    }
}

/// Coarse file category derived from the extension, as the picker shows it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileKind {
    Code,
    Markup,
    Stylesheet,
    Data,
    Document,
    Plain,
}

impl FileKind {
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "js" | "jsx" | "ts" | "tsx" => FileKind::Code,
            "html" => FileKind::Markup,
            "css" => FileKind::Stylesheet,
            "json" => FileKind::Data,
            "md" => FileKind::Document,
            _ => FileKind::Plain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTreeError {
    DuplicateId(NodeId),
    EmptyId,
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::DuplicateId(id) => write!(f, "duplicate node id: {}", id),
            FileTreeError::EmptyId => write!(f, "node id must not be empty"),
        }
    }
}

impl std::error::Error for FileTreeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTree {
    roots: Vec<FileNode>,
}

impl FileTree {
    pub fn new(roots: Vec<FileNode>) -> Result<Self, FileTreeError> {
        let mut seen = FxHashSet::default();
        let mut stack: Vec<&FileNode> = roots.iter().collect();
        while let Some(node) = stack.pop() {
            let id = node.id();
            if id.as_str().is_empty() {
                return Err(FileTreeError::EmptyId);
            }
            if !seen.insert(id.clone()) {
                return Err(FileTreeError::DuplicateId(id.clone()));
            }
            stack.extend(node.children());
        }
        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[FileNode] {
        &self.roots
    }

    pub fn lookup(&self, id: &NodeId) -> Option<&FileNode> {
        self.walk().find(|(node, _)| node.id() == id).map(|(node, _)| node)
    }

    #[cfg(test)]
    pub(crate) fn depth_of(&self, id: &NodeId) -> Option<usize> {
        self.walk()
            .find(|(node, _)| node.id() == id)
            .map(|(_, depth)| depth)
    }

    /// Root-level folders start expanded, deeper ones collapsed.
    pub fn initial_open_state(depth: usize) -> bool {
        depth == 0
    }

    /// Pre-order traversal yielding each node with its depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.roots.iter().rev().map(|node| (node, 0)).collect(),
        }
    }

    pub fn folders(&self) -> impl Iterator<Item = (&FileNode, usize)> {
        self.walk().filter(|(node, _)| node.is_folder())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.walk().count()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

pub struct Walk<'a> {
    stack: Vec<(&'a FileNode, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a FileNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((node, depth))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: String,
    pub is_folder: bool,
    pub is_expanded: bool,
    pub is_selected: bool,
    pub kind: Option<FileKind>,
}

impl FileTree {
    /// Rows in display order; children of a collapsed folder are skipped.
    pub fn flatten_for_view(
        &self,
        is_expanded: impl Fn(&NodeId) -> bool,
        selected: Option<&NodeId>,
    ) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(&FileNode, u16)> =
            self.roots.iter().rev().map(|node| (node, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            let expanded = node.is_folder() && is_expanded(node.id());
            result.push(FileTreeRow {
                id: node.id().clone(),
                depth,
                name: node.name().to_string(),
                is_folder: node.is_folder(),
                is_expanded: expanded,
                is_selected: selected == Some(node.id()),
                kind: node.extension().map(FileKind::from_extension),
            });

            if expanded {
                for child in node.children().iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
