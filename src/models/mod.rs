//! 数据模型层

pub mod document;
pub mod file_tree;
pub mod sample;

pub use document::{line_count, DocumentSession};
pub use file_tree::{FileKind, FileNode, FileTree, FileTreeError, FileTreeRow, NodeId};
pub use sample::{sample_contents, sample_nodes, sample_tree};
