//! 当前打开文档的会话模型
//!
//! 会话整体替换，不做合并；行数随每次修改重新计算。

use super::file_tree::NodeId;
use std::time::Instant;

/// Number of `'\n'`-separated segments in `text`.
///
/// `"\r"` is kept as data, so `"a\r\nb"` is two lines and `"a\rb"` is one.
pub fn line_count(text: &str) -> usize {
    memchr::memchr_iter(b'\n', text.as_bytes()).count() + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSession {
    active_file_id: Option<NodeId>,
    buffer: String,
    line_count: usize,
    last_flushed_at: Option<Instant>,
    revision: u64,
    flushed_revision: Option<u64>,
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::empty()
    }
}

impl DocumentSession {
    pub fn empty() -> Self {
        Self {
            active_file_id: None,
            buffer: String::new(),
            line_count: 1,
            last_flushed_at: None,
            revision: 0,
            flushed_revision: None,
        }
    }

    pub fn open(file_id: NodeId, initial_content: String) -> Self {
        let line_count = line_count(&initial_content);
        Self {
            active_file_id: Some(file_id),
            buffer: initial_content,
            line_count,
            last_flushed_at: None,
            revision: 0,
            flushed_revision: None,
        }
    }

    pub fn edit(&mut self, new_buffer: String) {
        self.line_count = line_count(&new_buffer);
        self.buffer = new_buffer;
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn close(&mut self) {
        *self = Self::empty();
    }

    pub fn mark_flushed(&mut self, at: Instant) {
        self.last_flushed_at = Some(at);
        self.flushed_revision = Some(self.revision);
    }

    pub fn active_file_id(&self) -> Option<&NodeId> {
        self.active_file_id.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active_file_id.is_some()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn last_flushed_at(&self) -> Option<Instant> {
        self.last_flushed_at
    }

    #[cfg(test)]
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    /// True when the buffer changed since it was opened or last flushed.
    pub fn is_dirty(&self) -> bool {
        match self.flushed_revision {
            Some(rev) => rev != self.revision,
            None => self.revision != 0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/document.rs"]
mod tests;
