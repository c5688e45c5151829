//! 内容来源与保存出口的内存实现

use crate::kernel::services::ports::{ContentSource, FlushSink};
use crate::models::NodeId;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
    entries: FxHashMap<NodeId, String>,
}

impl StaticContentSource {
    pub fn new(entries: FxHashMap<NodeId, String>) -> Self {
        Self { entries }
    }
}

impl ContentSource for StaticContentSource {
    fn initial_content(&self, id: &NodeId) -> Option<String> {
        self.entries.get(id).cloned()
    }
}

/// Reports each flush as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFlushSink;

impl FlushSink for LogFlushSink {
    fn flush(&self, file_id: &NodeId, content: &str) {
        tracing::info!(file = %file_id, bytes = content.len(), "content changed");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushRecord {
    pub file_id: NodeId,
    pub content: String,
}

/// Keeps every flush in memory. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingFlushSink {
    records: Arc<Mutex<Vec<FlushRecord>>>,
}

impl RecordingFlushSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<FlushRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.records.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FlushSink for RecordingFlushSink {
    fn flush(&self, file_id: &NodeId, content: &str) {
        let record = FlushRecord {
            file_id: file_id.clone(),
            content: content.to_string(),
        };
        match self.records.lock() {
            Ok(mut guard) => guard.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}
