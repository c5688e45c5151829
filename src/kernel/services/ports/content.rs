//! 外部内容来源与保存出口

use crate::models::NodeId;

/// Read-only lookup used once when a document opens.
pub trait ContentSource: Send + Sync {
    fn initial_content(&self, id: &NodeId) -> Option<String>;
}

/// Write-only destination for autosave flushes.
///
/// Implementations must not block; failures stay inside the sink.
pub trait FlushSink: Send + Sync {
    fn flush(&self, file_id: &NodeId, content: &str);
}
