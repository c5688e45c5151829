use super::Workbench;
use crate::kernel::{extension_badge, highlight, LanguageId};
use crate::models::{FileTreeRow, NodeId};
use std::time::Instant;

/// Read-only view of everything the panes render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub active_file_id: Option<NodeId>,
    pub title: Option<String>,
    pub extension_badge: Option<String>,
    pub language: Option<LanguageId>,
    pub buffer: String,
    pub line_count: usize,
    pub show_line_numbers: bool,
    pub last_flushed_at: Option<Instant>,
    pub dirty: bool,
    pub rows: Vec<FileTreeRow>,
}

impl EditorSnapshot {
    /// Gutter labels `1..=line_count`, empty when line numbers are off.
    pub fn line_numbers(&self) -> Vec<usize> {
        if self.show_line_numbers {
            (1..=self.line_count).collect()
        } else {
            Vec::new()
        }
    }
}

impl Workbench {
    pub fn snapshot(&self) -> EditorSnapshot {
        let state = self.state();
        let session = &state.session;
        let active = session
            .active_file_id()
            .and_then(|id| state.tree.lookup(id));

        EditorSnapshot {
            active_file_id: session.active_file_id().cloned(),
            title: active.map(|node| node.name().to_string()),
            extension_badge: active.and_then(|node| node.extension()).map(extension_badge),
            language: active
                .and_then(|node| node.extension())
                .and_then(LanguageId::from_extension),
            buffer: session.buffer().to_string(),
            line_count: session.line_count(),
            show_line_numbers: state.settings.line_numbers,
            last_flushed_at: session.last_flushed_at(),
            dirty: session.is_dirty(),
            rows: state.rows(),
        }
    }

    /// Buffer text passed through the highlighting hook.
    pub fn rendered_buffer(&self) -> String {
        let state = self.state();
        let extension = state
            .session
            .active_file_id()
            .and_then(|id| state.tree.lookup(id))
            .and_then(|node| node.extension())
            .unwrap_or("");
        highlight(state.session.buffer(), extension).into_owned()
    }
}
