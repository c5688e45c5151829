use rustc_hash::FxHashMap;
use std::fmt;

use crate::kernel::services::ports::EditorSettings;
use crate::models::{DocumentSession, FileTree, FileTreeRow, NodeId};

/// Identity of one running autosave pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PulseId(u64);

impl PulseId {
    #[cfg(test)]
    pub fn new_for_test(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PulseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pulse#{}", self.0)
    }
}

/// Per-folder expanded flags. View state, kept apart from the immutable tree.
#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    expanded: FxHashMap<NodeId, bool>,
}

impl ExplorerState {
    pub fn new(tree: &FileTree) -> Self {
        let expanded = tree
            .folders()
            .map(|(node, depth)| (node.id().clone(), FileTree::initial_open_state(depth)))
            .collect();
        Self { expanded }
    }

    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Flips a folder's flag. Returns false for ids that are not folders.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        match self.expanded.get_mut(id) {
            Some(open) => {
                *open = !*open;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self, tree: &FileTree, selected: Option<&NodeId>) -> Vec<FileTreeRow> {
        tree.flatten_for_view(|id| self.is_expanded(id), selected)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AutosaveState {
    live: Option<PulseId>,
    next_id: u64,
}

impl AutosaveState {
    pub fn live(&self) -> Option<PulseId> {
        self.live
    }

    pub fn is_live(&self, pulse: PulseId) -> bool {
        self.live == Some(pulse)
    }

    pub(super) fn begin(&mut self) -> PulseId {
        self.next_id = self.next_id.wrapping_add(1);
        let pulse = PulseId(self.next_id);
        self.live = Some(pulse);
        pulse
    }

    pub(super) fn end(&mut self) -> Option<PulseId> {
        self.live.take()
    }
}

pub struct AppState {
    pub tree: FileTree,
    pub explorer: ExplorerState,
    pub session: DocumentSession,
    pub settings: EditorSettings,
    pub autosave: AutosaveState,
}

impl AppState {
    pub fn new(tree: FileTree, settings: EditorSettings) -> Self {
        let explorer = ExplorerState::new(&tree);
        Self {
            tree,
            explorer,
            session: DocumentSession::empty(),
            settings: settings.sanitized(),
            autosave: AutosaveState::default(),
        }
    }

    pub fn rows(&self) -> Vec<FileTreeRow> {
        self.explorer.rows(&self.tree, self.session.active_file_id())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
