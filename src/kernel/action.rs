use std::time::Instant;

use crate::kernel::services::ports::EditorSettings;
use crate::models::NodeId;

use super::PulseId;

#[derive(Debug, Clone)]
pub enum Action {
    /// A click on a tree row: folders toggle, files become the active document.
    ActivateNode(NodeId),
    DocumentLoaded {
        file_id: NodeId,
        content: String,
    },
    Edit(String),
    CloseDocument,
    AutosaveFired {
        pulse: PulseId,
        at: Instant,
    },
    ApplySettings(EditorSettings),
    Teardown,
}
