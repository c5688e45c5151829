use std::time::Duration;

use crate::models::NodeId;

use super::PulseId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadContent {
        file_id: NodeId,
    },
    StartAutosave {
        pulse: PulseId,
        interval: Duration,
    },
    CancelAutosave {
        pulse: PulseId,
    },
    Flush {
        file_id: NodeId,
        content: String,
    },
}
