use std::time::Instant;

use crate::kernel::PulseId;

#[derive(Debug)]
pub enum AppMessage {
    AutosaveTick { pulse: PulseId, at: Instant },
}
