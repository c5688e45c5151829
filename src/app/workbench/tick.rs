use super::Workbench;
use crate::kernel::services::adapters::AppMessage;
use crate::kernel::Action as KernelAction;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

impl Workbench {
    /// Handles queued runtime messages (called by the main loop).
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..super::MAX_MESSAGE_DRAIN_PER_TICK {
            match self.rx.try_recv() {
                Ok(msg) => changed |= self.handle_message(msg),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Blocks up to `timeout` for one message, then drains the rest.
    pub fn wait_and_tick(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                let changed = self.handle_message(msg);
                self.tick() || changed
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::AutosaveTick { pulse, at } => {
                self.dispatch_kernel(KernelAction::AutosaveFired { pulse, at })
            }
        }
    }
}
