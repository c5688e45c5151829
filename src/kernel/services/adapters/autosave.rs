//! 自动保存定时器
//!
//! 每个脉冲是一个 tokio 任务，只负责按间隔向事件循环发送 `AutosaveTick`，
//! 不直接接触会话。已取消脉冲的残留消息由 `Store` 按 `PulseId` 丢弃。

use super::runtime::AppMessage;
use crate::kernel::PulseId;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

struct RunningPulse {
    id: PulseId,
    task: JoinHandle<()>,
}

pub struct AutosaveService {
    runtime: tokio::runtime::Handle,
    tx: Sender<AppMessage>,
    running: Option<RunningPulse>,
}

impl AutosaveService {
    pub fn new(runtime: tokio::runtime::Handle, tx: Sender<AppMessage>) -> Self {
        Self {
            runtime,
            tx,
            running: None,
        }
    }

    pub fn running(&self) -> Option<PulseId> {
        self.running.as_ref().map(|p| p.id)
    }

    pub fn start(&mut self, pulse: PulseId, interval: Duration) {
        if let Some(prev) = self.running.take() {
            tracing::warn!(prev = %prev.id, next = %pulse, "autosave started without cancel");
            prev.task.abort();
        }

        let tx = self.tx.clone();
        let first = tokio::time::Instant::now() + interval;
        let task = self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(first, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                let at = ticker.tick().await;
                let msg = AppMessage::AutosaveTick {
                    pulse,
                    at: at.into_std(),
                };
                if tx.send(msg).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(%pulse, interval_ms = interval.as_millis() as u64, "autosave started");
        self.running = Some(RunningPulse { id: pulse, task });
    }

    /// Stops `pulse` if it is the running one. Returns whether anything stopped.
    pub fn cancel(&mut self, pulse: PulseId) -> bool {
        match self.running.take() {
            Some(running) if running.id == pulse => {
                running.task.abort();
                tracing::debug!(%pulse, "autosave cancelled");
                true
            }
            other => {
                self.running = other;
                false
            }
        }
    }

    pub fn shutdown(&mut self) {
        if let Some(running) = self.running.take() {
            running.task.abort();
        }
    }
}

impl Drop for AutosaveService {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/autosave.rs"]
mod tests;
