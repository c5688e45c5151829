//! 工作台：唯一的事件循环宿主
//!
//! 职责：
//! - 把导航/编辑/设置请求交给 `Store`
//! - 执行 `Effect`（读取初始内容、启停自动保存、调用保存出口）
//! - 在 `tick` 中消费自动保存消息

use crate::kernel::services::adapters::{AppMessage, AutosaveService};
use crate::kernel::services::ports::{ContentSource, EditorSettings, FlushSink};
use crate::kernel::{Action as KernelAction, AppState, Effect, Store};
use crate::models::NodeId;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

mod snapshot;
mod tick;

pub use snapshot::EditorSnapshot;

const MAX_MESSAGE_DRAIN_PER_TICK: usize = 256;

pub struct Workbench {
    store: Store,
    autosave: AutosaveService,
    rx: Receiver<AppMessage>,
    content: Arc<dyn ContentSource>,
    sink: Arc<dyn FlushSink>,
}

impl Workbench {
    pub fn new(
        state: AppState,
        runtime: tokio::runtime::Handle,
        content: Arc<dyn ContentSource>,
        sink: Arc<dyn FlushSink>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            store: Store::new(state),
            autosave: AutosaveService::new(runtime, tx),
            rx,
            content,
            sink,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// A click on a tree node.
    pub fn activate(&mut self, id: &NodeId) -> bool {
        self.dispatch_kernel(KernelAction::ActivateNode(id.clone()))
    }

    pub fn edit(&mut self, text: impl Into<String>) -> bool {
        self.dispatch_kernel(KernelAction::Edit(text.into()))
    }

    pub fn close_document(&mut self) -> bool {
        self.dispatch_kernel(KernelAction::CloseDocument)
    }

    pub fn apply_settings(&mut self, settings: EditorSettings) -> bool {
        self.dispatch_kernel(KernelAction::ApplySettings(settings))
    }

    /// Ends the session and stops the pulse; the view is going away.
    pub fn teardown(&mut self) {
        let _ = self.dispatch_kernel(KernelAction::Teardown);
        self.autosave.shutdown();
    }

    pub fn autosave_running(&self) -> bool {
        self.autosave.running().is_some()
    }

    fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut changed = result.state_changed;
        for effect in result.effects {
            changed |= self.run_effect(effect);
        }
        changed
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::LoadContent { file_id } => {
                let content = self.content.initial_content(&file_id).unwrap_or_default();
                self.dispatch_kernel(KernelAction::DocumentLoaded { file_id, content })
            }
            Effect::StartAutosave { pulse, interval } => {
                self.autosave.start(pulse, interval);
                false
            }
            Effect::CancelAutosave { pulse } => {
                self.autosave.cancel(pulse);
                false
            }
            Effect::Flush { file_id, content } => {
                self.sink.flush(&file_id, &content);
                false
            }
        }
    }
}

impl Drop for Workbench {
    fn drop(&mut self) {
        self.autosave.shutdown();
    }
}
