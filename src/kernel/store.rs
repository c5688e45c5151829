use std::time::Instant;

use crate::kernel::services::ports::EditorSettings;
use crate::models::{DocumentSession, FileNode, NodeId};

use super::{Action, AppState, Effect, PulseId};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }
}

/// Routes navigation into explorer state or document replacement, and is the
/// only place that opens/closes the session and starts/cancels its pulse.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ActivateNode(id) => self.activate_node(&id),
            Action::DocumentLoaded { file_id, content } => self.open_document(file_id, content),
            Action::Edit(text) => {
                if !self.state.session.is_open() {
                    return DispatchResult::unchanged();
                }
                if self.state.session.buffer() == text {
                    return DispatchResult::unchanged();
                }
                self.state.session.edit(text);

                // Every change pushes the next flush a full interval out.
                let mut effects = Vec::new();
                if self.state.autosave.live().is_some() {
                    self.cancel_pulse(&mut effects);
                    self.start_pulse(&mut effects);
                }
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::CloseDocument | Action::Teardown => {
                let mut effects = Vec::new();
                self.cancel_pulse(&mut effects);
                let was_open = self.state.session.is_open();
                self.state.session.close();
                DispatchResult {
                    effects,
                    state_changed: was_open,
                }
            }
            Action::AutosaveFired { pulse, at } => self.autosave_fired(pulse, at),
            Action::ApplySettings(settings) => self.apply_settings(settings),
        }
    }

    fn activate_node(&mut self, id: &NodeId) -> DispatchResult {
        let is_folder = match self.state.tree.lookup(id) {
            Some(node) => node.is_folder(),
            None => {
                tracing::debug!(node = %id, "activate: unknown node");
                return DispatchResult::unchanged();
            }
        };

        if is_folder {
            return DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.toggle(id),
            };
        }

        // Same id as the open document still goes through the full replace.
        let mut effects = Vec::new();
        self.cancel_pulse(&mut effects);
        self.state.session.close();
        effects.push(Effect::LoadContent {
            file_id: id.clone(),
        });
        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn open_document(&mut self, file_id: NodeId, content: String) -> DispatchResult {
        if !matches!(self.state.tree.lookup(&file_id), Some(FileNode::File { .. })) {
            tracing::warn!(node = %file_id, "load result for a node that is not a file");
            return DispatchResult::unchanged();
        }

        let mut effects = Vec::new();
        self.cancel_pulse(&mut effects);
        tracing::debug!(file = %file_id, bytes = content.len(), "document opened");
        self.state.session = DocumentSession::open(file_id, content);
        self.start_pulse(&mut effects);
        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn autosave_fired(&mut self, pulse: PulseId, at: Instant) -> DispatchResult {
        if !self.state.autosave.is_live(pulse) {
            tracing::debug!(%pulse, "dropping tick from cancelled pulse");
            return DispatchResult::unchanged();
        }

        let session = &mut self.state.session;
        let Some(file_id) = session.active_file_id().cloned() else {
            return DispatchResult::unchanged();
        };
        if session.buffer().is_empty() {
            return DispatchResult::unchanged();
        }

        session.mark_flushed(at);
        DispatchResult {
            effects: vec![Effect::Flush {
                file_id,
                content: session.buffer().to_string(),
            }],
            state_changed: true,
        }
    }

    fn apply_settings(&mut self, settings: EditorSettings) -> DispatchResult {
        let settings = settings.sanitized();
        if settings == self.state.settings {
            return DispatchResult::unchanged();
        }

        let restart = settings.auto_save != self.state.settings.auto_save
            || settings.autosave_interval_ms != self.state.settings.autosave_interval_ms;
        self.state.settings = settings;

        let mut effects = Vec::new();
        if restart {
            self.cancel_pulse(&mut effects);
            self.start_pulse(&mut effects);
        }
        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn cancel_pulse(&mut self, effects: &mut Vec<Effect>) {
        if let Some(pulse) = self.state.autosave.end() {
            effects.push(Effect::CancelAutosave { pulse });
        }
    }

    /// Callers cancel first; a live pulse is never replaced here.
    fn start_pulse(&mut self, effects: &mut Vec<Effect>) {
        if !self.state.settings.auto_save
            || !self.state.session.is_open()
            || self.state.autosave.live().is_some()
        {
            return;
        }
        let pulse = self.state.autosave.begin();
        effects.push(Effect::StartAutosave {
            pulse,
            interval: self.state.settings.autosave_interval(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
