//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod language;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use language::{extension_badge, highlight, LanguageId};
pub use state::{AppState, AutosaveState, ExplorerState, PulseId};
pub use store::{DispatchResult, Store};
