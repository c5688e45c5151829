//! Service ports: traits + data contracts.

pub mod content;
pub mod settings;

pub use content::{ContentSource, FlushSink};
pub use settings::{EditorSettings, Settings};
