//! Service adapters: runtime specific implementations (timers, IO, sinks).

pub mod autosave;
pub mod content;
pub mod paths;
pub mod runtime;
pub mod settings;

pub use autosave::AutosaveService;
pub use content::{FlushRecord, LogFlushSink, RecordingFlushSink, StaticContentSource};
pub use paths::{ensure_log_dir, get_log_dir, get_settings_path};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, load_settings, load_settings_from,
    save_settings_to, SettingsError,
};
