use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MIN_FONT_SIZE: u8 = 10;
pub const MAX_FONT_SIZE: u8 = 24;
pub const TAB_SIZES: [u8; 3] = [2, 4, 8];
pub const DEFAULT_AUTOSAVE_INTERVAL_MS: u64 = 3000;
pub const MIN_AUTOSAVE_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub font_size: u8,
    pub tab_size: u8,
    pub word_wrap: bool,
    pub line_numbers: bool,
    pub auto_save: bool,
    pub autosave_interval_ms: u64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_size: 14,
            tab_size: 2,
            word_wrap: true,
            line_numbers: true,
            auto_save: true,
            autosave_interval_ms: DEFAULT_AUTOSAVE_INTERVAL_MS,
        }
    }
}

impl EditorSettings {
    /// Clamps every field into the range the settings drawer offers.
    pub fn sanitized(mut self) -> Self {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if !TAB_SIZES.contains(&self.tab_size) {
            self.tab_size = TAB_SIZES
                .iter()
                .copied()
                .min_by_key(|size| size.abs_diff(self.tab_size))
                .unwrap_or(2);
        }
        self.autosave_interval_ms = self.autosave_interval_ms.max(MIN_AUTOSAVE_INTERVAL_MS);
        self
    }

    pub fn autosave_interval(&self) -> Duration {
        Duration::from_millis(self.autosave_interval_ms.max(MIN_AUTOSAVE_INTERVAL_MS))
    }
}
