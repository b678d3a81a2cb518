//! Player preferences
//!
//! Persisted in LocalStorage in the browser; read from a JSON file named by
//! `BRICK_BREAKER_SETTINGS` natively.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_TICK_INTERVAL_MS, TICK_INTERVAL_MS};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Loop ===
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u64,

    /// Let the paddle follow the ball on its own
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_volume: 1.0,
            muted: false,
            tick_interval_ms: TICK_INTERVAL_MS,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Clamp values into their valid ranges
    pub fn sanitized(mut self) -> Self {
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.tick_interval_ms = self.tick_interval_ms.clamp(1, MAX_TICK_INTERVAL_MS);
        self
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Environment variable naming a settings file (native)
    pub const SETTINGS_ENV: &'static str = "BRICK_BREAKER_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from the file named by `BRICK_BREAKER_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::SETTINGS_ENV) else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // Native settings are read-only
    }
}
