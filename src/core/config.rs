use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::core::error::BoardError;
use crate::core::models::BoardColumns;

/// Global the host page may set before the wasm bundle starts.
pub const CONFIG_GLOBAL: &str = "__DRAG_BOARD_CONFIG__";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    /// Browser-drawn drag image only.
    Native,
    /// Floating preview built from the source card's computed style.
    #[default]
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub columns: BoardColumns,
    pub preview: PreviewMode,
    /// Opacity applied to the source card while its preview is shown.
    pub dimmed_opacity: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: BoardColumns::new(vec![vec!["item1".to_string()], vec!["item2".to_string()]]),
            preview: PreviewMode::Custom,
            dimmed_opacity: 0.01,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), BoardError> {
        if !(0.0..=1.0).contains(&self.dimmed_opacity) {
            return Err(BoardError::InvalidOpacity(self.dimmed_opacity));
        }
        self.columns.validate()
    }

    pub fn from_json(raw: &str) -> Result<Self, BoardError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| BoardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_js(value: JsValue) -> Result<Self, BoardError> {
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| BoardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads [`CONFIG_GLOBAL`] from `window`, either as an object or as JSON
    /// text, falling back to the default board when it is absent or invalid.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            log::warn!("no window available, using default board config");
            return Self::default();
        };

        let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to read {}: {:?}", CONFIG_GLOBAL, e);
                return Self::default();
            }
        };

        if value.is_undefined() || value.is_null() {
            log::info!("{} not set, using default board config", CONFIG_GLOBAL);
            return Self::default();
        }

        let parsed = match value.as_string() {
            Some(raw) => Self::from_json(&raw),
            None => Self::from_js(value),
        };

        match parsed {
            Ok(config) => {
                if config.columns.is_empty() {
                    log::warn!("board config has no columns, nothing can be dragged");
                }
                log::info!(
                    "loaded board config: {} columns, {} items, {:?} preview",
                    config.columns.len(),
                    config.columns.item_count(),
                    config.preview
                );
                config
            }
            Err(e) => {
                log::warn!("{}, using default board config", e);
                Self::default()
            }
        }
    }
}
