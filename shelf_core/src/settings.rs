//! # Settings
//!
//! Tunable parameters for the grid and both selectors, grouped so a service
//! layer can keep them in one JSON document. Every field has a default, and
//! missing fields fall back to it:
//!
//! ```json
//! {
//!   "grid": { "rows": 5, "columns": 4, "max_row_weight_kg": 8.0 },
//!   "enumerator": { "combination_size": 4, "max_budget_weight_kg": 8.0 },
//!   "selector": { "max_budget_weight_kg": 8.0, "input_cap": 10 }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use shelf_core::settings::ShelfSettings;
//!
//! let settings = ShelfSettings::from_json(r#"{ "selector": { "input_cap": 16 } }"#)?;
//! assert_eq!(settings.selector.input_cap, 16);
//! assert_eq!(settings.grid.rows, 5);
//! # Ok::<(), shelf_core::errors::ShelfError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ShelfError, ShelfResult};
use crate::grid::GridConfig;
use crate::selection::{EnumeratorConfig, SelectorConfig};

/// All engine parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfSettings {
    /// Shape and row cap for new shelves
    pub grid: GridConfig,

    /// Fixed-size combination search
    pub enumerator: EnumeratorConfig,

    /// Optimal selection search
    pub selector: SelectorConfig,
}

impl ShelfSettings {
    /// Validate every section.
    pub fn validate(&self) -> ShelfResult<()> {
        self.grid.validate()?;
        self.enumerator.validate()?;
        self.selector.validate()
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> ShelfResult<Self> {
        let settings: ShelfSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Load and validate settings from a JSON file.
///
/// # Returns
///
/// * `Ok(ShelfSettings)` - Parsed settings
/// * `Err(ShelfError::FileError)` - The file could not be read
/// * `Err(ShelfError::SerializationError)` - Invalid JSON
/// * `Err(ShelfError::InvalidInput)` - A value is out of range
pub fn load_settings(path: &Path) -> ShelfResult<ShelfSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ShelfError::file_error("read", path.display().to_string(), e.to_string()))?;

    ShelfSettings::from_json(&contents).map_err(|e| match e {
        ShelfError::SerializationError { reason } => ShelfError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), reason),
        },
        other => other,
    })
}
