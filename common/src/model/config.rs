use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Caller-supplied configuration for one card.
///
/// The host builds this once per render and hands it to the component as a prop.
/// Only `can_write` changes what the card does; the other fields feed labels or are
/// passed straight through to the DOM.
///
/// Every field has a default, so a JSON document only needs the keys it overrides.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CardConfig {
    /// Text shown in the card header.
    pub label: String,
    /// The card is backed by a readable source. Affects the subtitle and placeholder.
    pub can_read: bool,
    /// Enables the choose/send/cancel controls.
    pub can_write: bool,
    /// The card is backed by a live source. Affects the subtitle and placeholder.
    pub can_observe: bool,
    /// Value of the file input's `accept` attribute. Filters the OS picker only.
    pub accepted_formats: String,
    /// Declared upper bound for uploads, in bytes. Not enforced.
    pub max_file_size: u64,
    /// CSS height of the image area, e.g. `"300px"`.
    pub height: String,
    pub show_metadata: bool,
    pub show_status: bool,
    pub dark: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            label: "Image".to_string(),
            can_read: false,
            can_write: false,
            can_observe: false,
            accepted_formats: "image/*".to_string(),
            max_file_size: 10 * 1024 * 1024,
            height: "300px".to_string(),
            show_metadata: true,
            show_status: true,
            dark: false,
        }
    }
}

impl CardConfig {
    /// Parses a configuration from JSON, filling missing keys with defaults.
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        Ok(serde_json::from_str(json)?)
    }
}
