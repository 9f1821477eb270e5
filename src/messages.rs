//! User-facing message catalog
//!
//! Each rejection and the unknown-engine-outcome case map to one key.
//! English defaults are built in; a host application swaps in localized
//! text per key.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    TimeHistoryCaseNotSelected,
    StaticCaseNotSelected,
    ScaleFactorInvalid,
    AngleRowsEmpty,
    AngleDuplicated,
    UnknownEngineError,
}

impl MessageKey {
    pub fn default_text(self) -> &'static str {
        match self {
            MessageKey::TimeHistoryCaseNotSelected => "Select a time history load case.",
            MessageKey::StaticCaseNotSelected => "Select a static load case.",
            MessageKey::ScaleFactorInvalid => "Scale factor must be a number greater than zero.",
            MessageKey::AngleRowsEmpty => "Add at least one angle row.",
            MessageKey::AngleDuplicated => "Angle values must be unique.",
            MessageKey::UnknownEngineError => "An unknown error occurred.",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    overrides: HashMap<MessageKey, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        self.overrides.insert(key, text.into());
        self
    }

    pub fn resolve(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }
}
