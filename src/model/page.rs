use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A WordPress page, passed through exactly as the API returned it.
///
/// Pages are rendered by the front-end from the raw object, so every
/// field is kept. The accessors only read; nothing is reshaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageDocument(Value);

impl PageDocument {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn slug(&self) -> Option<&str> {
        self.0.get("slug").and_then(Value::as_str)
    }

    /// The rendered title.
    pub fn title(&self) -> Option<&str> {
        self.0
            .get("title")
            .and_then(|title| title.get("rendered"))
            .and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
