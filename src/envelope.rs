//! The `{ success, message?, data?, count? }` wrapper every API response uses.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            timestamp: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            timestamp: None,
        }
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// Wraps a collection, filling `count` from its length.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len()),
            data: Some(items),
            timestamp: None,
        }
    }
}

impl Envelope<()> {
    pub fn status(message: impl Into<String>, timestamp: String) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: None,
            timestamp: Some(timestamp),
        }
    }
}
