use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastSeverity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastMessage {
    pub message: String,
    pub severity: ToastSeverity,
}

impl ToastMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: ToastSeverity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: ToastSeverity::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub seed: String,
    /// Up to two characters, drawn in the header badge.
    pub initials: String,
    pub image_url: Option<String>,
}

impl Avatar {
    pub fn placeholder(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            initials: "?".to_string(),
            image_url: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.image_url.is_none() && self.initials == "?"
    }
}
