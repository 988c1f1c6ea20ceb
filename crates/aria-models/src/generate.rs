//! Generation request payloads.

use serde::{Deserialize, Serialize};

/// Description-mode generation: the upstream service writes the lyrics
/// from a short prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Song description
    pub prompt: String,
    /// Produce an instrumental-only track
    #[serde(default)]
    pub make_instrumental: bool,
    /// Ask the proxy to poll upstream before responding (it may still
    /// return in-progress clips if its own wait budget runs out)
    #[serde(default)]
    pub wait_audio: bool,
    /// Upstream model identifier; the proxy picks its default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Custom-mode generation with caller-authored lyrics, style tags and title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomGenerateRequest {
    /// Full lyrics, including any section/style annotations
    pub prompt: String,
    /// Music style tags
    pub tags: String,
    /// Song title
    pub title: String,
    #[serde(default)]
    pub make_instrumental: bool,
    #[serde(default)]
    pub wait_audio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            make_instrumental: false,
            wait_audio: false,
            model: None,
        }
    }
}

impl CustomGenerateRequest {
    pub fn new(
        prompt: impl Into<String>,
        tags: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            tags: tags.into(),
            title: title.into(),
            make_instrumental: false,
            wait_audio: false,
            model: None,
        }
    }
}
