//! Clip records returned by the generation proxy.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One unit of requested generation work, identified by an opaque id.
///
/// The proxy returns clip records as raw JSON objects; fields not modeled
/// here are kept in `extra` so a status snapshot is a faithful passthrough
/// of whatever the endpoint returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    /// Opaque clip identifier
    pub id: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Current generation status
    #[serde(default)]
    pub status: ClipStatus,
    /// Audio output location, present once generation has produced audio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Video output location, present once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// All other per-clip fields, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Generation status vocabulary.
///
/// Only `Complete` and `Error` are terminal; any string the proxy returns
/// that is not a known status deserializes to `Unknown` and counts as
/// still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClipStatus {
    /// Accepted by the upstream service, not yet queued
    #[default]
    Submitted,
    /// Waiting for generation capacity
    Queued,
    /// Audio is being generated (partial output may already stream)
    Streaming,
    /// Generation finished successfully
    Complete,
    /// Generation failed
    Error,
    /// Any status string this client does not recognize
    #[serde(other)]
    Unknown,
}

impl ClipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipStatus::Submitted => "submitted",
            ClipStatus::Queued => "queued",
            ClipStatus::Streaming => "streaming",
            ClipStatus::Complete => "complete",
            ClipStatus::Error => "error",
            ClipStatus::Unknown => "unknown",
        }
    }

    /// Check if this is a terminal state (no further transition expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClipStatus::Complete | ClipStatus::Error)
    }
}

impl std::fmt::Display for ClipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Clip {
    /// Check if the clip has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal_classification() {
        assert!(ClipStatus::Complete.is_terminal());
        assert!(ClipStatus::Error.is_terminal());
        assert!(!ClipStatus::Submitted.is_terminal());
        assert!(!ClipStatus::Queued.is_terminal());
        assert!(!ClipStatus::Streaming.is_terminal());
        assert!(!ClipStatus::Unknown.is_terminal());
    }

    #[test]
    fn test_unrecognized_status_maps_to_unknown() {
        let clip: Clip = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "title": "Test",
            "status": "moderation_pending"
        }))
        .unwrap();
        assert_eq!(clip.status, ClipStatus::Unknown);
        assert!(!clip.is_terminal());
    }

    #[test]
    fn test_clip_passthrough_preserves_extra_fields() {
        let raw = serde_json::json!({
            "id": "c1",
            "title": "Snow Song",
            "status": "complete",
            "audio_url": "https://cdn.example.com/c1.mp3",
            "video_url": "https://cdn.example.com/c1.mp4",
            "model_name": "chirp-v5",
            "tags": "children's music, waltz",
            "duration": 187.4
        });
        let clip: Clip = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(clip.status, ClipStatus::Complete);
        assert_eq!(clip.extra["model_name"], "chirp-v5");
        assert_eq!(clip.extra["duration"], 187.4);

        // Round-trips back with the unmodeled fields intact.
        let back = serde_json::to_value(&clip).unwrap();
        assert_eq!(back["tags"], raw["tags"]);
        assert_eq!(back["audio_url"], raw["audio_url"]);
    }

    #[test]
    fn test_clip_missing_optional_fields() {
        let clip: Clip = serde_json::from_value(serde_json::json!({
            "id": "c2",
            "status": "streaming"
        }))
        .unwrap();
        assert_eq!(clip.title, "");
        assert!(clip.audio_url.is_none());
        assert!(clip.video_url.is_none());
    }
}
