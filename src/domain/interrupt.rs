use serde::Serialize;

use super::track::Track;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterruptMode {
    #[default]
    Single,
    Multiple,
}

/// Body of `POST /interrupt`: a bare track or a bare array of tracks, never wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InterruptRequest {
    Single(Track),
    Multiple(Vec<Track>),
}
