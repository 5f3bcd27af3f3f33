use serde::Serialize;

use super::track::Track;

/// Body of `PUT /playlist`.
///
/// `shuffle` is only sent when the caller chose to change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistReplaceRequest {
    pub tracks: Vec<Track>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle: Option<bool>,
}

impl PlaylistReplaceRequest {
    pub fn new(tracks: Vec<Track>, set_shuffle: bool, shuffle: bool) -> Self {
        Self {
            tracks,
            shuffle: set_shuffle.then_some(shuffle),
        }
    }
}
