use serde::{Deserialize, Serialize};

use crate::dispatch::error::CommandError;

/// Represents a playable audio item as the server expects it on the wire.
///
/// Serialized as `{"type": "file", "path": ..}` or `{"type": "url", "url": ..}`,
/// with `title` and `artist` present only when they carry a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Track {
    File {
        path: String,
        #[serde(flatten)]
        metadata: TrackMetadata,
    },
    Url {
        url: String,
        #[serde(flatten)]
        metadata: TrackMetadata,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl TrackMetadata {
    /// empty strings mean "not provided"
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: non_empty(title),
            artist: non_empty(artist),
        }
    }

    fn normalized(self) -> Self {
        Self {
            title: self.title.filter(|t| !t.is_empty()),
            artist: self.artist.filter(|a| !a.is_empty()),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    File,
    Url,
}

impl Track {
    /// Drops empty `title`/`artist` values, e.g. after parsing user supplied JSON.
    pub fn normalized(self) -> Self {
        match self {
            Track::File { path, metadata } => Track::File {
                path,
                metadata: metadata.normalized(),
            },
            Track::Url { url, metadata } => Track::Url {
                url,
                metadata: metadata.normalized(),
            },
        }
    }
}

/// Converts the flat (source type, path, url, title, artist) input into a [`Track`].
///
/// Only the value matching `source_type` is used, the other one is ignored.
/// Fails if that value is empty; nothing else is checked locally.
pub fn build_track(
    source_type: SourceType,
    path: &str,
    url: &str,
    title: &str,
    artist: &str,
) -> Result<Track, CommandError> {
    let metadata = TrackMetadata::new(title, artist);
    match source_type {
        SourceType::File if path.is_empty() => Err(CommandError::MalformedInput(
            "file track requires a non-empty filePath".into(),
        )),
        SourceType::File => Ok(Track::File {
            path: path.to_string(),
            metadata,
        }),
        SourceType::Url if url.is_empty() => Err(CommandError::MalformedInput(
            "url track requires a non-empty trackUrl".into(),
        )),
        SourceType::Url => Ok(Track::Url {
            url: url.to_string(),
            metadata,
        }),
    }
}

/// Flat per-track input, as found on a work item or in one of its track collections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackFields {
    pub source_type: SourceType,
    pub file_path: String,
    pub track_url: String,
    pub title: String,
    pub artist: String,
}

impl TrackFields {
    pub fn build(&self) -> Result<Track, CommandError> {
        build_track(
            self.source_type,
            &self.file_path,
            &self.track_url,
            &self.title,
            &self.artist,
        )
    }
}

pub fn build_tracks(fields: &[TrackFields]) -> Result<Vec<Track>, CommandError> {
    fields.iter().map(TrackFields::build).collect()
}

/// Parses the raw JSON text of a track list into canonical tracks.
pub fn parse_tracks_json(raw: &str) -> Result<Vec<Track>, CommandError> {
    let tracks: Vec<Track> = serde_json::from_str(raw)
        .map_err(|e| CommandError::MalformedInput(format!("invalid tracks JSON: {e}")))?;

    tracks
        .into_iter()
        .map(Track::normalized)
        .map(|track| match &track {
            Track::File { path, .. } if path.is_empty() => Err(CommandError::MalformedInput(
                "file track with empty path in tracks JSON".into(),
            )),
            Track::Url { url, .. } if url.is_empty() => Err(CommandError::MalformedInput(
                "url track with empty url in tracks JSON".into(),
            )),
            _ => Ok(track),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_track_without_metadata() -> anyhow::Result<()> {
        let track = build_track(SourceType::File, "a.mp3", "ignored", "", "")?;

        assert_eq!(
            serde_json::to_value(&track)?,
            json!({"type": "file", "path": "a.mp3"})
        );
        Ok(())
    }

    #[test]
    fn test_url_track_with_title_only() -> anyhow::Result<()> {
        let track = build_track(SourceType::Url, "", "http://x/t.mp3", "T", "")?;

        assert_eq!(
            serde_json::to_value(&track)?,
            json!({"type": "url", "url": "http://x/t.mp3", "title": "T"})
        );
        Ok(())
    }

    #[test]
    fn test_track_with_title_and_artist() -> anyhow::Result<()> {
        let track = build_track(SourceType::File, "music/a.mp3", "", "Song", "Band")?;

        assert_eq!(
            serde_json::to_value(&track)?,
            json!({"type": "file", "path": "music/a.mp3", "title": "Song", "artist": "Band"})
        );
        Ok(())
    }

    #[test]
    fn test_empty_address_is_rejected() {
        let err = build_track(SourceType::File, "", "http://x/t.mp3", "", "").unwrap_err();
        assert!(matches!(err, CommandError::MalformedInput(_)));

        let err = build_track(SourceType::Url, "a.mp3", "", "", "").unwrap_err();
        assert!(matches!(err, CommandError::MalformedInput(_)));
    }

    #[test]
    fn test_track_fields_defaults_to_file() -> anyhow::Result<()> {
        let fields: TrackFields = serde_json::from_value(json!({"filePath": "jingle.mp3"}))?;

        assert_eq!(
            fields.build()?,
            Track::File {
                path: "jingle.mp3".into(),
                metadata: TrackMetadata::default(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_tracks_json_drops_empty_metadata() -> anyhow::Result<()> {
        let tracks = parse_tracks_json(
            r#"[
                { "type": "file", "path": "music/song.mp3", "title": "" },
                { "type": "url", "url": "https://example.com/t.mp3", "artist": "A" }
            ]"#,
        )?;

        assert_eq!(
            serde_json::to_value(&tracks)?,
            json!([
                {"type": "file", "path": "music/song.mp3"},
                {"type": "url", "url": "https://example.com/t.mp3", "artist": "A"}
            ])
        );
        Ok(())
    }

    #[test]
    fn test_parse_tracks_json_rejects_malformed() {
        for raw in [
            "not json",
            r#"{"type": "file", "path": "a.mp3"}"#,
            r#"[{"type": "file", "url": "http://x"}]"#,
            r#"[{"type": "stream", "path": "a.mp3"}]"#,
            r#"[{"type": "url", "url": ""}]"#,
        ] {
            let err = parse_tracks_json(raw).unwrap_err();
            assert!(
                matches!(err, CommandError::MalformedInput(_)),
                "expected malformed input for {raw}, got {err:?}"
            );
        }
    }
}
