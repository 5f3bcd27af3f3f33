use serde::Serialize;

use super::track::{Track, TrackFields, build_tracks};
use crate::dispatch::error::CommandError;

/// Body of `POST /schedule/programs`. `cron` is passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledProgram {
    pub name: String,
    pub cron: String,
    pub tracks: Vec<Track>,
    pub enabled: bool,
}

/// Body of `PUT /schedule/programs/{id}`.
///
/// A missing key leaves the remote value unchanged, so `None` fields are
/// omitted entirely rather than sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduledProgramPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
}

/// The "change this?" inputs of a schedule update.
#[derive(Debug, Clone, Default)]
pub struct ScheduleUpdate<'a> {
    pub name: &'a str,
    pub cron: &'a str,
    pub set_enabled: bool,
    pub enabled: bool,
    pub tracks: &'a [TrackFields],
}

impl ScheduledProgramPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.cron.is_none() && self.enabled.is_none() && self.tracks.is_none()
    }
}

/// Builds the sparse patch. Each key is decided on its own:
/// name and cron when non-empty, enabled only when `set_enabled` is on,
/// tracks when at least one is supplied.
pub fn build_patch(update: &ScheduleUpdate<'_>) -> Result<ScheduledProgramPatch, CommandError> {
    let tracks = if update.tracks.is_empty() {
        None
    } else {
        Some(build_tracks(update.tracks)?)
    };

    Ok(ScheduledProgramPatch {
        name: (!update.name.is_empty()).then(|| update.name.to_string()),
        cron: (!update.cron.is_empty()).then(|| update.cron.to_string()),
        enabled: update.set_enabled.then_some(update.enabled),
        tracks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::track::SourceType;
    use serde_json::json;

    #[test]
    fn test_patch_with_only_cron() -> anyhow::Result<()> {
        let patch = build_patch(&ScheduleUpdate {
            cron: "5 * * * *",
            // inert without set_enabled
            enabled: true,
            ..Default::default()
        })?;

        assert_eq!(serde_json::to_value(&patch)?, json!({"cron": "5 * * * *"}));
        Ok(())
    }

    #[test]
    fn test_enabled_requires_flag() -> anyhow::Result<()> {
        let patch = build_patch(&ScheduleUpdate {
            set_enabled: true,
            enabled: false,
            ..Default::default()
        })?;

        assert_eq!(serde_json::to_value(&patch)?, json!({"enabled": false}));
        Ok(())
    }

    #[test]
    fn test_empty_update_is_empty_object() -> anyhow::Result<()> {
        let patch = build_patch(&ScheduleUpdate::default())?;

        assert!(patch.is_empty());
        assert_eq!(serde_json::to_value(&patch)?, json!({}));
        Ok(())
    }

    #[test]
    fn test_full_patch() -> anyhow::Result<()> {
        let tracks = vec![TrackFields {
            source_type: SourceType::Url,
            track_url: "https://example.com/news.mp3".into(),
            artist: "Newsroom".into(),
            ..Default::default()
        }];

        let patch = build_patch(&ScheduleUpdate {
            name: "Hourly News",
            cron: "0 * * * *",
            set_enabled: true,
            enabled: true,
            tracks: &tracks,
        })?;

        assert_eq!(
            serde_json::to_value(&patch)?,
            json!({
                "name": "Hourly News",
                "cron": "0 * * * *",
                "enabled": true,
                "tracks": [{"type": "url", "url": "https://example.com/news.mp3", "artist": "Newsroom"}]
            })
        );
        Ok(())
    }

    #[test]
    fn test_program_serializes_all_fields() -> anyhow::Result<()> {
        let program = ScheduledProgram {
            name: "Hourly Jingle".into(),
            cron: "0 * * * *".into(),
            tracks: vec![],
            enabled: true,
        };

        assert_eq!(
            serde_json::to_value(&program)?,
            json!({"name": "Hourly Jingle", "cron": "0 * * * *", "tracks": [], "enabled": true})
        );
        Ok(())
    }
}
