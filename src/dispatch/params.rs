//! Typed parameters of a single work item

use serde::Deserialize;
use serde_json::Value;

use crate::{
    dispatch::error::CommandError,
    domain::{interrupt::InterruptMode, track::TrackFields},
};

pub const DEFAULT_CRON: &str = "0 * * * *";

fn yes() -> bool {
    true
}

fn default_cron() -> String {
    DEFAULT_CRON.to_string()
}

/// All fields a work item may carry, decoded once before dispatch.
///
/// Fields that do not apply to the selected operation are simply ignored,
/// defaults mirror the ones shown to users when a field is left untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemParams {
    pub resource: String,
    pub operation: String,

    #[serde(default)]
    pub track_id: String,
    #[serde(default)]
    pub program_id: String,

    /// single track input for `addTrack` and single mode interrupts
    #[serde(flatten)]
    pub track: TrackFields,

    #[serde(default)]
    pub interrupt_mode: InterruptMode,
    #[serde(default)]
    pub interrupt_tracks: Vec<TrackFields>,
    #[serde(default)]
    pub schedule_tracks: Vec<TrackFields>,

    /// raw JSON text of the track list for playlist replace
    #[serde(default)]
    pub tracks_json: Option<String>,
    #[serde(default)]
    pub set_shuffle: bool,
    #[serde(default = "yes")]
    pub shuffle: bool,

    #[serde(default)]
    pub program_name: String,
    #[serde(default = "default_cron")]
    pub cron: String,
    #[serde(default = "yes")]
    pub enabled: bool,

    #[serde(default)]
    pub update_program_name: String,
    #[serde(default)]
    pub update_cron: String,
    #[serde(default)]
    pub update_set_enabled: bool,
    #[serde(default = "yes")]
    pub update_enabled: bool,
}

impl ItemParams {
    pub fn from_value(item: &Value) -> Result<Self, CommandError> {
        if !item.is_object() {
            return Err(CommandError::MalformedInput(format!(
                "work item must be a JSON object, got {item}"
            )));
        }
        Self::deserialize(item)
            .map_err(|e| CommandError::MalformedInput(format!("invalid work item: {e}")))
    }
}
