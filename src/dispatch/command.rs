use log::debug;
use serde::Serialize;

use crate::{
    connection::ServerConnection,
    dispatch::{
        error::CommandError,
        params::ItemParams,
        route::{Endpoint, Route},
    },
    domain::{
        interrupt::{InterruptMode, InterruptRequest},
        playlist::PlaylistReplaceRequest,
        schedule::{ScheduleUpdate, ScheduledProgram, ScheduledProgramPatch, build_patch},
        track::{Track, build_tracks, parse_tracks_json},
    },
    http::HttpRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Track(Track),
    Playlist(PlaylistReplaceRequest),
    Interrupt(InterruptRequest),
    Program(ScheduledProgram),
    Patch(ScheduledProgramPatch),
}

/// A fully built request for one work item, independent of the server it is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub endpoint: Endpoint,
    pub path: String,
    pub body: Option<RequestBody>,
}

impl Command {
    /// Builds the request selected by the item's resource and operation.
    ///
    /// Returns `Ok(None)` when no endpoint serves the pair.
    pub fn from_params(params: &ItemParams) -> Result<Option<Command>, CommandError> {
        let Some(endpoint) = Endpoint::lookup(&params.resource, &params.operation) else {
            return Ok(None);
        };
        let route = endpoint.route();

        let body = match endpoint {
            Endpoint::StreamStatus
            | Endpoint::StreamSkip
            | Endpoint::StreamSkipTo
            | Endpoint::PlaylistGetAll
            | Endpoint::PlaylistRemoveTrack
            | Endpoint::ScheduleGetAll
            | Endpoint::ScheduleDelete
            | Endpoint::CacheStatus
            | Endpoint::CacheCleanup => None,

            Endpoint::PlaylistReplace => {
                let raw = params.tracks_json.as_deref().ok_or_else(|| {
                    CommandError::MalformedInput("playlist replace requires tracksJson".into())
                })?;
                Some(RequestBody::Playlist(PlaylistReplaceRequest::new(
                    parse_tracks_json(raw)?,
                    params.set_shuffle,
                    params.shuffle,
                )))
            }

            Endpoint::PlaylistAddTrack => Some(RequestBody::Track(params.track.build()?)),

            Endpoint::InterruptPlay => Some(RequestBody::Interrupt(match params.interrupt_mode {
                InterruptMode::Single => InterruptRequest::Single(params.track.build()?),
                InterruptMode::Multiple => {
                    InterruptRequest::Multiple(build_tracks(&params.interrupt_tracks)?)
                }
            })),

            Endpoint::ScheduleCreate => Some(RequestBody::Program(ScheduledProgram {
                name: params.program_name.clone(),
                cron: params.cron.clone(),
                tracks: build_tracks(&params.schedule_tracks)?,
                enabled: params.enabled,
            })),

            Endpoint::ScheduleUpdate => {
                let patch = build_patch(&ScheduleUpdate {
                    name: &params.update_program_name,
                    cron: &params.update_cron,
                    set_enabled: params.update_set_enabled,
                    enabled: params.update_enabled,
                    tracks: &params.schedule_tracks,
                })?;
                if patch.is_empty() {
                    debug!("schedule update for {} changes nothing", params.program_id);
                }
                Some(RequestBody::Patch(patch))
            }
        };

        Ok(Some(Command {
            endpoint,
            path: interpolate(&route, params)?,
            body,
        }))
    }

    pub fn into_request(self, conn: &ServerConnection, headers: &[(String, String)]) -> HttpRequest {
        HttpRequest {
            method: self.endpoint.route().method,
            url: conn.url(&self.path),
            headers: headers.to_vec(),
            body: self.body,
        }
    }
}

/// An empty id would silently turn e.g. `/skip/{trackId}` into a different endpoint.
fn interpolate(route: &Route, params: &ItemParams) -> Result<String, CommandError> {
    for (placeholder, name, value) in [
        ("{trackId}", "trackId", &params.track_id),
        ("{programId}", "programId", &params.program_id),
    ] {
        if route.template.contains(placeholder) && value.is_empty() {
            return Err(CommandError::MalformedInput(format!(
                "{}/{} requires a non-empty {name}",
                route.resource, route.operation
            )));
        }
    }
    Ok(route.path(&params.track_id, &params.program_id))
}
