//! Static routing table from (resource, operation) to an HTTP endpoint

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    StreamStatus,
    StreamSkip,
    StreamSkipTo,
    PlaylistGetAll,
    PlaylistReplace,
    PlaylistAddTrack,
    PlaylistRemoveTrack,
    InterruptPlay,
    ScheduleGetAll,
    ScheduleCreate,
    ScheduleUpdate,
    ScheduleDelete,
    CacheStatus,
    CacheCleanup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub resource: &'static str,
    pub operation: &'static str,
    pub method: Method,
    /// path template, `{trackId}` and `{programId}` are filled per item
    pub template: &'static str,
}

const fn route(
    resource: &'static str,
    operation: &'static str,
    method: Method,
    template: &'static str,
) -> Route {
    Route {
        resource,
        operation,
        method,
        template,
    }
}

impl Endpoint {
    pub const ALL: [Endpoint; 14] = [
        Endpoint::StreamStatus,
        Endpoint::StreamSkip,
        Endpoint::StreamSkipTo,
        Endpoint::PlaylistGetAll,
        Endpoint::PlaylistReplace,
        Endpoint::PlaylistAddTrack,
        Endpoint::PlaylistRemoveTrack,
        Endpoint::InterruptPlay,
        Endpoint::ScheduleGetAll,
        Endpoint::ScheduleCreate,
        Endpoint::ScheduleUpdate,
        Endpoint::ScheduleDelete,
        Endpoint::CacheStatus,
        Endpoint::CacheCleanup,
    ];

    pub fn route(self) -> Route {
        use Method::*;

        match self {
            Endpoint::StreamStatus => route("stream", "getStatus", Get, "/status"),
            Endpoint::StreamSkip => route("stream", "skip", Post, "/skip"),
            Endpoint::StreamSkipTo => route("stream", "skipTo", Post, "/skip/{trackId}"),
            Endpoint::PlaylistGetAll => route("playlist", "getAll", Get, "/playlist"),
            Endpoint::PlaylistReplace => route("playlist", "replace", Put, "/playlist"),
            Endpoint::PlaylistAddTrack => route("playlist", "addTrack", Post, "/playlist/tracks"),
            Endpoint::PlaylistRemoveTrack => {
                route("playlist", "removeTrack", Delete, "/playlist/tracks/{trackId}")
            }
            Endpoint::InterruptPlay => route("interrupt", "play", Post, "/interrupt"),
            Endpoint::ScheduleGetAll => route("schedule", "getAll", Get, "/schedule"),
            Endpoint::ScheduleCreate => route("schedule", "create", Post, "/schedule/programs"),
            Endpoint::ScheduleUpdate => {
                route("schedule", "update", Put, "/schedule/programs/{programId}")
            }
            Endpoint::ScheduleDelete => {
                route("schedule", "delete", Delete, "/schedule/programs/{programId}")
            }
            Endpoint::CacheStatus => route("cache", "getStatus", Get, "/cache"),
            Endpoint::CacheCleanup => route("cache", "cleanup", Post, "/cache/cleanup"),
        }
    }

    /// returns None when no endpoint serves the pair
    pub fn lookup(resource: &str, operation: &str) -> Option<Endpoint> {
        Self::ALL.into_iter().find(|endpoint| {
            let route = endpoint.route();
            route.resource == resource && route.operation == operation
        })
    }
}

impl Route {
    /// Fills the path template. Values are inserted verbatim.
    pub fn path(&self, track_id: &str, program_id: &str) -> String {
        self.template
            .replace("{trackId}", track_id)
            .replace("{programId}", program_id)
    }
}
