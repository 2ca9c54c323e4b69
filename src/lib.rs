//! Caching layer for remote server version lookups.
//!
//! Build-status publishers occasionally need the version of the VCS hosting
//! service they talk to (GitLab, Bitbucket Server, ...) to decide which API
//! shapes are available. The version changes rarely, so it is cached per URL
//! for 24 hours, and a failed refresh serves the last known value for another
//! window instead of hammering a failing endpoint.

pub mod config;
pub mod version;
