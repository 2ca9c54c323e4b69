//! Server version lookup layer
//!
//! This module provides the core functionality for fetching and caching the
//! version of remote VCS hosting services.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │◀────│    Cache    │◀──── get_version(url)
//! │  (fetch)    │     │  (storage)  │
//! └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Fetchers   │
//! │(gitlab, ...)│
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: In-memory TTL cache with stale-on-failure fallback
//! - [`fetcher`]: Fetcher trait for retrieving versions from remote servers
//! - [`fetchers`]: Concrete fetcher implementations (GitLab, Bitbucket Server)
//! - [`error`]: Error type for fetch operations

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod fetchers;
