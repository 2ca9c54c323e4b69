//! Concrete version fetcher implementations

pub mod bitbucket;
pub mod gitlab;
