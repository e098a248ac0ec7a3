//! # Configuration
//!
//! Rosterly has exactly two knobs: where the member list comes from and how
//! many rows a page holds. Configuration is managed by [`confique`], loaded
//! from TOML or environment layers by the embedding application; the
//! compiled defaults match the reference deployment (the hosted members
//! endpoint, pages of 10).

use confique::Config;
use serde::{Deserialize, Serialize};

/// Endpoint serving the initial member list as a JSON array.
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Rows per page. The table never shows more than this many members at once.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// URL fetched once at startup for the initial member collection.
    #[config(default = "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json")]
    pub source_url: String,

    /// Number of members per page.
    #[config(default = 10)]
    pub page_size: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RosterConfig {
    /// Get the page size, guarded against a configured zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
