//! Site configuration.
//!
//! Every field has a default so an absent or partial `site-config` island
//! still yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Number of featured cards shown on the overview page.
pub const DEFAULT_FEATURED_COUNT: usize = 6;

/// Sentinel topic that clears every card filter.
pub const DEFAULT_ALL_TOPIC: &str = "all";

/// Media paths with these suffixes render as looping videos.
pub const DEFAULT_VIDEO_EXTENSIONS: [&str; 2] = [".mp4", ".m4v"];

/// Tunables for the featured grid and the topic filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Upper bound on featured cards
    pub featured_count: usize,
    /// Suffixes that select a `<video>` element instead of `<img>`
    pub video_extensions: Vec<String>,
    /// Topic value meaning "no filter"
    pub all_topic: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            featured_count: DEFAULT_FEATURED_COUNT,
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            all_topic: DEFAULT_ALL_TOPIC.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration island.
    ///
    /// # Errors
    ///
    /// Returns `Error::JsonParseFailed` for malformed JSON and
    /// `Error::InvalidConfig` when a value is out of range.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()
    }

    /// Check value ranges, returning the config unchanged when valid.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` describing the first bad field.
    pub fn validate(self) -> Result<Self> {
        if self.featured_count == 0 {
            return Err(Error::invalid_config("featured_count must be positive"));
        }
        if let Some(ext) = self.video_extensions.iter().find(|ext| !ext.starts_with('.')) {
            return Err(Error::invalid_config(format!(
                "video extension '{ext}' must start with '.'"
            )));
        }
        if self.all_topic.is_empty() {
            return Err(Error::invalid_config("all_topic must not be empty"));
        }
        Ok(self)
    }

    /// True when `path` names a video by its extension.
    #[must_use]
    pub fn is_video(&self, path: &str) -> bool {
        self.video_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
    }
}
