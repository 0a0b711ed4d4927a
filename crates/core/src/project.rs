//! Project records read from the `featured-data` island.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::Error;
use crate::result::Result;

/// Link used when a record has neither a project page nor a PDF.
pub const PLACEHOLDER_LINK: &str = "#";

/// One publication as authored in the page data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    /// Free text such as "CVPR, 2025"
    pub venue: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub project_page: Option<String>,
    #[serde(default)]
    pub pdf: Option<String>,
}

/// How a record's `img` is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl ProjectRecord {
    /// Creates a record with no media or links
    pub fn new(title: impl Into<String>, venue: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            venue: venue.into(),
            img: None,
            project_page: None,
            pdf: None,
        }
    }

    /// Builder pattern: set media path
    #[must_use]
    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    /// Builder pattern: set project page URL
    #[must_use]
    pub fn with_project_page(mut self, url: impl Into<String>) -> Self {
        self.project_page = Some(url.into());
        self
    }

    /// Builder pattern: set PDF URL
    #[must_use]
    pub fn with_pdf(mut self, url: impl Into<String>) -> Self {
        self.pdf = Some(url.into());
        self
    }

    /// Click-through target: project page, then PDF, then a placeholder.
    #[must_use]
    pub fn link(&self) -> &str {
        present(self.project_page.as_ref())
            .or_else(|| present(self.pdf.as_ref()))
            .unwrap_or(PLACEHOLDER_LINK)
    }

    /// Media path, empty when absent.
    #[must_use]
    pub fn media_path(&self) -> &str {
        self.img.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn media_kind(&self, config: &SiteConfig) -> MediaKind {
        match present(self.img.as_ref()) {
            Some(path) if config.is_video(path) => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }
}

/// Empty strings count as absent, as they do for the page's link fallbacks.
fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|value| !value.is_empty())
}

/// First run of four ASCII digits anywhere in `venue`.
///
/// A longer digit run yields its first four digits.
#[must_use]
pub fn extract_year(venue: &str) -> Option<u16> {
    let start = venue
        .as_bytes()
        .windows(4)
        .position(|window| window.iter().all(u8::is_ascii_digit))?;
    venue.get(start..start.checked_add(4)?)?.parse().ok()
}

/// A record that passed validation, with its year already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    record: ProjectRecord,
    year: u16,
}

impl Project {
    /// Validate a record found at `index` in the island.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingYear` if the venue has no 4-digit year.
    pub fn from_record(index: usize, record: ProjectRecord) -> Result<Self> {
        match extract_year(&record.venue) {
            Some(year) => Ok(Self { record, year }),
            None => Err(Error::missing_year(index, record.title, record.venue)),
        }
    }

    #[must_use]
    pub const fn record(&self) -> &ProjectRecord {
        &self.record
    }

    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.record.title
    }

    #[must_use]
    pub fn venue(&self) -> &str {
        &self.record.venue
    }
}

/// Parse the `featured-data` island into validated projects.
///
/// The whole island is rejected if any element is malformed, so a page never
/// renders a partial grid.
///
/// # Errors
///
/// - `Error::JsonParseFailed` if the text is not a JSON array
/// - `Error::InvalidRecord` if an element does not have the record shape
/// - `Error::MissingYear` if an element's venue carries no year
pub fn parse_projects(json: &str) -> Result<Vec<Project>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<ProjectRecord>(value)
                .map_err(|e| Error::invalid_record(index, e.to_string()))
                .and_then(|record| Project::from_record(index, record))
        })
        .collect()
}
