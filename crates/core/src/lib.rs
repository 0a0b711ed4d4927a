//! Core logic for the Physical Perception Lab site scripts
//!
//! Everything here is target-independent: the browser shell in `ppl-ui`
//! reads attributes and data islands out of the page, hands them to this
//! crate, and writes the results back.
//!
//! ## Module Structure
//! - `project`: project records, year parsing and island validation
//! - `featured`: random featured selection ordered by recency
//! - `render`: featured grid markup
//! - `filter`: topic filter state and card/divider visibility
//! - `toggle`: nav menu, bibtex block and disclosure toggles
//! - `config`: site configuration
//! - `error` / `result`: error type and Result helpers

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod featured;
pub mod filter;
pub mod project;
pub mod render;
pub mod result;
pub mod toggle;

pub use config::SiteConfig;
pub use error::Error;
pub use featured::select_featured;
pub use filter::{Display, FilterBar, FilterView, ProjectCard, Topic, TopicSet, YearDivider};
pub use project::{MediaKind, Project, ProjectRecord, extract_year, parse_projects};
pub use render::{escape_attr_quotes, render_featured};
pub use result::{GenericResultExt, Result, ResultExt};
pub use toggle::{Disclosure, NavMenu, next_block_display};

#[cfg(test)]
mod tests;
