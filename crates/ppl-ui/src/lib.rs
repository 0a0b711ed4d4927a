//! WASM page scripts for the Physical Perception Lab site
//!
//! Progressive enhancement over static markup: nothing here renders the
//! page, it binds behavior to elements the HTML already contains.
//!
//! ## Architecture
//! - wasm32-unknown-unknown target, built with Trunk or wasm-pack
//! - Pure logic lives in `ppl-core`; this crate only reads and writes the DOM
//! - Every listener is bound once and lives for the page lifetime
//!
//! ## Module Structure
//! - `app`: entry point and config loading
//! - `components`: featured grid, nav/bibtex toggles, topic filter, panel
//! - `contract`: ids, selectors and classes the markup provides
//! - `dom`: panic-free web-sys helpers
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod contract;
pub mod dom;
pub mod error;

pub use app::run;
pub use error::{Result, UiError};
