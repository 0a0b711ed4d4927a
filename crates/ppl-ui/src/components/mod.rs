//! Page behaviors, one module per widget
//!
//! Each module exposes `mount`, which looks its elements up by the page
//! contract and silently does nothing when they are absent, and a
//! handle-taking `bind`/`render_into` used by `mount` and the browser tests.

pub mod featured;
pub mod filter;
pub mod nav;
pub mod prospective;
