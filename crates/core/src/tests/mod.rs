//! Behavioral tests for the site scripts
//!
//! BDD-style tests using given-when-then naming. They exercise the
//! page-level behaviors through the public API rather than single helpers.

mod featured_behaviors;
mod filter_behaviors;
