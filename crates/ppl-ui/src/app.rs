//! Page entry point
//!
//! Binds every behavior once the document has been parsed. Each behavior
//! runs independently: a bad featured-data island leaves the grid empty but
//! the nav, filter and panel still work.

use ppl_core::{GenericResultExt, ResultExt, SiteConfig};
use web_sys::Document;

use crate::components::{featured, filter, nav, prospective};
use crate::contract::ids;
use crate::dom;
use crate::error::Result;

/// Start the page scripts
///
/// Runs immediately if the document is already parsed, otherwise on
/// `DOMContentLoaded`.
///
/// # Errors
///
/// Returns an error if there is no window/document or the load listener
/// cannot be registered
pub fn run() -> Result<()> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    nav::expose_toggle_block(&window)?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        dom::on_event(&document, "DOMContentLoaded", move |_| init_page(&target))
    } else {
        init_page(&document);
        Ok(())
    }
}

/// Configuration from the optional `site-config` island
#[must_use]
pub fn load_config(document: &Document) -> SiteConfig {
    let Some(island) = document.get_element_by_id(ids::SITE_CONFIG) else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(&dom::text_of(&island))
        .tap_err(|e| dom::log_error(&format!("ignoring site-config: {e}")))
        .or_default_logged(SiteConfig::default())
}

fn init_page(document: &Document) {
    let config = load_config(document);

    report(
        "featured",
        featured::mount(document, &config)
            .tap_ok(|count| dom::log(&format!("featured: rendered {count} projects")))
            .map(|_| ()),
    );
    report("nav", nav::mount(document));
    report("filter", filter::mount(document, &config));
    report("prospective", prospective::mount(document));
}

fn report(behavior: &str, result: Result<()>) {
    if let Err(e) = result {
        dom::log_error(&format!("{behavior} disabled: {e}"));
    }
}
