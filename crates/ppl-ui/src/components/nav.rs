//! Mobile navigation menu and bibtex block toggles

use std::cell::Cell;
use std::rc::Rc;

use ppl_core::{NavMenu, next_block_display};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Window};

use crate::contract::{TOGGLE_BLOCK_GLOBAL, classes, selectors};
use crate::dom;
use crate::error::{Result, UiError};

/// Bind the hamburger and nav links, if both containers exist
///
/// # Errors
///
/// Returns an error if a listener cannot be registered
pub fn mount(document: &Document) -> Result<()> {
    let (Some(hamburger), Some(links)) = (
        dom::query(document, selectors::NAV_HAMBURGER)?,
        dom::query(document, selectors::NAV_LINKS)?,
    ) else {
        return Ok(());
    };

    bind(&hamburger, &links)
}

/// Hamburger toggles the open class; any link inside `links` closes it
///
/// # Errors
///
/// Returns an error if a listener cannot be registered
pub fn bind(hamburger: &Element, links: &Element) -> Result<()> {
    let menu = Rc::new(Cell::new(NavMenu::new(dom::has_class(
        links,
        classes::NAV_LINKS_OPEN,
    ))));

    {
        let menu = Rc::clone(&menu);
        let links = links.clone();
        dom::on_click(hamburger, move |_| {
            let mut state = menu.get();
            let open = state.toggle();
            menu.set(state);
            apply(&links, open).unwrap_or_else(|e| {
                dom::log_error(&format!("nav toggle failed: {e}"));
            });
        })?;
    }

    for link in dom::query_all(links, selectors::NAV_LINK)? {
        let menu = Rc::clone(&menu);
        let links = links.clone();
        dom::on_click(&link, move |_| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            apply(&links, false).unwrap_or_else(|e| {
                dom::log_error(&format!("nav close failed: {e}"));
            });
        })?;
    }

    Ok(())
}

fn apply(links: &Element, open: bool) -> Result<()> {
    dom::set_class(links, classes::NAV_LINKS_OPEN, open)
}

/// Flip a bibtex block between `block` and `none`
///
/// Unknown ids are ignored.
///
/// # Errors
///
/// Returns `UiError::DomOperation` if the style cannot be written
pub fn toggle_block(document: &Document, block_id: &str) -> Result<()> {
    let Some(block) = document.get_element_by_id(block_id) else {
        return Ok(());
    };

    let next = next_block_display(&dom::inline_display(&block));
    dom::set_inline_display(&block, next)
}

/// Install `window.toggleblock(id)` for the inline handlers in the markup
///
/// # Errors
///
/// Returns `UiError::DomOperation` if the global cannot be set
pub fn expose_toggle_block(window: &Window) -> Result<()> {
    let target = window.clone();
    let closure = Closure::wrap(Box::new(move |block_id: JsValue| {
        let Some(id) = block_id.as_string() else {
            return;
        };
        dom::document(&target)
            .and_then(|document| toggle_block(&document, &id))
            .unwrap_or_else(|e| dom::log_error(&format!("toggleblock('{id}') failed: {e}")));
    }) as Box<dyn FnMut(JsValue)>);

    js_sys::Reflect::set(
        window,
        &JsValue::from_str(TOGGLE_BLOCK_GLOBAL),
        closure.as_ref(),
    )
    .map_err(|e| UiError::dom("install toggleblock", &e))?;

    closure.forget();
    Ok(())
}
