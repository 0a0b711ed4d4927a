//! "Prospective students" disclosure panel

use std::cell::Cell;
use std::rc::Rc;

use ppl_core::Disclosure;
use web_sys::{Document, Element};

use crate::contract::{classes, ids};
use crate::dom;
use crate::error::Result;

/// Bind the panel toggle when toggle, content and arrow all exist
///
/// # Errors
///
/// Returns `UiError::ListenerFailed` if the listener cannot be registered
pub fn mount(document: &Document) -> Result<()> {
    let (Some(toggle), Some(content), Some(arrow)) = (
        document.get_element_by_id(ids::PROSPECTIVE_TOGGLE),
        document.get_element_by_id(ids::PROSPECTIVE_CONTENT),
        document.get_element_by_id(ids::PROSPECTIVE_ARROW),
    ) else {
        return Ok(());
    };

    bind(&toggle, content, arrow)
}

/// Each click flips the content and arrow classes together
///
/// # Errors
///
/// Returns `UiError::ListenerFailed` if the listener cannot be registered
pub fn bind(toggle: &Element, content: Element, arrow: Element) -> Result<()> {
    let panel = Rc::new(Cell::new(Disclosure::new(dom::has_class(
        &content,
        classes::PROSPECTIVE_CONTENT_OPEN,
    ))));

    dom::on_click(toggle, move |_| {
        let mut state = panel.get();
        let open = state.toggle();
        panel.set(state);

        dom::set_class(&content, classes::PROSPECTIVE_CONTENT_OPEN, open)
            .and_then(|()| dom::set_class(&arrow, classes::PROSPECTIVE_ARROW_OPEN, open))
            .unwrap_or_else(|e| dom::log_error(&format!("prospective toggle failed: {e}")));
    })
}
