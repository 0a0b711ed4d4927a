//! Thin, panic-free wrappers over the web-sys DOM calls the page scripts use.
//!
//! Every JS exception is mapped into [`UiError`]; lookups that find nothing
//! return `None` or an empty list rather than an error.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{Result, UiError};

/// Something CSS selectors can be run against.
pub trait Scope {
    /// Raw `querySelector`.
    ///
    /// # Errors
    ///
    /// Returns the thrown value for an invalid selector.
    fn select(&self, selector: &str) -> std::result::Result<Option<Element>, wasm_bindgen::JsValue>;

    /// Raw `querySelectorAll`.
    ///
    /// # Errors
    ///
    /// Returns the thrown value for an invalid selector.
    fn select_all(&self, selector: &str) -> std::result::Result<NodeList, wasm_bindgen::JsValue>;
}

impl Scope for Document {
    fn select(&self, selector: &str) -> std::result::Result<Option<Element>, wasm_bindgen::JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> std::result::Result<NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

impl Scope for Element {
    fn select(&self, selector: &str) -> std::result::Result<Option<Element>, wasm_bindgen::JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> std::result::Result<NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

/// Get the global window
///
/// # Errors
///
/// Returns `UiError::WindowNotAvailable` outside a browser context
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowNotAvailable)
}

/// Get the window's document
///
/// # Errors
///
/// Returns `UiError::DocumentNotAvailable` if the window has no document
pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(UiError::DocumentNotAvailable)
}

/// First element matching `selector` within `scope`
///
/// # Errors
///
/// Returns `UiError::DomOperation` for an invalid selector
pub fn query(scope: &impl Scope, selector: &str) -> Result<Option<Element>> {
    scope
        .select(selector)
        .map_err(|e| UiError::dom(&format!("querySelector('{selector}')"), &e))
}

/// All elements matching `selector` within `scope`, in document order
///
/// # Errors
///
/// Returns `UiError::DomOperation` for an invalid selector
pub fn query_all(scope: &impl Scope, selector: &str) -> Result<Vec<Element>> {
    let list = scope
        .select_all(selector)
        .map_err(|e| UiError::dom(&format!("querySelectorAll('{selector}')"), &e))?;

    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Text content of a data island, empty if it has none
#[must_use]
pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

/// Inline `style.display` of an element; empty when unset or not styleable
#[must_use]
pub fn inline_display(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|el| el.style().get_property_value("display").ok())
        .unwrap_or_default()
}

/// Set inline `style.display`; an empty value removes the override
///
/// # Errors
///
/// Returns `UiError::DomOperation` if the style declaration rejects the value
pub fn set_inline_display(element: &Element, value: &str) -> Result<()> {
    let Some(el) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = el.style();

    if value.is_empty() {
        style
            .remove_property("display")
            .map(|_| ())
            .map_err(|e| UiError::dom("style.removeProperty('display')", &e))
    } else {
        style
            .set_property("display", value)
            .map_err(|e| UiError::dom("style.setProperty('display')", &e))
    }
}

#[must_use]
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Add or remove `class` so its presence equals `on`
///
/// # Errors
///
/// Returns `UiError::DomOperation` for an invalid class token
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|e| UiError::dom(&format!("classList.toggle('{class}')"), &e))
}

/// Register `handler` for `event` on `target` for the lifetime of the page
///
/// The closure is leaked on purpose: page behaviors are never unbound.
///
/// # Errors
///
/// Returns `UiError::ListenerFailed` if the listener cannot be registered
pub fn on_event<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| UiError::ListenerFailed {
            event: event.to_string(),
            reason: format!("{e:?}"),
        })?;

    closure.forget();
    Ok(())
}

/// Register a click handler for the lifetime of the page
///
/// # Errors
///
/// Returns `UiError::ListenerFailed` if the listener cannot be registered
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "click", handler)
}

/// Log to the browser console
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Log an error to the browser console
pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
