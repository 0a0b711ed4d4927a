//! Topic filter bar on the projects page
//!
//! Button state lives in a [`FilterBar`]; card and divider display is
//! recomputed from it on every click with [`FilterView::compute`] and
//! written back as inline styles.

use std::cell::RefCell;
use std::rc::Rc;

use ppl_core::{FilterBar, FilterView, ProjectCard, SiteConfig, Topic, YearDivider};
use web_sys::{Document, Element};

use crate::contract::{attrs, classes, ids, selectors};
use crate::dom;
use crate::error::Result;

/// Elements the filter reads and writes
#[derive(Debug, Clone)]
pub struct FilterElements {
    pub buttons: Vec<Element>,
    pub cards: Vec<Element>,
    pub dividers: Vec<Element>,
}

impl FilterElements {
    /// Buttons inside `bar`; cards and dividers anywhere in `document`
    ///
    /// # Errors
    ///
    /// Returns `UiError::DomOperation` if a selector query throws
    pub fn collect(bar: &Element, document: &Document) -> Result<Self> {
        Ok(Self {
            buttons: dom::query_all(bar, selectors::FILTER_BUTTON)?,
            cards: dom::query_all(document, selectors::PROJECT_CARD)?,
            dividers: dom::query_all(document, selectors::YEAR_DIVIDER)?,
        })
    }

    fn read_cards(&self) -> Vec<ProjectCard> {
        self.cards
            .iter()
            .map(|card| {
                ProjectCard::new(
                    card.get_attribute(attrs::TOPICS).as_deref(),
                    card.get_attribute(attrs::YEAR).as_deref(),
                )
            })
            .collect()
    }

    fn read_dividers(&self) -> Vec<YearDivider> {
        self.dividers
            .iter()
            .map(|divider| YearDivider::new(divider.get_attribute(attrs::YEAR).as_deref()))
            .collect()
    }
}

/// Bind the filter bar, if the page has one
///
/// # Errors
///
/// Returns an error if element lookup or listener registration fails
pub fn mount(document: &Document, config: &SiteConfig) -> Result<()> {
    let Some(bar) = document.get_element_by_id(ids::FILTER_BAR) else {
        return Ok(());
    };

    bind(FilterElements::collect(&bar, document)?, config)
}

/// Attach one click handler per button
///
/// # Errors
///
/// Returns `UiError::ListenerFailed` if a listener cannot be registered
pub fn bind(elements: FilterElements, config: &SiteConfig) -> Result<()> {
    let topics = elements
        .buttons
        .iter()
        .map(|button| Topic::parse(button.get_attribute(attrs::TOPIC).as_deref(), config))
        .collect();
    let marked: Vec<bool> = elements
        .buttons
        .iter()
        .map(|button| dom::has_class(button, classes::FILTER_BUTTON_ACTIVE))
        .collect();

    let state = Rc::new(RefCell::new(FilterBar::new(topics, &marked)));
    let elements = Rc::new(elements);

    for (index, button) in elements.buttons.iter().enumerate() {
        let state = Rc::clone(&state);
        let elements = Rc::clone(&elements);
        dom::on_click(button, move |_| {
            let topic = state.borrow_mut().activate(index).cloned();
            let Some(topic) = topic else {
                return;
            };
            apply(&elements, &state.borrow(), &topic).unwrap_or_else(|e| {
                dom::log_error(&format!("topic filter failed: {e}"));
            });
        })?;
    }

    Ok(())
}

/// Write button classes, then card display, then divider display
fn apply(elements: &FilterElements, bar: &FilterBar, topic: &Topic) -> Result<()> {
    for (index, button) in elements.buttons.iter().enumerate() {
        dom::set_class(button, classes::FILTER_BUTTON_ACTIVE, bar.is_active(index))?;
    }

    let view = FilterView::compute(topic, &elements.read_cards(), &elements.read_dividers());

    for (card, display) in elements.cards.iter().zip(&view.cards) {
        dom::set_inline_display(card, display.as_inline())?;
    }
    for (divider, display) in elements.dividers.iter().zip(&view.dividers) {
        dom::set_inline_display(divider, display.as_inline())?;
    }

    Ok(())
}
