//! Topic filter state for the projects page.
//!
//! The page markup only carries attributes; this module turns them into
//! explicit state and computes the display of every card and year divider
//! from it. The UI shell writes the result back as inline styles.

use crate::config::SiteConfig;

/// Topic selected by a filter button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Topic {
    /// Sentinel that clears every card override
    #[default]
    All,
    Tag(String),
}

impl Topic {
    /// Interpret a `data-topic` value.
    ///
    /// A missing attribute is an empty tag, which only matches cards whose
    /// topic list is itself empty.
    #[must_use]
    pub fn parse(value: Option<&str>, config: &SiteConfig) -> Self {
        match value {
            Some(v) if v == config.all_topic => Self::All,
            Some(v) => Self::Tag(v.to_string()),
            None => Self::Tag(String::new()),
        }
    }
}

/// Comma-separated `data-topics` list of a card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicSet(Vec<String>);

impl TopicSet {
    /// Split on commas without trimming; a missing list is `""`.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        Self(
            value
                .unwrap_or_default()
                .split(',')
                .map(str::to_string)
                .collect(),
        )
    }

    /// Exact token membership, never substring.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }
}

/// Inline display state of a card or divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline override; the stylesheet decides
    #[default]
    Default,
    Hidden,
}

impl Display {
    /// Value written to `style.display`.
    #[must_use]
    pub const fn as_inline(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Hidden => "none",
        }
    }

    /// Read an inline `style.display` value.
    #[must_use]
    pub fn from_inline(value: &str) -> Self {
        if value == "none" {
            Self::Hidden
        } else {
            Self::Default
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Default)
    }

    const fn visible_if(visible: bool) -> Self {
        if visible { Self::Default } else { Self::Hidden }
    }
}

/// A `.card--project` element's filter-relevant attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectCard {
    pub topics: TopicSet,
    pub year: Option<String>,
}

impl ProjectCard {
    #[must_use]
    pub fn new(topics: Option<&str>, year: Option<&str>) -> Self {
        Self {
            topics: TopicSet::parse(topics),
            year: year.map(str::to_string),
        }
    }

    /// Display of this card while `topic` is active.
    #[must_use]
    pub fn display_for(&self, topic: &Topic) -> Display {
        match topic {
            Topic::All => Display::Default,
            Topic::Tag(tag) => Display::visible_if(self.topics.contains(tag)),
        }
    }
}

/// A `.year-divider` element's year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YearDivider {
    pub year: Option<String>,
}

impl YearDivider {
    #[must_use]
    pub fn new(year: Option<&str>) -> Self {
        Self {
            year: year.map(str::to_string),
        }
    }

    /// Visible iff some card of the same year is visible.
    #[must_use]
    pub fn display_for(&self, cards: &[ProjectCard], displays: &[Display]) -> Display {
        Display::visible_if(
            cards
                .iter()
                .zip(displays)
                .any(|(card, display)| card.year == self.year && display.is_visible()),
        )
    }
}

/// Computed display of every card and divider, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterView {
    pub cards: Vec<Display>,
    pub dividers: Vec<Display>,
}

impl FilterView {
    /// Pure mapping from the active topic to visual state.
    #[must_use]
    pub fn compute(topic: &Topic, cards: &[ProjectCard], dividers: &[YearDivider]) -> Self {
        let card_displays: Vec<Display> = cards.iter().map(|card| card.display_for(topic)).collect();
        let divider_displays = dividers
            .iter()
            .map(|divider| divider.display_for(cards, &card_displays))
            .collect();

        tracing::debug!(
            ?topic,
            visible_cards = card_displays.iter().filter(|d| d.is_visible()).count(),
            "topic filter applied"
        );

        Self {
            cards: card_displays,
            dividers: divider_displays,
        }
    }
}

/// Filter buttons and which one is marked active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterBar {
    topics: Vec<Topic>,
    active: Option<usize>,
}

impl FilterBar {
    /// Build from button topics and the page's initial active markers.
    ///
    /// Only the first marked button is kept active.
    #[must_use]
    pub fn new(topics: Vec<Topic>, initially_active: &[bool]) -> Self {
        let active = initially_active
            .iter()
            .position(|marked| *marked)
            .filter(|index| *index < topics.len());
        Self { topics, active }
    }

    /// Mark button `index` active, clearing the others.
    ///
    /// Returns the topic to apply, or `None` for an unknown index (state
    /// unchanged).
    pub fn activate(&mut self, index: usize) -> Option<&Topic> {
        let topic = self.topics.get(index)?;
        self.active = Some(index);
        Some(topic)
    }

    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn active_topic(&self) -> Option<&Topic> {
        self.active.and_then(|index| self.topics.get(index))
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
