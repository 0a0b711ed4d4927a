//! Behavioral tests for topic filtering and year dividers

use crate::config::SiteConfig;
use crate::filter::{Display, FilterBar, FilterView, ProjectCard, Topic, YearDivider};

fn cards() -> Vec<ProjectCard> {
    vec![
        ProjectCard::new(Some("vision"), Some("2024")),
        ProjectCard::new(Some("robotics"), Some("2023")),
        ProjectCard::new(Some("robotics,vision"), Some("2023")),
        ProjectCard::new(None, Some("2022")),
    ]
}

fn dividers() -> Vec<YearDivider> {
    vec![
        YearDivider::new(Some("2024")),
        YearDivider::new(Some("2023")),
        YearDivider::new(Some("2022")),
    ]
}

// ============================================================================
// CARD BEHAVIORS
// ============================================================================

#[test]
fn given_topic_when_filtering_then_only_tagged_cards_stay_visible() {
    // Given
    let topic = Topic::Tag("robotics".to_string());

    // When
    let view = FilterView::compute(&topic, &cards(), &dividers());

    // Then
    assert_eq!(
        view.cards,
        vec![Display::Hidden, Display::Default, Display::Default, Display::Hidden]
    );
}

#[test]
fn given_all_when_filtering_then_every_override_is_cleared() {
    // Given
    let topic = Topic::All;

    // When
    let view = FilterView::compute(&topic, &cards(), &dividers());

    // Then
    assert!(view.cards.iter().all(|d| d.as_inline().is_empty()));
    assert!(view.dividers.iter().all(|d| d.is_visible()));
}

#[test]
fn given_topic_prefix_when_filtering_then_substring_does_not_match() {
    // Given
    let cards = vec![ProjectCard::new(Some("vision-language"), Some("2024"))];

    // When
    let view = FilterView::compute(&Topic::Tag("vision".into()), &cards, &[]);

    // Then
    assert_eq!(view.cards, vec![Display::Hidden]);
}

// ============================================================================
// YEAR DIVIDER BEHAVIORS
// ============================================================================

#[test]
fn given_vision_filter_when_applied_then_only_years_with_vision_cards_show() {
    // Given
    let cards = vec![
        ProjectCard::new(Some("vision"), Some("2024")),
        ProjectCard::new(Some("robotics"), Some("2023")),
    ];
    let dividers = vec![YearDivider::new(Some("2024")), YearDivider::new(Some("2023"))];

    // When
    let view = FilterView::compute(&Topic::Tag("vision".into()), &cards, &dividers);

    // Then
    assert_eq!(view.dividers, vec![Display::Default, Display::Hidden]);
}

#[test]
fn given_year_with_one_matching_card_when_filtering_then_divider_stays() {
    // Given / When
    let view = FilterView::compute(&Topic::Tag("vision".into()), &cards(), &dividers());

    // Then
    assert_eq!(
        view.dividers,
        vec![Display::Default, Display::Default, Display::Hidden]
    );
}

#[test]
fn given_any_topic_when_filtering_then_divider_visibility_matches_cards() {
    for tag in ["vision", "robotics", "", "unknown"] {
        let topic = Topic::Tag(tag.to_string());
        let cards = cards();
        let view = FilterView::compute(&topic, &cards, &dividers());

        for (divider, display) in dividers().iter().zip(&view.dividers) {
            let any_visible = cards
                .iter()
                .zip(&view.cards)
                .any(|(c, d)| c.year == divider.year && d.is_visible());
            assert_eq!(display.is_visible(), any_visible, "topic {tag:?}");
        }
    }
}

// ============================================================================
// BUTTON BEHAVIORS
// ============================================================================

#[test]
fn given_filter_bar_when_clicking_buttons_then_exactly_one_is_active() {
    // Given
    let config = SiteConfig::default();
    let topics = ["all", "vision", "robotics"]
        .into_iter()
        .map(|t| Topic::parse(Some(t), &config))
        .collect();
    let mut bar = FilterBar::new(topics, &[true, false, false]);

    // When
    let topic = bar.activate(2).cloned();

    // Then
    assert_eq!(topic, Some(Topic::Tag("robotics".into())));
    let active: Vec<_> = (0..bar.len()).filter(|i| bar.is_active(*i)).collect();
    assert_eq!(active, vec![2]);
}

#[test]
fn given_no_initial_marker_when_building_bar_then_nothing_is_active() {
    // Given / When
    let bar = FilterBar::new(vec![Topic::All, Topic::Tag("x".into())], &[false, false]);

    // Then
    assert_eq!(bar.active_index(), None);
    assert!(!bar.is_empty());
}
