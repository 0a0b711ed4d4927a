//! Behavioral tests for the featured grid pipeline

#![allow(clippy::unwrap_used)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SiteConfig;
use crate::error::Error;
use crate::featured::select_featured;
use crate::project::parse_projects;
use crate::render::render_featured;

const ISLAND: &str = r#"[
    {"title": "DemoDiffusion", "venue": "ICRA, 2026", "img": "img/demodiffusion.mp4", "project_page": "https://demo.example"},
    {"title": "LightSwitch", "venue": "ICCV, 2025", "img": "img/lightswitch.png", "pdf": "papers/lightswitch.pdf"},
    {"title": "Turbo3D", "venue": "CVPR, 2025", "img": "img/turbo3d.jpg"},
    {"title": "Track2Act", "venue": "ECCV, 2024", "img": "img/track2act.m4v"},
    {"title": "G-HOP", "venue": "CVPR, 2024", "img": "img/ghop.png"},
    {"title": "SparseFusion", "venue": "CVPR, 2023", "img": "img/sparsefusion.png"},
    {"title": "AutoSDF", "venue": "CVPR, 2022", "img": "img/autosdf.png"},
    {"title": "NeRS", "venue": "NeurIPS, 2021", "img": "img/ners.png"}
]"#;

// ============================================================================
// SELECTION BEHAVIORS
// ============================================================================

#[test]
fn given_eight_projects_when_rendering_featured_then_six_cards_are_emitted() {
    // Given
    let config = SiteConfig::default();
    let projects = parse_projects(ISLAND).unwrap();

    // When
    let selected = select_featured(projects, config.featured_count, &mut StdRng::seed_from_u64(5));
    let html = render_featured(&selected, &config);

    // Then
    assert_eq!(html.matches("<a class=\"card--featured\"").count(), 6);
}

#[test]
fn given_configured_count_when_selecting_then_count_is_honored() {
    // Given
    let config = SiteConfig::from_json(r#"{"featured_count": 3}"#).unwrap();
    let projects = parse_projects(ISLAND).unwrap();

    // When
    let selected = select_featured(projects, config.featured_count, &mut StdRng::seed_from_u64(5));

    // Then
    assert_eq!(selected.len(), 3);
}

#[test]
fn given_selection_when_rendered_then_cards_appear_newest_first() {
    // Given
    let config = SiteConfig::default();
    let projects = parse_projects(ISLAND).unwrap();
    let selected = select_featured(projects, 6, &mut StdRng::seed_from_u64(21));

    // When
    let html = render_featured(&selected, &config);

    // Then
    let positions: Vec<usize> = selected
        .iter()
        .map(|p| html.find(p.title()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(selected.windows(2).all(|w| w[0].year() >= w[1].year()));
}

// ============================================================================
// MEDIA BEHAVIORS
// ============================================================================

#[test]
fn given_video_paths_when_rendered_then_video_elements_are_used() {
    // Given
    let config = SiteConfig::default();
    let projects = parse_projects(ISLAND).unwrap();

    // When
    let html = render_featured(&projects, &config);

    // Then
    assert_eq!(html.matches("<video ").count(), 2);
    assert_eq!(html.matches("<img ").count(), 6);
    assert!(html.contains("<source src=\"img/track2act.m4v\" type=\"video/mp4\">"));
}

#[test]
fn given_project_page_and_pdf_when_rendered_then_project_page_wins() {
    // Given
    let config = SiteConfig::default();
    let projects = parse_projects(ISLAND).unwrap();

    // When
    let html = render_featured(&projects, &config);

    // Then
    assert!(html.contains("href=\"https://demo.example\""));
    assert!(html.contains("href=\"papers/lightswitch.pdf\""));
    assert!(html.contains("href=\"#\""));
}

// ============================================================================
// FAILURE BEHAVIORS
// ============================================================================

#[test]
fn given_malformed_island_when_parsing_then_nothing_is_rendered() {
    // Given
    let island = r#"[{"title": "A", "venue": "CVPR 2024"},"#;

    // When
    let result = parse_projects(island);

    // Then
    assert!(matches!(result, Err(Error::JsonParseFailed { .. })));
}

#[test]
fn given_one_record_without_year_when_parsing_then_whole_island_is_rejected() {
    // Given
    let island = r#"[
        {"title": "A", "venue": "CVPR 2024"},
        {"title": "B", "venue": "Under review"}
    ]"#;

    // When
    let result = parse_projects(island);

    // Then
    assert_eq!(result, Err(Error::missing_year(1, "B", "Under review")));
}
