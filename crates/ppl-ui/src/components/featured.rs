//! Featured projects grid on the overview page

use ppl_core::{SiteConfig, parse_projects, render_featured, select_featured};
use rand::Rng;
use web_sys::{Document, Element};

use crate::contract::ids;
use crate::dom;
use crate::error::Result;

/// Fill `#featured-grid` from `#featured-data`, if both exist
///
/// Returns the number of cards rendered (0 when the page has no grid).
///
/// # Errors
///
/// Returns `UiError::Core` if the data island is malformed; the grid is
/// left untouched in that case.
pub fn mount(document: &Document, config: &SiteConfig) -> Result<usize> {
    let (Some(data), Some(grid)) = (
        document.get_element_by_id(ids::FEATURED_DATA),
        document.get_element_by_id(ids::FEATURED_GRID),
    ) else {
        return Ok(0);
    };

    render_into(&data, &grid, config, &mut rand::thread_rng())
}

/// Parse `data`, pick the featured subset and replace `grid`'s content in
/// one write
///
/// # Errors
///
/// Returns `UiError::Core` if the island fails validation
pub fn render_into<R>(data: &Element, grid: &Element, config: &SiteConfig, rng: &mut R) -> Result<usize>
where
    R: Rng + ?Sized,
{
    let projects = parse_projects(&dom::text_of(data))?;
    let selected = select_featured(projects, config.featured_count, rng);

    grid.set_inner_html(&render_featured(&selected, config));
    Ok(selected.len())
}
