//! Featured grid markup.
//!
//! Title and venue text come from author-controlled page data and are
//! inserted verbatim. Only the `alt` attribute escapes double quotes.

use std::fmt::Write;

use crate::config::SiteConfig;
use crate::project::{MediaKind, Project};

/// Replace every `"` with `&quot;`; nothing else is escaped.
#[must_use]
pub fn escape_attr_quotes(text: &str) -> String {
    text.replace('"', "&quot;")
}

/// Media element for one featured card.
#[must_use]
pub fn render_media(project: &Project, config: &SiteConfig) -> String {
    let record = project.record();
    match record.media_kind(config) {
        MediaKind::Video => format!(
            "<video class=\"card--featured__media\" muted autoplay loop playsinline>\
             <source src=\"{}\" type=\"video/mp4\"></video>",
            record.media_path()
        ),
        MediaKind::Image => format!(
            "<img class=\"card--featured__media\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            record.media_path(),
            escape_attr_quotes(&record.title)
        ),
    }
}

/// Anchor-wrapped card: media followed by a title/venue body.
#[must_use]
pub fn render_card(project: &Project, config: &SiteConfig) -> String {
    let mut html = String::with_capacity(512);
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<a class=\"card--featured\" href=\"{}\" target=\"_blank\" rel=\"noopener\">",
        project.record().link()
    );
    html.push_str(&render_media(project, config));
    html.push_str("<div class=\"card--featured__body\">");
    let _ = write!(
        html,
        "<div class=\"card--featured__title\">{}</div>",
        project.title()
    );
    let _ = write!(
        html,
        "<div class=\"card--featured__venue\">{}</div>",
        project.venue()
    );
    html.push_str("</div></a>");
    html
}

/// Markup for the whole grid, meant for a single `innerHTML` write.
#[must_use]
pub fn render_featured(projects: &[Project], config: &SiteConfig) -> String {
    projects
        .iter()
        .map(|project| render_card(project, config))
        .collect()
}
