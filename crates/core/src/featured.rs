//! Featured project selection for the overview page.

use std::cmp::Reverse;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::project::Project;

/// Pick up to `count` projects uniformly at random, most recent first.
///
/// The full list is shuffled (Fisher-Yates, via [`SliceRandom::shuffle`])
/// before truncation so every subset is equally likely. The final sort is
/// stable, so projects sharing a year keep their shuffled order.
pub fn select_featured<R>(mut projects: Vec<Project>, count: usize, rng: &mut R) -> Vec<Project>
where
    R: Rng + ?Sized,
{
    projects.shuffle(rng);
    projects.truncate(count);
    projects.sort_by_key(|project| Reverse(project.year()));

    tracing::debug!(
        selected = projects.len(),
        newest = ?projects.first().map(Project::year),
        "featured projects selected"
    );
    projects
}
