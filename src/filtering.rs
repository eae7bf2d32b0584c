//! Project filtering and ordering.
//!
//! A scan already returns projects newest-first. These helpers narrow the
//! list by age and apply the alternate orders the CLI offers.

use chrono::{DateTime, Duration, Utc};

use crate::config::{FilterOptions, SortCriteria, SortOptions};
use crate::finder::sort_newest_first;
use crate::project::Project;

/// Keep only the projects that satisfy `filter_opts`.
///
/// With `within_days > 0`, projects last modified before `now - within_days`
/// are dropped. Order is preserved.
///
/// # Examples
///
/// ```no_run
/// # use chrono::Utc;
/// # use recent_logic_projects::{config::FilterOptions, filtering::filter_projects, project::Project};
/// # fn example(projects: Vec<Project>) {
/// let recent = filter_projects(projects, &FilterOptions { within_days: 7 }, Utc::now());
/// # }
/// ```
#[must_use]
pub fn filter_projects(
    projects: Vec<Project>,
    filter_opts: &FilterOptions,
    now: DateTime<Utc>,
) -> Vec<Project> {
    if filter_opts.within_days == 0 {
        return projects;
    }

    let cutoff = now - Duration::days(i64::from(filter_opts.within_days));

    projects
        .into_iter()
        .filter(|project| project.last_modified >= cutoff)
        .collect()
}

/// Sort projects in place according to the given sorting options.
///
/// - `Recent`: most recently modified first (ties keep their order)
/// - `Name`: alphabetical, case-insensitive
///
/// Setting `sort_opts.reverse` to `true` flips the resulting order.
pub fn sort_projects(projects: &mut [Project], sort_opts: &SortOptions) {
    match sort_opts.criteria {
        SortCriteria::Recent => sort_newest_first(projects),
        SortCriteria::Name => {
            projects.sort_by_cached_key(|p| p.name.to_lowercase());
        }
    }

    if sort_opts.reverse {
        projects.reverse();
    }
}
