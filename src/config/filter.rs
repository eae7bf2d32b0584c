//! Filtering and ordering configuration for scan results.
//!
//! A scan always returns projects newest-first. These options let the caller
//! narrow the list to recent work or show it in a different order.

use clap::ValueEnum;

/// Configuration for project filtering criteria.
#[derive(Clone, Debug, Default)]
pub struct FilterOptions {
    /// Only keep projects modified within this many days (0 = keep all)
    pub within_days: u32,
}

/// Enumeration of supported sorting criteria for project output.
///
/// - `Recent`: most recently modified first
/// - `Name`: alphabetical, case-insensitive
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum SortCriteria {
    /// Sort by modification time, newest first
    #[default]
    Recent,

    /// Sort by project name alphabetically (A-Z)
    Name,
}

/// Configuration for project sorting behavior.
#[derive(Clone, Debug, Default)]
pub struct SortOptions {
    /// The sorting criterion to apply
    pub criteria: SortCriteria,

    /// Whether to reverse the sort order
    pub reverse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_criteria_default_is_recent() {
        assert_eq!(SortCriteria::default(), SortCriteria::Recent);
        assert_ne!(SortCriteria::Recent, SortCriteria::Name);
    }

    #[test]
    fn test_sort_criteria_from_str_case_insensitive() {
        assert_eq!(
            SortCriteria::from_str("NAME", true).unwrap(),
            SortCriteria::Name
        );
        assert!(SortCriteria::from_str("size", true).is_err());
    }

    #[test]
    fn test_filter_options_default_keeps_everything() {
        assert_eq!(FilterOptions::default().within_days, 0);
    }

    #[test]
    fn test_sort_options_clone() {
        let original = SortOptions {
            criteria: SortCriteria::Name,
            reverse: true,
        };
        let cloned = original.clone();

        assert_eq!(original.criteria, cloned.criteria);
        assert_eq!(original.reverse, cloned.reverse);
    }
}
