//! Execution configuration: how results are presented and what "Open Project" opens.

use clap::ValueEnum;

/// What the "Open Project" action opens.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum OpenTarget {
    /// The directory that was searched
    #[default]
    Root,

    /// The project file itself
    File,
}

/// Configuration for presentation and the open action.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecutionOptions {
    /// Present results in the interactive picker
    pub interactive: bool,

    /// Target of the "Open Project" action
    pub open_target: OpenTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_opens_root() {
        let opts = ExecutionOptions::default();
        assert!(!opts.interactive);
        assert_eq!(opts.open_target, OpenTarget::Root);
    }

    #[test]
    fn test_open_target_from_str() {
        assert_eq!(OpenTarget::from_str("file", true).unwrap(), OpenTarget::File);
        assert_eq!(OpenTarget::from_str("Root", true).unwrap(), OpenTarget::Root);
        assert!(OpenTarget::from_str("parent", true).is_err());
    }
}
