//! Options for seeding a finder
//!
//! This module provides options for configuring the recursive scan
//! that populates a [`Finder`](super::Finder).

use crate::cli::Cli;

/// Options for configuring the recursive scan
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Maximum depth to scan (relative to the root, which is depth 0)
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links while scanning
    pub follow_links: bool,

    /// Whether to skip subdirectories that cannot be read
    pub ignore_permission_errors: bool,

    /// Whether to skip any other I/O error raised during the scan
    pub ignore_io_errors: bool,

    /// Whether siblings are visited in file name order
    pub sort_entries: bool,
}

impl FindOptions {
    /// Create a new FindOptions with default values
    pub fn new() -> Self {
        Self {
            max_depth: None,
            follow_links: false,
            ignore_permission_errors: true,
            ignore_io_errors: false,
            sort_entries: true,
        }
    }

    /// Set the maximum depth to scan
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Set whether to ignore permission errors
    pub fn with_ignore_permission_errors(mut self, ignore: bool) -> Self {
        self.ignore_permission_errors = ignore;
        self
    }

    /// Set whether to ignore I/O errors
    pub fn with_ignore_io_errors(mut self, ignore: bool) -> Self {
        self.ignore_io_errors = ignore;
        self
    }

    /// Set whether siblings are sorted by file name
    pub fn with_sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Create FindOptions from CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_max_depth(cli.max_depth)
            .with_follow_links(cli.follow_links)
            .with_ignore_io_errors(cli.ignore_io_errors)
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new()
    }
}
