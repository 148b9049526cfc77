//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The report description is loaded at compile time using `include_str!`.

// =============================================================================
// Report Assets (loaded at compile time)
// =============================================================================

/// TOML description of the tables rendered on the page.
pub const REPORT_TOML: &str = include_str!("../assets/report.toml");

// =============================================================================
// Page Metadata
// =============================================================================

/// Document title used when the report does not set one.
pub const DEFAULT_TITLE: &str = "Performance Metrics";

/// Header tooltip on sortable columns.
pub const SORT_TOOLTIP: &str = "Click to Sort";

/// Single column given to a table that has neither data nor columns.
pub const EMPTY_TABLE_COLUMN: &str = "Empty Table";

// =============================================================================
// Host Page Contract
// =============================================================================

/// Element ids shared with the page markup.
pub mod dom_ids {
    /// Root element the app mounts into.
    pub const APP_ROOT: &str = "app";
    /// The aggregate "Show All" / "Hide All" control.
    pub const TOGGLE_ALL: &str = "toggle_tables";
    /// Appended to a table id to form its toggle affordance id.
    pub const TOGGLE_SUFFIX: &str = "_toggle";
}

/// Aggregate control labels.
pub mod labels {
    pub const SHOW_ALL: &str = "Show All";
    pub const HIDE_ALL: &str = "Hide All";
}

/// Glyph classes of the per-table toggle affordance.
pub mod glyphs {
    /// Shown on a visible table (click to hide).
    pub const HIDE_TABLE: &str = "fa fa-minus-circle";
    /// Shown on a hidden table (click to show).
    pub const SHOW_TABLE: &str = "fa fa-plus-circle";
}

/// Class names of the three header icons.
pub mod icon_classes {
    pub const FILTER: &str = "bi bi-filter";
    pub const UP_ARROW: &str = "bi bi-sort-up";
    pub const DOWN_ARROW: &str = "bi bi-sort-down";
}

/// `display` style values.
pub mod style {
    pub const DISPLAY_NONE: &str = "none";
    pub const DISPLAY_INITIAL: &str = "initial";
    /// Default document flow.
    pub const DISPLAY_SHOWN: &str = "";
}

// =============================================================================
// Summary Tables
// =============================================================================

/// Header of a derived summary table.
pub const SUMMARY_HEADER: [&str; 5] = ["Metric", "Minimum", "Median", "Max", "Overall Total"];

/// Placeholder for a statistic over a column without numeric values.
pub const MISSING_VALUE: &str = "-";

/// Maximum decimals printed for non-integral numbers.
pub const MAX_DECIMALS: usize = 6;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - matches the `bi` class names of the header icons (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
