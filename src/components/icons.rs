//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{SortIcon, ToggleGlyph};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDownWideNarrow as SortDescending, LuArrowUpNarrowWide as SortAscending,
        LuCircleMinus as HideTable, LuCirclePlus as ShowTable, LuFunnel as Filter,
        LuRotateCw as Reset,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Reset, BsDashCircle as HideTable, BsFilter as Filter,
        BsPlusCircle as ShowTable, BsSortDown as SortDescending, BsSortUp as SortAscending,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILTER, Filter);
themed_icon!(SORT_ASCENDING, SortAscending);
themed_icon!(SORT_DESCENDING, SortDescending);
themed_icon!(SHOW_TABLE, ShowTable);
themed_icon!(HIDE_TABLE, HideTable);
themed_icon!(RESET, Reset);

/// Icon drawn for one state of a header's sort cycle.
pub fn sort_icon(icon: SortIcon) -> Icon {
    match icon {
        SortIcon::Neutral => FILTER,
        SortIcon::Ascending => SORT_ASCENDING,
        SortIcon::Descending => SORT_DESCENDING,
    }
}

/// Icon drawn by a table's toggle affordance.
pub fn toggle_icon(glyph: ToggleGlyph) -> Icon {
    match glyph {
        ToggleGlyph::Hide => HIDE_TABLE,
        ToggleGlyph::Show => SHOW_TABLE,
    }
}
