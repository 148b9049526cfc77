//! Root application module.
//!
//! Contains the main App component, the PageContext definition and
//! application-level setup logic following Leptos conventions.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::ReportPage;
use crate::config::REPORT_TOML;
use crate::core::projection::{self, PageView};
use crate::core::{Report, SortController, TableError, VisibilityController};
use crate::models::{TableId, TablePage};

// ============================================================================
// PageContext
// ============================================================================

/// Page-wide reactive context.
///
/// Holds the single source of truth for every table's view state and a
/// memoized projection the components render from. Every user action runs
/// one controller call to completion inside a signal update.
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Tables, row order, icon and visibility state.
    pub page: RwSignal<TablePage>,
    /// Projection of `page`, recomputed after each mutation.
    pub view: Memo<PageView>,
}

impl PageContext {
    pub fn new(page: TablePage) -> Self {
        let page = RwSignal::new(page);
        let view = Memo::new(move |_| page.with(projection::project));
        Self { page, view }
    }

    /// Handler for the "Show All" / "Hide All" control.
    pub fn toggle_all(&self) {
        self.page
            .update(|p| report_failure("toggle all", p.toggle_all()));
    }

    /// Handler for a table's toggle affordance.
    pub fn toggle(&self, id: &TableId) {
        self.page.update(|p| report_failure("toggle", p.toggle(id)));
    }

    /// Handler for a click on a sortable header.
    pub fn sort_column(&self, id: &TableId, column: usize) {
        self.page
            .update(|p| report_failure("sort", p.sort_column(id, column).map(|_| ())));
    }

    /// Handler for a table's reset button.
    pub fn reset_table(&self, id: &TableId) {
        self.page
            .update(|p| report_failure("reset", p.reset_table(id)));
    }
}

fn report_failure(action: &str, result: Result<(), TableError>) {
    if let Err(e) = result {
        warn!("{} failed: {}", action, e);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the embedded report description
/// - Wraps the page in an ErrorBoundary so a broken description is reported
/// - Renders the ReportPage, which provides the PageContext
#[component]
pub fn App() -> impl IntoView {
    let report = Report::from_toml(REPORT_TOML);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    max-width: 600px;
                    margin: 4rem auto;
                    padding: 2rem;
                    text-align: center;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Report could not be loaded"
                    </h1>
                    <ul style="text-align: left; color: #c0392b;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            {report.map(|report| view! { <ReportPage report=report /> })}
        </ErrorBoundary>
    }
}
