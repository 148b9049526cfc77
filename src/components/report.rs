//! Report page component.
//!
//! Renders the page heading, the aggregate "Show All" / "Hide All" control
//! and one section per table.

use leptos::prelude::*;

use crate::app::PageContext;
use crate::components::table::TableSection;
use crate::config::dom_ids;
use crate::core::Report;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/report.module.css");

#[component]
pub fn ReportPage(report: Report) -> impl IntoView {
    let Report {
        title,
        footer,
        page,
    } = report;

    dom::set_title(&title);

    let ctx = PageContext::new(page);
    provide_context(ctx);

    // Tables are never added or removed, only their state changes.
    let table_ids = ctx
        .view
        .with_untracked(|v| v.tables.iter().map(|t| t.id.clone()).collect::<Vec<_>>());

    view! {
        <main class=css::page>
            <h1 class=css::heading>{title}</h1>
            <ToggleAll />
            {table_ids
                .into_iter()
                .map(|id| view! { <TableSection id=id /> })
                .collect_view()}
            {footer.map(|text| view! { <p class=css::footer><i>{text}</i></p> })}
        </main>
    }
}

/// The aggregate control; its label follows the page state.
#[component]
fn ToggleAll() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext must be provided");

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ctx.toggle_all();
    };

    view! {
        <p id=dom_ids::TOGGLE_ALL class=css::toggleAll>
            <a href="#" on:click=on_click>
                {move || ctx.view.with(|v| v.label)}
            </a>
        </p>
    }
}
