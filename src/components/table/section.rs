//! A single table with its heading, toggle affordance and reset button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::PageContext;
use crate::components::icons as ic;
use crate::components::table::SortHeader;
use crate::config::style;
use crate::core::projection::{self, TableView};
use crate::models::{TableId, ToggleGlyph};

stylance::import_crate_style!(css, "src/components/table/table.module.css");

#[component]
pub fn TableSection(id: String) -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext must be provided");

    let lookup_id = id.clone();
    let table: Memo<Option<TableView>> = Memo::new(move |_| {
        ctx.view
            .with(|v| v.tables.iter().find(|t| t.id == lookup_id).cloned())
    });

    let table_id = TableId::new(id.clone());
    let toggle_id = projection::toggle_id(&id);
    let initial = table.get_untracked();
    let title = initial.as_ref().and_then(|t| t.title.clone());
    let headers = initial.map(|t| t.headers).unwrap_or_default();

    let display = move || {
        table.with(|t| t.as_ref().map_or(style::DISPLAY_NONE, |t| t.display))
    };
    let glyph = move || table.with(|t| t.as_ref().map_or(ToggleGlyph::Show, |t| t.glyph));

    let on_toggle = {
        let table_id = table_id.clone();
        move |_: leptos::ev::MouseEvent| ctx.toggle(&table_id)
    };
    let on_reset = {
        let table_id = table_id.clone();
        move |_: leptos::ev::MouseEvent| ctx.reset_table(&table_id)
    };

    view! {
        <section class=css::section>
            <h2 class=css::title>
                {title}
                <span id=toggle_id class=css::toggle on:click=on_toggle>
                    {move || {
                        let glyph = glyph();
                        view! {
                            <i class=projection::glyph_class(glyph) aria-hidden="true">
                                <Icon icon=ic::toggle_icon(glyph) />
                            </i>
                        }
                    }}
                </span>
                <a class=css::reset on:click=on_reset title="Reset sort icons">
                    <Icon icon=ic::RESET />
                </a>
            </h2>
            <table id=id class=css::table style:display=display>
                <thead>
                    <tr>
                        {headers
                            .into_iter()
                            .map(|header| view! {
                                <SortHeader table_id=table_id.clone() header=header table=table />
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || table.with(|t| t.as_ref().map(|t| t.rows.clone()).unwrap_or_default())
                        key=|(row_id, _)| *row_id
                        children=|(_, cells)| view! {
                            <tr>
                                {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                            </tr>
                        }
                    />
                </tbody>
            </table>
            <hr />
        </section>
    }
}
