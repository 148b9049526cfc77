//! Sortable header cell.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::PageContext;
use crate::components::icons as ic;
use crate::config::style;
use crate::core::projection::{self, HeaderView, IconDisplay, TableView};
use crate::models::{SortIcon, TableId};

stylance::import_crate_style!(css, "src/components/table/table.module.css");

/// A header cell; clicking it advances the column's sort cycle.
///
/// Headers rendered without icons ignore clicks.
#[component]
pub fn SortHeader(
    table_id: TableId,
    header: HeaderView,
    table: Memo<Option<TableView>>,
) -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext must be provided");

    let HeaderView {
        index,
        label,
        tooltip,
        icons,
    } = header;
    let sortable = icons.is_some();

    let current: Memo<Option<IconDisplay>> = Memo::new(move |_| {
        table.with(|t| {
            t.as_ref()
                .and_then(|t| t.headers.get(index))
                .and_then(|h| h.icons.clone())
        })
    });

    let on_click = move |_: leptos::ev::MouseEvent| {
        if sortable {
            ctx.sort_column(&table_id, index);
        }
    };

    let icon = move |which: SortIcon| {
        let display = move || {
            current.with(|c| {
                c.as_ref().map_or(style::DISPLAY_NONE, |c| match which {
                    SortIcon::Neutral => c.filter,
                    SortIcon::Ascending => c.ascending,
                    SortIcon::Descending => c.descending,
                })
            })
        };
        view! {
            <span class=projection::icon_class(which) style:display=display>
                <Icon icon=ic::sort_icon(which) />
            </span>
        }
    };

    view! {
        <th class=css::header class:sortable=sortable title=tooltip on:click=on_click>
            {label}
            {sortable.then(|| {
                view! {
                    <span class=css::icons>
                        {icon(SortIcon::Neutral)}
                        {icon(SortIcon::Ascending)}
                        {icon(SortIcon::Descending)}
                    </span>
                }
            })}
        </th>
    }
}
