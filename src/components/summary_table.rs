//! Sortable yearly summary table.
//!
//! Clicking a header sorts by that column (again to flip direction).
//! Clicking a row shows its per-title breakdown beneath it.

use leptos::prelude::*;
use tracing::debug;

use crate::components::title_breakdown::TitleBreakdown;
use crate::config::TableConfig;
use crate::stats::Dataset;
use crate::table::{build_table, Expansion, SortState, SummaryColumn, SummaryColumns};

#[component]
pub fn SummaryTable(
    /// Loaded dataset; summaries are already derived.
    dataset: &'static Dataset,
    /// Placeholder text and expansion policy.
    config: TableConfig,
) -> impl IntoView {
    let (sort, set_sort) = signal(SortState::<SummaryColumn>::unsorted());
    let (expansion, set_expansion) = signal(Expansion::Collapsed);
    let policy = config.expand_policy;
    let columns = SummaryColumns::new(config.salary_placeholder);

    let table = Memo::new(move |_| build_table(dataset, &columns, &sort.get(), expansion.get()));

    let on_sort = move |column: SummaryColumn| {
        set_sort.update(|s| *s = s.toggle(column));
        debug!("Sort changed: {:?}", sort.get_untracked().active());
    };

    let on_row_click = move |year: i32| {
        set_expansion.update(|e| *e = e.click(year, policy));
        debug!("Expansion changed: {:?}", expansion.get_untracked());
    };

    view! {
        <div class="summary-table-wrap">
            <style>{include_str!("summary_table.css")}</style>
            <table class="summary-table">
                <thead>
                    <tr>
                        {move || table.get().headers.into_iter().map(|h| {
                            let column = h.column;
                            let class = if h.direction.is_some() { "sortable sorted" } else { "sortable" };
                            view! {
                                <th class=class on:click=move |_| on_sort(column)>
                                    {h.label}
                                    <span class="sort-indicator">{h.indicator}</span>
                                </th>
                            }
                        }).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || table.get().rows.into_iter().map(|row| {
                        let year = row.year;
                        let row_class = if row.breakdown.is_some() {
                            "summary-row expanded"
                        } else {
                            "summary-row"
                        };
                        view! {
                            <tr class=row_class on:click=move |_| on_row_click(year)>
                                {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                            </tr>
                            {row.breakdown.map(|b| view! {
                                <tr class="breakdown-row">
                                    <td colspan=b.colspan.to_string()>
                                        <TitleBreakdown counts=b.counts />
                                    </td>
                                </tr>
                            })}
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
