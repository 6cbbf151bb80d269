use leptos::prelude::*;

use crate::stats::TitleCount;

/// Per-title job counts for one expanded year.
#[component]
pub fn TitleBreakdown(
    /// Counts in display order.
    counts: Vec<TitleCount>,
) -> impl IntoView {
    let is_empty = counts.is_empty();

    view! {
        <table class="title-breakdown">
            <thead>
                <tr>
                    <th>"Job Title"</th>
                    <th>"Number of Jobs"</th>
                </tr>
            </thead>
            <tbody>
                {counts.into_iter().map(|c| view! {
                    <tr>
                        <td>{c.title}</td>
                        <td class="numeric">{c.count}</td>
                    </tr>
                }).collect::<Vec<_>>()}
                {is_empty.then(|| view! {
                    <tr>
                        <td class="breakdown-empty" colspan="2">"No jobs recorded for this year."</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
