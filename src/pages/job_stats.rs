use leptos::prelude::*;
use tracing::error;

use crate::chart::jobs_per_year;
use crate::components::jobs_chart::JobsChart;
use crate::components::summary_table::SummaryTable;
use crate::config::DashboardConfig;
use crate::stats::Dataset;

#[component]
pub fn JobStatsPage() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();

    let dataset = match Dataset::embedded() {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Job data unavailable: {}", e);
            return view! {
                <div class="page job-stats-page">
                    <h2>"Job Statistics"</h2>
                    <div class="dataset-error">
                        <span class="status-text status-error">
                            {format!("Could not load job data: {}", e)}
                        </span>
                    </div>
                </div>
            }
            .into_any();
        }
    };

    let series = jobs_per_year(dataset.summaries());

    view! {
        <div class="page job-stats-page">
            <h2>"Job Statistics"</h2>
            <p class="page-description">
                "Total postings and average salary per year. "
                "Click a column header to sort, or a row to see its job titles."
            </p>

            <SummaryTable dataset=dataset config=config.table.clone() />

            <h3>"Jobs per Year"</h3>
            <JobsChart series=series config=config.chart.clone() />
        </div>
    }
    .into_any()
}
