use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::pages::job_stats::JobStatsPage;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <div class="app-layout">
            <main class="content">
                <JobStatsPage />
            </main>
        </div>
    }
}
