pub mod jobs_chart;
pub mod summary_table;
pub mod title_breakdown;
