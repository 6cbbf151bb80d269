//! Aggregation of yearly job postings into table rows.
//!
//! - **Dataset**: JSON records validated at load time, embedded default
//! - **Summaries**: total jobs and average salary per year, input order
//! - **Title counts**: per-title breakdown of a single year
//!
//! # Example
//!
//! ```ignore
//! use jobstats::stats::{Dataset, title_counts};
//!
//! let dataset = Dataset::from_json(r#"[{"year": 2020, "jobs": []}]"#)?;
//! for summary in dataset.summaries() {
//!     println!("{} {} {}", summary.year, summary.total_jobs, summary.average_salary);
//! }
//! ```

mod aggregate;
mod dataset;
mod types;

pub use aggregate::{summarize, summarize_year, title_counts};
pub use dataset::{parse_dataset, Dataset};
pub use types::*;
