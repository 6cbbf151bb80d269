use std::collections::HashMap;

use tracing::debug;

use super::types::{AverageSalary, TitleCount, YearRecord, YearSummary};

/// Summarize every year, preserving input order.
pub fn summarize(years: &[YearRecord]) -> Vec<YearSummary> {
    let summaries: Vec<YearSummary> = years.iter().map(summarize_year).collect();
    debug!("Summarized {} years", summaries.len());
    summaries
}

pub fn summarize_year(record: &YearRecord) -> YearSummary {
    let total_jobs = record.jobs.len();
    let average_salary = if total_jobs == 0 {
        AverageSalary::NotAvailable
    } else {
        let sum: f64 = record.jobs.iter().map(|job| job.salary).sum();
        AverageSalary::Amount(sum / total_jobs as f64)
    };

    YearSummary {
        year: record.year,
        total_jobs,
        average_salary,
    }
}

/// Count postings per job title in a single pass.
///
/// Titles appear in the order they are first seen in the source data.
pub fn title_counts(record: &YearRecord) -> Vec<TitleCount> {
    let mut counts: Vec<TitleCount> = Vec::new();
    // title -> position in `counts`
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for job in &record.jobs {
        match positions.get(job.title.as_str()) {
            Some(&index) => counts[index].count += 1,
            None => {
                positions.insert(job.title.as_str(), counts.len());
                counts.push(TitleCount {
                    title: job.title.clone(),
                    count: 1,
                });
            }
        }
    }
    counts
}
