//! Type definitions for the job statistics aggregator.
//!
//! Source records deserialize from the dataset JSON; summaries and title
//! counts are derived from them and never mutated afterwards.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// SOURCE TYPES (loaded from the dataset)
// =============================================================================

/// A single job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    /// Annual salary in USD
    pub salary: f64,
}

/// All job postings for one year, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: i32,
    pub jobs: Vec<JobRecord>,
}

// =============================================================================
// DERIVED TYPES (shown in the table and chart)
// =============================================================================

/// Mean salary of a year, or `NotAvailable` when the year has no jobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageSalary {
    Amount(f64),
    NotAvailable,
}

impl AverageSalary {
    /// Fixed two-decimal rendering, or `placeholder` for years without jobs.
    pub fn display_or(&self, placeholder: &str) -> String {
        match self {
            AverageSalary::Amount(value) => to_fixed_2(*value),
            AverageSalary::NotAvailable => placeholder.to_string(),
        }
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            AverageSalary::Amount(value) => Some(*value),
            AverageSalary::NotAvailable => None,
        }
    }

    /// Total order used for sorting: `NotAvailable` sorts below every amount.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.amount(), other.amount()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for AverageSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_or(NOT_AVAILABLE))
    }
}

/// Two-decimal rendering that resolves exact ties upwards.
///
/// `{:.2}` already rounds the exact binary value to the nearest cent; only a
/// value lying exactly halfway (an odd multiple of 1/8 in its fraction) is
/// rounded to even there, so that case picks the larger cent explicitly.
fn to_fixed_2(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0;
    if is_tie {
        // value * 100 is an exact half here
        format!("{:.2}", (value * 100.0).ceil() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

/// Default text shown for a year without jobs.
pub const NOT_AVAILABLE: &str = "N/A";

/// Per-year aggregate shown as one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub year: i32,
    pub total_jobs: usize,
    pub average_salary: AverageSalary,
}

/// Number of postings sharing one job title within a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCount {
    pub title: String,
    pub count: usize,
}
