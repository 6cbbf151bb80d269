//! Dataset loading and validation.
//!
//! The JSON is first read into permissive raw records so that a missing or
//! mistyped field can be reported with the position of the record that
//! holds it, instead of surfacing later as a NaN in the table.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::aggregate::summarize;
use super::types::{JobRecord, YearRecord, YearSummary};
use crate::error::DatasetError;

/// Dataset compiled into the binary.
const EMBEDDED_DATASET: &str = include_str!("../../data/jobs.json");

static EMBEDDED: OnceLock<Result<Dataset, DatasetError>> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct RawYearRecord {
    year: Option<Value>,
    jobs: Option<Vec<RawJobRecord>>,
}

#[derive(Debug, Deserialize)]
struct RawJobRecord {
    title: Option<Value>,
    salary: Option<Value>,
}

/// Parse and validate a dataset document.
///
/// Fails on the first offending record.
pub fn parse_dataset(json: &str) -> Result<Vec<YearRecord>, DatasetError> {
    let raw: Vec<RawYearRecord> = serde_json::from_str(json)?;
    let mut records: Vec<YearRecord> = Vec::with_capacity(raw.len());
    let mut seen: HashMap<i32, usize> = HashMap::with_capacity(raw.len());

    for (index, entry) in raw.into_iter().enumerate() {
        let record = validate_record(index, entry)?;
        if let Some(&first) = seen.get(&record.year) {
            return Err(DatasetError::DuplicateYear {
                record: index,
                year: record.year,
                first,
            });
        }
        seen.insert(record.year, index);
        records.push(record);
    }

    debug!("Parsed {} year records", records.len());
    Ok(records)
}

fn validate_record(index: usize, raw: RawYearRecord) -> Result<YearRecord, DatasetError> {
    let raw_year = raw.year.ok_or(DatasetError::MissingYear { record: index })?;
    let year = raw_year
        .as_i64()
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| DatasetError::InvalidYear {
            record: index,
            value: raw_year.to_string(),
        })?;
    let raw_jobs = raw
        .jobs
        .ok_or(DatasetError::MissingJobs { record: index, year })?;

    let mut jobs = Vec::with_capacity(raw_jobs.len());
    for (job_index, job) in raw_jobs.into_iter().enumerate() {
        let missing = |field| DatasetError::MissingJobField {
            record: index,
            year,
            job: job_index,
            field,
        };
        let invalid = |field, value: &Value| DatasetError::InvalidJobField {
            record: index,
            year,
            job: job_index,
            field,
            value: value.to_string(),
        };

        let title = match job.title.ok_or_else(|| missing("title"))? {
            Value::String(title) => title,
            other => return Err(invalid("title", &other)),
        };
        let raw_salary = job.salary.ok_or_else(|| missing("salary"))?;
        let salary = match raw_salary.as_f64() {
            Some(salary) if salary.is_finite() && salary >= 0.0 => salary,
            _ => return Err(invalid("salary", &raw_salary)),
        };
        jobs.push(JobRecord { title, salary });
    }

    Ok(YearRecord { year, jobs })
}

/// Validated year records together with their summaries.
///
/// Summaries are derived once at construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<YearRecord>,
    summaries: Vec<YearSummary>,
}

impl Dataset {
    pub fn new(records: Vec<YearRecord>) -> Self {
        let summaries = summarize(&records);
        Self { records, summaries }
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        parse_dataset(json).map(Self::new)
    }

    /// The dataset compiled into the binary, parsed on first access.
    pub fn embedded() -> Result<&'static Dataset, &'static DatasetError> {
        EMBEDDED
            .get_or_init(|| {
                let loaded = Dataset::from_json(EMBEDDED_DATASET);
                match &loaded {
                    Ok(dataset) => info!("Loaded embedded dataset with {} years", dataset.len()),
                    Err(e) => warn!("Failed to load embedded dataset: {}", e),
                }
                loaded
            })
            .as_ref()
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn summaries(&self) -> &[YearSummary] {
        &self.summaries
    }

    pub fn year(&self, year: i32) -> Option<&YearRecord> {
        self.records.iter().find(|r| r.year == year)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_loads() {
        let dataset = Dataset::embedded().expect("embedded jobs.json must be valid");
        assert!(!dataset.is_empty());
        assert_eq!(dataset.records().len(), dataset.summaries().len());
    }

    #[test]
    fn test_embedded_dataset_is_shared() {
        let a = Dataset::embedded().expect("valid") as *const Dataset;
        let b = Dataset::embedded().expect("valid") as *const Dataset;
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_jobs_names_record() {
        let err = parse_dataset(r#"[{"year": 2020, "jobs": []}, {"year": 2021}]"#).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingJobs {
                record: 1,
                year: 2021
            }
        ));
        assert_eq!(err.to_string(), "Record 1 (year 2021) is missing `jobs`");
    }

    #[test]
    fn test_missing_salary_names_job() {
        let err = parse_dataset(
            r#"[{"year": 2020, "jobs": [{"title": "A", "salary": 1}, {"title": "B"}]}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingJobField {
                record: 0,
                year: 2020,
                job: 1,
                field: "salary"
            }
        ));
    }

    #[test]
    fn test_missing_title_names_job() {
        let err = parse_dataset(r#"[{"year": 2020, "jobs": [{"salary": 10}]}]"#).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingJobField { field: "title", .. }
        ));
    }

    #[test]
    fn test_missing_year() {
        let err = parse_dataset(r#"[{"jobs": []}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::MissingYear { record: 0 }));
    }

    #[test]
    fn test_negative_salary_rejected() {
        let err =
            parse_dataset(r#"[{"year": 2020, "jobs": [{"title": "A", "salary": -5}]}]"#).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidJobField {
                job: 0,
                field: "salary",
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let err = parse_dataset(
            r#"[{"year": 2020, "jobs": []}, {"year": 2021, "jobs": []}, {"year": 2020, "jobs": []}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::DuplicateYear {
                record: 2,
                year: 2020,
                first: 0
            }
        ));
    }

    #[test]
    fn test_mistyped_salary_names_job() {
        let err = parse_dataset(
            r#"[{"year": 2019, "jobs": []}, {"year": 2020, "jobs": [{"title": "A", "salary": 1}, {"title": "B", "salary": "lots"}]}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidJobField {
                record: 1,
                year: 2020,
                job: 1,
                field: "salary",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            r#"Record 1 (year 2020), job 1 has an invalid `salary`: "lots""#
        );
    }

    #[test]
    fn test_mistyped_title_names_job() {
        let err = parse_dataset(r#"[{"year": 2020, "jobs": [{"title": 42, "salary": 1}]}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidJobField {
                job: 0,
                field: "title",
                ..
            }
        ));
    }

    #[test]
    fn test_mistyped_year_names_record() {
        let err = parse_dataset(r#"[{"year": "2020", "jobs": []}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidYear { record: 0, .. }));
        let err = parse_dataset(r#"[{"year": 2020.5, "jobs": []}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidYear { record: 0, .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_dataset("[{\"year\": 2020,").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_year_lookup() {
        let dataset = Dataset::from_json(
            r#"[{"year": 2020, "jobs": []}, {"year": 2021, "jobs": [{"title": "A", "salary": 1}]}]"#,
        )
        .unwrap();
        assert_eq!(dataset.year(2021).map(|r| r.jobs.len()), Some(1));
        assert!(dataset.year(1999).is_none());
    }
}
