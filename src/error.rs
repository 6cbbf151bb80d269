use thiserror::Error;

/// Errors raised while loading the job dataset.
///
/// Record and job positions are zero-based indices into the source array.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Record {record} is missing `year`")]
    MissingYear { record: usize },

    #[error("Record {record} has an invalid `year`: {value}")]
    InvalidYear { record: usize, value: String },

    #[error("Record {record} (year {year}) is missing `jobs`")]
    MissingJobs { record: usize, year: i32 },

    #[error("Record {record} (year {year}), job {job} is missing `{field}`")]
    MissingJobField {
        record: usize,
        year: i32,
        job: usize,
        field: &'static str,
    },

    #[error("Record {record} (year {year}), job {job} has an invalid `{field}`: {value}")]
    InvalidJobField {
        record: usize,
        year: i32,
        job: usize,
        field: &'static str,
        value: String,
    },

    #[error("Record {record} repeats year {year} (first seen at record {first})")]
    DuplicateYear {
        record: usize,
        year: i32,
        first: usize,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config error: invalid log filter `{filter}`: {reason}")]
    LogFilter { filter: String, reason: String },
}
