use serde::Serialize;

use crate::stats::YearSummary;

/// Name of the jobs-per-year series, shown in the legend and tooltip.
pub const TOTAL_JOBS_SERIES: &str = "totalJobs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    #[serde(rename = "totalJobs")]
    pub total_jobs: usize,
}

/// A named line of points plotted against categorical years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: &'static str,
    pub points: Vec<SeriesPoint>,
}

impl LineSeries {
    pub fn max_value(&self) -> usize {
        self.points.iter().map(|p| p.total_jobs).max().unwrap_or(0)
    }
}

/// Total jobs per year in dataset order, independent of any table sort.
pub fn jobs_per_year(summaries: &[YearSummary]) -> LineSeries {
    LineSeries {
        name: TOTAL_JOBS_SERIES,
        points: summaries
            .iter()
            .map(|s| SeriesPoint {
                year: s.year,
                total_jobs: s.total_jobs,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AverageSalary;

    #[test]
    fn test_series_keeps_input_order() {
        let summaries = vec![
            YearSummary {
                year: 2020,
                total_jobs: 3,
                average_salary: AverageSalary::Amount(123333.33),
            },
            YearSummary {
                year: 2021,
                total_jobs: 0,
                average_salary: AverageSalary::NotAvailable,
            },
        ];
        let series = jobs_per_year(&summaries);
        assert_eq!(series.name, "totalJobs");
        assert_eq!(
            series.points,
            vec![
                SeriesPoint {
                    year: 2020,
                    total_jobs: 3
                },
                SeriesPoint {
                    year: 2021,
                    total_jobs: 0
                },
            ]
        );
        assert_eq!(series.max_value(), 3);
    }

    #[test]
    fn test_point_serializes_like_chart_data() {
        let json = serde_json::to_string(&SeriesPoint {
            year: 2020,
            total_jobs: 3,
        })
        .unwrap();
        assert_eq!(json, r#"{"year":2020,"totalJobs":3}"#);
    }
}
