use std::cmp::Ordering;

use crate::stats::YearSummary;

/// A sortable table column over rows of type `R`.
///
/// Cell text is left to the table binding, which owns display settings.
pub trait Column<R> {
    fn header(&self) -> &'static str;
    /// Ascending order of two rows by this column.
    fn compare(&self, a: &R, b: &R) -> Ordering;
}

/// Columns of the yearly summary table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryColumn {
    Year,
    TotalJobs,
    AverageSalary,
}

impl SummaryColumn {
    pub const ALL: [SummaryColumn; 3] = [
        SummaryColumn::Year,
        SummaryColumn::TotalJobs,
        SummaryColumn::AverageSalary,
    ];
}

/// Binds the summary columns to a placeholder for missing averages.
#[derive(Debug, Clone)]
pub struct SummaryColumns {
    pub salary_placeholder: String,
}

impl SummaryColumns {
    pub fn new(salary_placeholder: impl Into<String>) -> Self {
        Self {
            salary_placeholder: salary_placeholder.into(),
        }
    }

    pub fn cells(&self, row: &YearSummary) -> Vec<String> {
        SummaryColumn::ALL
            .iter()
            .map(|column| self.cell_for(*column, row))
            .collect()
    }

    pub fn cell_for(&self, column: SummaryColumn, row: &YearSummary) -> String {
        match column {
            SummaryColumn::Year => row.year.to_string(),
            SummaryColumn::TotalJobs => row.total_jobs.to_string(),
            SummaryColumn::AverageSalary => row.average_salary.display_or(&self.salary_placeholder),
        }
    }
}

impl Column<YearSummary> for SummaryColumn {
    fn header(&self) -> &'static str {
        match self {
            SummaryColumn::Year => "Year",
            SummaryColumn::TotalJobs => "Number of Total Jobs",
            SummaryColumn::AverageSalary => "Average Salary in USD",
        }
    }

    fn compare(&self, a: &YearSummary, b: &YearSummary) -> Ordering {
        match self {
            SummaryColumn::Year => a.year.cmp(&b.year),
            SummaryColumn::TotalJobs => a.total_jobs.cmp(&b.total_jobs),
            SummaryColumn::AverageSalary => a.average_salary.compare(&b.average_salary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AverageSalary;

    fn row(year: i32, total_jobs: usize, average: Option<f64>) -> YearSummary {
        YearSummary {
            year,
            total_jobs,
            average_salary: average.map_or(AverageSalary::NotAvailable, AverageSalary::Amount),
        }
    }

    #[test]
    fn test_headers() {
        let headers: Vec<&str> = SummaryColumn::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            vec!["Year", "Number of Total Jobs", "Average Salary in USD"]
        );
    }

    #[test]
    fn test_cells_use_placeholder() {
        let columns = SummaryColumns::new("none");
        assert_eq!(columns.cells(&row(2021, 0, None)), vec!["2021", "0", "none"]);
        assert_eq!(
            columns.cells(&row(2020, 3, Some(123333.3333))),
            vec!["2020", "3", "123333.33"]
        );
    }

    #[test]
    fn test_salary_cell_always_uses_bound_placeholder() {
        let columns = SummaryColumns::new("\u{2014}");
        let empty = row(2021, 0, None);
        assert_eq!(columns.cell_for(SummaryColumn::AverageSalary, &empty), "\u{2014}");
        assert!(!columns.cells(&empty).iter().any(|c| c == "N/A"));
    }

    #[test]
    fn test_salary_compares_numerically() {
        // "9000.00" > "10000.00" as strings
        let a = row(2020, 1, Some(9000.0));
        let b = row(2021, 1, Some(10000.0));
        assert_eq!(SummaryColumn::AverageSalary.compare(&a, &b), Ordering::Less);
    }
}
