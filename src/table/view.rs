use super::columns::{Column, SummaryColumn, SummaryColumns};
use super::expansion::Expansion;
use super::sort::{sort_rows, SortDirection, SortState};
use crate::stats::{title_counts, Dataset, TitleCount, YearSummary};

/// Everything the summary table component needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub column: SummaryColumn,
    pub label: &'static str,
    pub direction: Option<SortDirection>,
    pub indicator: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub year: i32,
    pub cells: Vec<String>,
    /// Title counts shown beneath this row while it is expanded
    pub breakdown: Option<Breakdown>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    /// Number of columns the breakdown row spans
    pub colspan: usize,
    pub counts: Vec<TitleCount>,
}

impl RenderedTable {
    pub fn expanded_rows(&self) -> impl Iterator<Item = &RenderedRow> {
        self.rows.iter().filter(|r| r.breakdown.is_some())
    }
}

/// Sort the dataset's summaries and attach the breakdown of the expanded year.
pub fn build_table(
    dataset: &Dataset,
    columns: &SummaryColumns,
    sort: &SortState<SummaryColumn>,
    expansion: Expansion,
) -> RenderedTable {
    let headers = SummaryColumn::ALL
        .iter()
        .map(|column| HeaderCell {
            column: *column,
            label: column.header(),
            direction: sort.direction_of(*column),
            indicator: sort.indicator(*column),
        })
        .collect();

    let mut summaries: Vec<YearSummary> = dataset.summaries().to_vec();
    sort_rows(&mut summaries, sort);

    let rows = summaries
        .iter()
        .map(|summary| {
            let breakdown = expansion
                .is_expanded(summary.year)
                .then(|| dataset.year(summary.year))
                .flatten()
                .map(|record| Breakdown {
                    colspan: SummaryColumn::ALL.len(),
                    counts: title_counts(record),
                });
            RenderedRow {
                year: summary.year,
                cells: columns.cells(summary),
                breakdown,
            }
        })
        .collect();

    RenderedTable { headers, rows }
}
