use super::columns::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column, if any. Only one column sorts at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    active: Option<(C, SortDirection)>,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<C: Copy + PartialEq> SortState<C> {
    /// Rows in input order.
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(column: C, direction: SortDirection) -> Self {
        Self {
            active: Some((column, direction)),
        }
    }

    /// Header click: a new column sorts ascending, the active one flips.
    pub fn toggle(self, column: C) -> Self {
        let direction = match self.active {
            Some((active, direction)) if active == column => direction.flipped(),
            _ => SortDirection::Ascending,
        };
        Self::by(column, direction)
    }

    pub fn active(&self) -> Option<(C, SortDirection)> {
        self.active
    }

    pub fn direction_of(&self, column: C) -> Option<SortDirection> {
        match self.active {
            Some((active, direction)) if active == column => Some(direction),
            _ => None,
        }
    }

    /// Suffix shown after a column header.
    pub fn indicator(&self, column: C) -> &'static str {
        match self.direction_of(column) {
            Some(SortDirection::Ascending) => " \u{1F53C}",
            Some(SortDirection::Descending) => " \u{1F53D}",
            None => "",
        }
    }
}

/// Stable sort of `rows` by the active column.
///
/// Descending reverses the comparator rather than the output, so equal rows
/// keep their input order in both directions.
pub fn sort_rows<R, C>(rows: &mut [R], state: &SortState<C>)
where
    C: Column<R> + Copy + PartialEq,
{
    if let Some((column, direction)) = state.active() {
        match direction {
            SortDirection::Ascending => rows.sort_by(|a, b| column.compare(a, b)),
            SortDirection::Descending => rows.sort_by(|a, b| column.compare(b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{AverageSalary, YearSummary};
    use crate::table::SummaryColumn;

    fn rows() -> Vec<YearSummary> {
        [(2020, 3, 10.0), (2021, 5, 30.0), (2022, 3, 20.0), (2023, 1, 30.0)]
            .into_iter()
            .map(|(year, total_jobs, avg)| YearSummary {
                year,
                total_jobs,
                average_salary: AverageSalary::Amount(avg),
            })
            .collect()
    }

    fn years(rows: &[YearSummary]) -> Vec<i32> {
        rows.iter().map(|r| r.year).collect()
    }

    #[test]
    fn test_toggle_cycles_direction() {
        let state = SortState::unsorted().toggle(SummaryColumn::Year);
        assert_eq!(state.direction_of(SummaryColumn::Year), Some(SortDirection::Ascending));
        let state = state.toggle(SummaryColumn::Year);
        assert_eq!(state.direction_of(SummaryColumn::Year), Some(SortDirection::Descending));
        let state = state.toggle(SummaryColumn::Year);
        assert_eq!(state.direction_of(SummaryColumn::Year), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_new_column_starts_ascending() {
        let state = SortState::by(SummaryColumn::Year, SortDirection::Descending)
            .toggle(SummaryColumn::TotalJobs);
        assert_eq!(
            state.active(),
            Some((SummaryColumn::TotalJobs, SortDirection::Ascending))
        );
        assert_eq!(state.direction_of(SummaryColumn::Year), None);
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let mut r = rows();
        sort_rows(&mut r, &SortState::<SummaryColumn>::unsorted());
        assert_eq!(years(&r), vec![2020, 2021, 2022, 2023]);
    }

    #[test]
    fn test_ties_keep_input_order_both_directions() {
        let mut asc = rows();
        sort_rows(&mut asc, &SortState::by(SummaryColumn::TotalJobs, SortDirection::Ascending));
        assert_eq!(years(&asc), vec![2023, 2020, 2022, 2021]);

        let mut desc = rows();
        sort_rows(&mut desc, &SortState::by(SummaryColumn::TotalJobs, SortDirection::Descending));
        assert_eq!(years(&desc), vec![2021, 2020, 2022, 2023]);
    }

    #[test]
    fn test_distinct_keys_descending_reverses_ascending() {
        let mut asc = rows();
        sort_rows(&mut asc, &SortState::by(SummaryColumn::Year, SortDirection::Ascending));
        let mut desc = rows();
        sort_rows(&mut desc, &SortState::by(SummaryColumn::Year, SortDirection::Descending));
        let mut reversed = years(&asc);
        reversed.reverse();
        assert_eq!(years(&desc), reversed);
    }

    #[test]
    fn test_double_toggle_restores_first_order() {
        let first = SortState::unsorted().toggle(SummaryColumn::AverageSalary);
        let again = first.toggle(SummaryColumn::AverageSalary).toggle(SummaryColumn::AverageSalary);
        let mut a = rows();
        let mut b = rows();
        sort_rows(&mut a, &first);
        sort_rows(&mut b, &again);
        assert_eq!(years(&a), years(&b));
        assert_eq!(years(&a), vec![2020, 2022, 2021, 2023]);
    }

    #[test]
    fn test_indicator() {
        let state = SortState::by(SummaryColumn::Year, SortDirection::Descending);
        assert_eq!(state.indicator(SummaryColumn::Year), " \u{1F53D}");
        assert_eq!(state.indicator(SummaryColumn::TotalJobs), "");
    }
}
