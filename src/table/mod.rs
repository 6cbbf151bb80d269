//! Sortable summary table with a single expandable breakdown row.
//!
//! The model here is independent of the UI: components feed it the current
//! sort and expansion state and draw the returned [`RenderedTable`].

mod columns;
mod expansion;
mod sort;
mod view;

pub use columns::{Column, SummaryColumn, SummaryColumns};
pub use expansion::{ExpandPolicy, Expansion};
pub use sort::{sort_rows, SortDirection, SortState};
pub use view::{build_table, Breakdown, HeaderCell, RenderedRow, RenderedTable};
