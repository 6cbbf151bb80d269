use serde::Deserialize;

/// What a click on the already expanded row does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpandPolicy {
    /// Collapse it.
    #[default]
    Toggle,
    /// Keep it expanded.
    SetOnly,
}

/// Which year's breakdown is visible.
///
/// Rows are referenced by year value so the state survives re-sorting and
/// recomputation of the summary list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded(i32),
}

impl Expansion {
    /// Next state after a click on the row for `year`.
    pub fn click(self, year: i32, policy: ExpandPolicy) -> Self {
        match (self, policy) {
            (Expansion::Expanded(current), ExpandPolicy::Toggle) if current == year => {
                Expansion::Collapsed
            }
            _ => Expansion::Expanded(year),
        }
    }

    pub fn expanded_year(&self) -> Option<i32> {
        match self {
            Expansion::Collapsed => None,
            Expansion::Expanded(year) => Some(*year),
        }
    }

    pub fn is_expanded(&self, year: i32) -> bool {
        self.expanded_year() == Some(year)
    }
}
