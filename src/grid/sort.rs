//! Single-key sort state.

use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Header indicator.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// The active sort: a column key and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Column key.
    pub key: String,
    /// Direction.
    pub direction: SortDirection,
}

impl SortConfig {
    /// Ascending sort on `key`.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `key`.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Next sort after activating the header of `key`.
///
/// The same column cycles asc, desc, unsorted. Another column starts at asc.
pub fn cycle(current: Option<&SortConfig>, key: &str) -> Option<SortConfig> {
    match current {
        Some(sort) if sort.key == key => match sort.direction {
            SortDirection::Asc => Some(SortConfig::desc(key)),
            SortDirection::Desc => None,
        },
        _ => Some(SortConfig::asc(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_same_column() {
        let first = cycle(None, "name");
        assert_eq!(first, Some(SortConfig::asc("name")));
        let second = cycle(first.as_ref(), "name");
        assert_eq!(second, Some(SortConfig::desc("name")));
        assert_eq!(cycle(second.as_ref(), "name"), None);
    }

    #[test]
    fn test_other_column_restarts_ascending() {
        let current = SortConfig::desc("name");
        assert_eq!(cycle(Some(&current), "total"), Some(SortConfig::asc("total")));
    }
}
