//! The derivation from rows to what the grid shows.
//!
//! Everything here is a pure function over the caller's rows. Results are
//! indices into the row slice, so nothing is cloned and the original rows can
//! be handed back to handlers untouched.

use super::column::Column;
use super::config::SearchMode;
use super::sort::{SortConfig, SortDirection};
use super::value::Record;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A search over the grid's columns.
pub struct Search<'a, R> {
    columns: &'a [Column<R>],
    needle: String,
    mode: SearchMode,
    scoped: bool,
    matcher: Option<SkimMatcherV2>,
}

impl<'a, R: Record> Search<'a, R> {
    /// Prepares a search for `term`.
    ///
    /// When `scoped` is true only columns marked filterable are searched,
    /// otherwise every column is.
    pub fn new(columns: &'a [Column<R>], term: &str, mode: SearchMode, scoped: bool) -> Self {
        let matcher = match mode {
            SearchMode::Fuzzy => Some(SkimMatcherV2::default().ignore_case()),
            SearchMode::Substring => None,
        };
        Self {
            columns,
            needle: term.trim().to_lowercase(),
            mode,
            scoped,
            matcher,
        }
    }

    /// True when the term is blank and every row passes.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The lowercased text a row is searched in: the plain values of the
    /// participating columns joined by spaces.
    pub fn haystack(&self, row: &R) -> String {
        self.columns
            .iter()
            .filter(|c| !self.scoped || c.filterable)
            .map(|c| c.value(row).to_string())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Whether `row` passes the search.
    pub fn matches(&self, row: &R) -> bool {
        if self.is_empty() {
            return true;
        }
        let haystack = self.haystack(row);
        match (self.mode, &self.matcher) {
            (SearchMode::Fuzzy, Some(matcher)) => {
                matcher.fuzzy_match(&haystack, &self.needle).is_some()
            }
            _ => haystack.contains(&self.needle),
        }
    }
}

/// Indices of the rows that pass `search`, in data order.
pub fn filter<R: Record>(rows: &[R], search: &Search<'_, R>) -> Vec<usize> {
    if search.is_empty() {
        return (0..rows.len()).collect();
    }
    rows.iter()
        .enumerate()
        .filter(|(_, row)| search.matches(row))
        .map(|(i, _)| i)
        .collect()
}

/// Stable sort of `indices` by the value under the sort key.
pub fn sort<R: Record>(rows: &[R], indices: &mut [usize], sort: Option<&SortConfig>) {
    let Some(sort) = sort else {
        return;
    };
    let keys: Vec<_> = indices.iter().map(|&i| rows[i].field(&sort.key)).collect();
    let mut order: Vec<usize> = (0..indices.len()).collect();
    order.sort_by(|&a, &b| {
        let ord = keys[a].compare(&keys[b]);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    let sorted: Vec<usize> = order.into_iter().map(|o| indices[o]).collect();
    indices.copy_from_slice(&sorted);
}

/// `filter` then `sort`: the full visible sequence before paging.
pub fn derive<R: Record>(
    rows: &[R],
    search: &Search<'_, R>,
    sort_config: Option<&SortConfig>,
) -> Vec<usize> {
    let mut indices = filter(rows, search);
    sort(rows, &mut indices, sort_config);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("email", "Email"),
            Column::new("notes", "Notes").filterable(false),
        ]
    }

    fn rows() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "John Doe", "email": "john@example.com", "notes": "vip"}),
            json!({"id": 2, "name": "Jane Smith", "email": "jane@example.com", "notes": "late payer"}),
            json!({"id": 3, "name": "Bob Johnson", "email": "bob@example.com", "notes": ""}),
        ]
    }

    #[test]
    fn test_substring_search_is_case_insensitive() {
        let cols = columns();
        let search = Search::new(&cols, "JOHN", SearchMode::Substring, true);
        assert_eq!(filter(&rows(), &search), vec![0, 2]);
    }

    #[test]
    fn test_blank_term_matches_everything() {
        let cols = columns();
        let search = Search::new(&cols, "   ", SearchMode::Substring, true);
        assert!(search.is_empty());
        assert_eq!(filter(&rows(), &search), vec![0, 1, 2]);
    }

    #[test]
    fn test_unfilterable_column_is_skipped_when_scoped() {
        let cols = columns();
        let data = rows();
        let scoped = Search::new(&cols, "payer", SearchMode::Substring, true);
        assert!(filter(&data, &scoped).is_empty());

        let all = Search::new(&cols, "payer", SearchMode::Substring, false);
        assert_eq!(filter(&data, &all), vec![1]);
    }

    #[test]
    fn test_search_uses_values_not_rendered_text() {
        let cols: Vec<Column<Value>> =
            vec![Column::new("status", "Status").with_render(|_, _| "Badge".to_string())];
        let data = vec![json!({"status": "active"})];
        let search = Search::new(&cols, "badge", SearchMode::Substring, true);
        assert!(filter(&data, &search).is_empty());
    }

    #[test]
    fn test_fuzzy_search() {
        let cols = columns();
        let search = Search::new(&cols, "jsmth", SearchMode::Fuzzy, true);
        assert_eq!(filter(&rows(), &search), vec![1]);
    }

    #[test]
    fn test_sort_is_stable() {
        let data = vec![
            json!({"id": "a", "dept": "ops"}),
            json!({"id": "b", "dept": "eng"}),
            json!({"id": "c", "dept": "ops"}),
            json!({"id": "d", "dept": "eng"}),
        ];
        let mut idx = vec![0, 1, 2, 3];
        sort(&data, &mut idx, Some(&SortConfig::asc("dept")));
        assert_eq!(idx, vec![1, 3, 0, 2]);

        let mut idx = vec![0, 1, 2, 3];
        sort(&data, &mut idx, Some(&SortConfig::desc("dept")));
        assert_eq!(idx, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let data = vec![json!({"n": 10}), json!({"n": 9}), json!({"n": 100})];
        let mut idx = vec![0, 1, 2];
        sort(&data, &mut idx, Some(&SortConfig::asc("n")));
        assert_eq!(idx, vec![1, 0, 2]);
    }

    #[test]
    fn test_derive_filters_then_sorts() {
        let cols = columns();
        let data = rows();
        let search = Search::new(&cols, "john", SearchMode::Substring, true);
        let out = derive(&data, &search, Some(&SortConfig::asc("name")));
        assert_eq!(out, vec![2, 0]);
    }
}
