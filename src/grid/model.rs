//! Grid state and the operations that change it.

use super::column::Column;
use super::config::{GridConfig, SearchMode, SelectAllScope};
use super::handlers::{ActionKind, Handlers};
use super::keys::GridKeyMap;
use super::pipeline::{self, Search};
use super::selection::Selection;
use super::sort::{self, SortConfig};
use super::style::GridStyles;
use super::value::{Record, RowId};
use crate::{help, paginator, spinner, textinput};
use bubbletea_rs::Cmd;
use std::collections::HashSet;

/// Outcome line shown under the table after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Neutral feedback.
    Info(String),
    /// A handler reported a failure.
    Error(String),
}

impl Status {
    /// The text of the line.
    pub fn text(&self) -> &str {
        match self {
            Self::Info(s) | Self::Error(s) => s,
        }
    }
}

/// A searchable, sortable, paginated table over caller-owned rows.
///
/// The grid holds the rows, the column definitions, the configuration and
/// the handlers, plus its own view state: search term, sort, page, selection
/// and cursors. What is displayed is always derived from those, as
/// `page(sort(filter(rows)))`, and recomputed on every change.
///
/// ```rust
/// use bubbletea_datagrid::grid::{Column, Model};
/// use serde_json::json;
///
/// let mut grid = Model::new(vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("total", "Total").sortable(),
/// ])
/// .with_rows(vec![
///     json!({"id": 1, "name": "Acme", "total": 120}),
///     json!({"id": 2, "name": "Globex", "total": 80}),
/// ]);
///
/// grid.toggle_sort("total");
/// assert_eq!(grid.page_rows()[0]["name"], "Globex");
///
/// grid.set_search_term("acme");
/// assert_eq!(grid.visible_len(), 1);
/// ```
pub struct Model<R> {
    pub(super) rows: Vec<R>,
    pub(super) columns: Vec<Column<R>>,
    pub(super) config: GridConfig,
    pub(super) error: Option<String>,
    pub(super) handlers: Handlers<R>,
    pub(super) search_input: textinput::Model,
    pub(super) sort: Option<SortConfig>,
    pub(super) selection: Selection,
    pub(super) paginator: paginator::Model,
    pub(super) spinner: spinner::Model,
    pub(super) help: help::Model,
    /// Key bindings.
    pub keymap: GridKeyMap,
    /// Styles.
    pub styles: GridStyles,
    // Indices into `rows` after search and sort.
    pub(super) visible: Vec<usize>,
    pub(super) cursor: usize,
    pub(super) column_cursor: usize,
    pub(super) status: Option<Status>,
    pub(super) focus: bool,
    pub(super) width: usize,
}

impl<R: Record> Model<R> {
    /// Creates an empty, focused grid with default configuration.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        let config = GridConfig::default();
        let styles = GridStyles::default();

        let mut search_input = textinput::new();
        search_input.prompt = "Search: ".to_string();
        search_input.prompt_style = styles.search_prompt.clone();
        search_input.set_placeholder("Search...");

        let mut model = Self {
            rows: Vec::new(),
            columns,
            paginator: paginator::Model::new().with_per_page(config.page_size),
            spinner: spinner::Model::new().with_style(styles.spinner.clone()),
            config,
            error: None,
            handlers: Handlers::new(),
            search_input,
            sort: None,
            selection: Selection::new(),
            help: help::Model::new(),
            keymap: GridKeyMap::default(),
            styles,
            visible: Vec::new(),
            cursor: 0,
            column_cursor: 0,
            status: None,
            focus: true,
            width: 0,
        };
        model.refresh();
        model
    }

    /// Sets the rows (builder pattern).
    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Sets the configuration (builder pattern).
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Sets the handlers (builder pattern).
    pub fn with_handlers(mut self, handlers: Handlers<R>) -> Self {
        self.set_handlers(handlers);
        self
    }

    /// Sets the heading (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Sets the line under the heading (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    /// Sets rows per page (builder pattern). Values below 1 become 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size.max(1);
        self.refresh();
        self
    }

    /// Sets the empty message (builder pattern).
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.config.empty_message = message.into();
        self
    }

    /// Shows or hides the search box (builder pattern).
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.config.searchable = searchable;
        self.update_keybindings();
        self
    }

    /// Enables or disables selection (builder pattern).
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.config.selectable = selectable;
        self.update_keybindings();
        self
    }

    /// Offers or hides export (builder pattern).
    pub fn with_exportable(mut self, exportable: bool) -> Self {
        self.config.exportable = exportable;
        self.update_keybindings();
        self
    }

    /// Sets the search matching (builder pattern).
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.config.search_mode = mode;
        self.refresh();
        self
    }

    /// Sets the select-all scope (builder pattern).
    pub fn with_select_all_scope(mut self, scope: SelectAllScope) -> Self {
        self.config.select_all_scope = scope;
        self
    }

    /// Sets the error message (builder pattern).
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into()).filter(|e| !e.is_empty());
        self
    }

    /// Starts in the loading state (builder pattern). Use
    /// [`set_loading`](Self::set_loading) to also get the spinner command.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self.update_keybindings();
        self
    }

    // Recomputes the visible indices and everything that depends on them.
    pub(super) fn refresh(&mut self) {
        let term = self.search_input.value();
        let search = Search::new(
            &self.columns,
            &term,
            self.config.search_mode,
            self.config.filterable,
        );
        self.visible = pipeline::derive(&self.rows, &search, self.sort.as_ref());
        self.paginator.set_per_page(self.config.page_size);
        self.paginator.set_total_items(self.visible.len());
        self.cursor = self.cursor.min(self.page_len().saturating_sub(1));
        if self.column_cursor >= self.columns.len() {
            self.column_cursor = self.columns.len().saturating_sub(1);
        }
        self.update_keybindings();
    }

    // Enables exactly the bindings whose action is currently possible.
    pub(super) fn update_keybindings(&mut self) {
        let loading = self.config.loading;
        let searching = self.search_input.focused();
        let idle = !loading && !searching;
        let has_rows = !loading && self.page_len() > 0;
        let selectable = idle && self.config.selectable;

        let km = &mut self.keymap;
        km.cursor_up.set_enabled(idle && has_rows);
        km.cursor_down.set_enabled(idle && has_rows);
        km.search.set_enabled(idle && self.config.searchable);
        km.clear_search
            .set_enabled(idle && !self.search_input.value().is_empty());
        km.accept_search.set_enabled(searching);
        km.cancel_search.set_enabled(searching);
        km.next_column.set_enabled(idle && !self.columns.is_empty());
        km.prev_column.set_enabled(idle && !self.columns.is_empty());
        km.sort
            .set_enabled(idle && self.columns.iter().any(|c| c.sortable));
        km.toggle_row.set_enabled(selectable && has_rows);
        km.toggle_all.set_enabled(selectable && has_rows);
        km.activate
            .set_enabled(idle && has_rows && self.handlers.has(ActionKind::Click));
        km.view
            .set_enabled(idle && has_rows && self.handlers.has(ActionKind::View));
        km.edit
            .set_enabled(idle && has_rows && self.handlers.has(ActionKind::Edit));
        km.delete
            .set_enabled(idle && has_rows && self.handlers.has(ActionKind::Delete));
        km.bulk_delete.set_enabled(
            selectable && !self.selection.is_empty() && self.handlers.has(ActionKind::BulkDelete),
        );
        km.export.set_enabled(
            idle && self.config.exportable && self.handlers.has(ActionKind::Export),
        );
        km.reset.set_enabled(idle);
        km.show_full_help.set_enabled(!loading && !self.help.show_all);
        km.close_full_help.set_enabled(!loading && self.help.show_all);
        for action in &mut self.handlers.actions {
            action.binding.set_enabled(idle && has_rows);
        }
    }

    // ---- data -------------------------------------------------------------

    /// The caller's rows, in data order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replaces the rows.
    ///
    /// Search, sort and page are kept (the page is clamped if it no longer
    /// exists). Selected ids that no longer appear are dropped, and so are
    /// selections of rows without an id, whose positions mean nothing in the
    /// new data.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        let present: HashSet<RowId> = (0..self.rows.len()).map(|i| self.row_id(i)).collect();
        self.selection
            .retain(|id| !id.is_positional() && present.contains(id));
        log::debug!("grid rows replaced: {} row(s)", self.rows.len());
        self.refresh();
    }

    /// The column definitions.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Replaces the column definitions.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
        self.refresh();
    }

    /// The configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Replaces the configuration. A zero page size is treated as 1.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
        self.config.page_size = self.config.page_size.max(1);
        self.refresh();
    }

    /// Replaces the handlers.
    pub fn set_handlers(&mut self, handlers: Handlers<R>) {
        self.handlers = handlers;
        self.update_keybindings();
    }

    /// The handlers.
    pub fn handlers(&self) -> &Handlers<R> {
        &self.handlers
    }

    /// Identity of the row at `index` in [`rows`](Self::rows): its own id,
    /// or [`RowId::Index`] when it has none.
    pub fn row_id(&self, index: usize) -> RowId {
        self.rows
            .get(index)
            .and_then(|row| row.id())
            .unwrap_or(RowId::Index(index))
    }

    // ---- loading / error ----------------------------------------------------

    /// Whether the loading state is shown.
    pub fn is_loading(&self) -> bool {
        self.config.loading
    }

    /// Enters or leaves the loading state. Entering returns the command that
    /// starts the spinner.
    pub fn set_loading(&mut self, loading: bool) -> Option<Cmd> {
        self.config.loading = loading;
        if loading {
            self.search_input.blur();
        }
        self.update_keybindings();
        loading.then(|| self.spinner.start())
    }

    /// The error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets or clears the error message shown in place of the table.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error.filter(|e| !e.is_empty());
    }

    /// The line left by the last action, if any.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    // ---- derived view -------------------------------------------------------

    /// Number of rows passing the search.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Rows passing the search, in sort order.
    pub fn visible_rows(&self) -> Vec<&R> {
        self.visible.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Indices into [`rows`](Self::rows) of the current page.
    pub fn page_indices(&self) -> &[usize] {
        let (start, end) = self.paginator.get_slice_bounds(self.visible.len());
        &self.visible[start..end]
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<&R> {
        self.page_indices().iter().map(|&i| &self.rows[i]).collect()
    }

    pub(super) fn page_len(&self) -> usize {
        self.paginator.items_on_page(self.visible.len())
    }

    // ---- search -------------------------------------------------------------

    /// The search term.
    pub fn search_term(&self) -> String {
        self.search_input.value()
    }

    /// Sets the search term and returns to the first page.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_input.set_value(term);
        self.apply_search();
    }

    /// Clears the search term.
    pub fn clear_search(&mut self) {
        self.set_search_term("");
    }

    /// Whether the search box has focus.
    pub fn is_searching(&self) -> bool {
        self.search_input.focused()
    }

    pub(super) fn apply_search(&mut self) {
        self.paginator.first_page();
        self.cursor = 0;
        self.refresh();
        log::debug!(
            "search {:?} matched {} of {} row(s)",
            self.search_input.value(),
            self.visible.len(),
            self.rows.len()
        );
    }

    // ---- sort ---------------------------------------------------------------

    /// The active sort.
    pub fn sort_config(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    /// Cycles the sort of the column with `key`: ascending, descending,
    /// unsorted. Returns false, changing nothing, when no sortable column has
    /// that key.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        if !self.columns.iter().any(|c| c.key == key && c.sortable) {
            return false;
        }
        self.sort = sort::cycle(self.sort.as_ref(), key);
        match &self.sort {
            Some(s) => log::debug!("sort by {} {}", s.key, s.direction),
            None => log::debug!("sort cleared"),
        }
        self.refresh();
        true
    }

    /// Sets the sort directly.
    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort;
        self.refresh();
    }

    // ---- pages --------------------------------------------------------------

    /// Current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.paginator.page + 1
    }

    /// Number of pages; at least 1.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// `"Page P of N"`.
    pub fn page_label(&self) -> String {
        self.paginator.page_label()
    }

    /// `"Showing X to Y of Z results"`.
    pub fn summary(&self) -> String {
        self.paginator.summary(self.visible.len())
    }

    /// Next page; no-op on the last.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
        self.page_changed();
    }

    /// Previous page; no-op on the first.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
        self.page_changed();
    }

    /// First page.
    pub fn first_page(&mut self) {
        self.paginator.first_page();
        self.page_changed();
    }

    /// Last page.
    pub fn last_page(&mut self) {
        self.paginator.last_page();
        self.page_changed();
    }

    /// Jumps to a 1-based page, clamped to the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to_page(page);
        self.page_changed();
    }

    pub(super) fn page_changed(&mut self) {
        self.cursor = 0;
        self.update_keybindings();
        log::debug!("page {}", self.page_label());
    }

    // ---- cursors ------------------------------------------------------------

    /// Row cursor position within the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the row cursor, clamped to the page.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.page_len().saturating_sub(1));
    }

    /// The row under the cursor.
    pub fn cursor_row(&self) -> Option<&R> {
        self.page_indices().get(self.cursor).map(|&i| &self.rows[i])
    }

    /// Moves the row cursor up; stops at the top of the page.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the row cursor down; stops at the bottom of the page.
    pub fn cursor_down(&mut self) {
        self.set_cursor(self.cursor + 1);
    }

    /// Index of the column under the column cursor.
    pub fn column_cursor(&self) -> usize {
        self.column_cursor
    }

    /// Moves the column cursor right, wrapping.
    pub fn next_column(&mut self) {
        if !self.columns.is_empty() {
            self.column_cursor = (self.column_cursor + 1) % self.columns.len();
        }
    }

    /// Moves the column cursor left, wrapping.
    pub fn prev_column(&mut self) {
        let n = self.columns.len();
        if n > 0 {
            self.column_cursor = (self.column_cursor + n - 1) % n;
        }
    }

    // ---- selection ----------------------------------------------------------

    /// The selected ids.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the row at data `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&self.row_id(index))
    }

    /// Toggles the row at `pos` on the current page. Returns whether it is now
    /// selected; false also when selection is off or `pos` is out of range.
    pub fn toggle_row(&mut self, pos: usize) -> bool {
        if !self.config.selectable {
            return false;
        }
        let Some(&index) = self.page_indices().get(pos) else {
            return false;
        };
        let id = self.row_id(index);
        let selected = self.selection.toggle(id);
        log::debug!("selection: {} row(s)", self.selection.len());
        self.update_keybindings();
        selected
    }

    /// Ids of the rows "select all" acts on.
    pub fn select_all_scope_ids(&self) -> Vec<RowId> {
        let indices: &[usize] = match self.config.select_all_scope {
            SelectAllScope::Page => self.page_indices(),
            SelectAllScope::Filtered => &self.visible,
        };
        indices.iter().map(|&i| self.row_id(i)).collect()
    }

    /// Whether every row in the select-all scope is selected. False when the
    /// scope is empty.
    pub fn all_selected(&self) -> bool {
        self.selection.contains_all(&self.select_all_scope_ids())
    }

    /// Select-all: deselects the scope if fully selected, otherwise selects
    /// all of it. Rows outside the scope keep their state.
    pub fn toggle_select_all(&mut self) {
        if !self.config.selectable {
            return;
        }
        let ids = self.select_all_scope_ids();
        self.selection.toggle_all(&ids);
        log::debug!("selection: {} row(s)", self.selection.len());
        self.update_keybindings();
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.update_keybindings();
    }

    /// Selected rows in the current sort order, including any hidden by the
    /// search.
    pub fn selected_rows(&self) -> Vec<&R> {
        self.selected_indices()
            .into_iter()
            .map(|i| &self.rows[i])
            .collect()
    }

    pub(super) fn selected_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.rows.len())
            .filter(|&i| self.is_selected(i))
            .collect();
        pipeline::sort(&self.rows, &mut indices, self.sort.as_ref());
        indices
    }

    // ---- reset --------------------------------------------------------------

    /// Clears search, sort, selection, status and returns to the first page.
    pub fn reset(&mut self) {
        self.search_input.reset();
        self.search_input.blur();
        self.sort = None;
        self.selection.clear();
        self.status = None;
        self.paginator.first_page();
        self.cursor = 0;
        self.column_cursor = 0;
        self.refresh();
        log::debug!("grid reset");
    }

    /// Sets the width used to truncate the help line; 0 means unlimited.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.help.width = width;
    }
}
