//! Key bindings for the grid.
//!
//! - **Rows**: `↑/k`, `↓/j`
//! - **Pages**: handled by the embedded paginator (`←/h`, `→/l`, `g`, `G`)
//! - **Search**: `/` to focus, `enter` to accept, `esc` to leave or clear
//! - **Columns**: `tab`/`shift+tab` to move, `s` to sort
//! - **Selection**: `space` for the row, `a` for all
//! - **Actions**: `enter`, `v`, `e`, `d`, `D`, `x`
//!
//! The model disables bindings whose action is unavailable, so the help line
//! only lists what can actually be done.

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for grid navigation and actions.
#[derive(Debug, Clone)]
pub struct GridKeyMap {
    /// Move the row cursor up.
    pub cursor_up: key::Binding,
    /// Move the row cursor down.
    pub cursor_down: key::Binding,
    /// Focus the search box.
    pub search: key::Binding,
    /// Clear the search term.
    pub clear_search: key::Binding,
    /// Leave the search box keeping the term.
    pub accept_search: key::Binding,
    /// Leave the search box discarding the term.
    pub cancel_search: key::Binding,
    /// Move the column cursor right.
    pub next_column: key::Binding,
    /// Move the column cursor left.
    pub prev_column: key::Binding,
    /// Cycle the sort of the column under the column cursor.
    pub sort: key::Binding,
    /// Toggle selection of the cursor row.
    pub toggle_row: key::Binding,
    /// Toggle selection of every row in scope.
    pub toggle_all: key::Binding,
    /// Activate the cursor row.
    pub activate: key::Binding,
    /// View the cursor row.
    pub view: key::Binding,
    /// Edit the cursor row.
    pub edit: key::Binding,
    /// Delete the cursor row.
    pub delete: key::Binding,
    /// Delete the selected rows.
    pub bulk_delete: key::Binding,
    /// Export rows.
    pub export: key::Binding,
    /// Clear search, sort, selection and page.
    pub reset: key::Binding,
    /// Show the full help.
    pub show_full_help: key::Binding,
    /// Hide the full help.
    pub close_full_help: key::Binding,
}

impl Default for GridKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            clear_search: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear search"),
            accept_search: key::Binding::new(vec![KeyCode::Enter, KeyCode::Up, KeyCode::Down])
                .with_help("enter", "apply search"),
            cancel_search: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
            next_column: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "next column"),
            prev_column: key::Binding::new(vec![KeyCode::BackTab])
                .with_help("shift+tab", "prev column"),
            sort: key::Binding::new(vec![KeyCode::Char('s')]).with_help("s", "sort"),
            toggle_row: key::Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "select"),
            toggle_all: key::Binding::new(vec![KeyCode::Char('a')]).with_help("a", "select all"),
            activate: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "open"),
            view: key::Binding::new(vec![KeyCode::Char('v')]).with_help("v", "view"),
            edit: key::Binding::new(vec![KeyCode::Char('e')]).with_help("e", "edit"),
            delete: key::Binding::new(vec![KeyCode::Char('d')]).with_help("d", "delete"),
            bulk_delete: key::Binding::new(vec![KeyCode::Char('D')])
                .with_help("D", "delete selected"),
            export: key::Binding::new(vec![KeyCode::Char('x')]).with_help("x", "export"),
            reset: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            show_full_help: key::Binding::new(vec![KeyCode::Char('?')])
                .with_help("?", "more"),
            close_full_help: key::Binding::new(vec![KeyCode::Char('?')])
                .with_help("?", "close help"),
        }
    }
}
