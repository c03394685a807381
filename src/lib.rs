#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-datagrid/")]

//! # bubbletea-datagrid
//!
//! A searchable, sortable, paginated data grid for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, plus the small set of widgets a record-management screen is
//! built from: text inputs, labelled form fields, a loading spinner, a
//! paginator and a key binding help bar.
//!
//! ## Overview
//!
//! The grid takes rows of any type implementing [`grid::Record`] (and
//! `serde_json::Value` out of the box), a list of [`grid::Column`]s and an
//! optional set of [`grid::Handlers`]. It keeps the search term, sort,
//! page and selection, renders the current page, and calls back into the
//! caller when the user asks to view, edit, delete, bulk delete or export rows.
//! Every component follows the Elm Architecture with `update()` and `view()`.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_datagrid::prelude::*;
//! use serde_json::json;
//!
//! let mut grid = DataGrid::new(vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("balance", "Balance").sortable(),
//! ])
//! .with_page_size(2)
//! .with_rows(vec![
//!     json!({"id": 1, "name": "Jane Smith", "balance": 150}),
//!     json!({"id": 2, "name": "Bob Johnson", "balance": 250}),
//!     json!({"id": 3, "name": "John Doe", "balance": 100}),
//! ]);
//!
//! grid.set_search_term("john");
//! assert_eq!(grid.visible_len(), 2);
//!
//! grid.toggle_sort("balance");
//! assert_eq!(grid.page_rows()[0]["name"], "John Doe");
//! ```
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | `DataGrid` | Tabular data with search, sort, paging, selection and actions |
//! | `TextInput` | Single-line text input |
//! | `Field` / `Form` | Labelled inputs with required-field validation |
//! | `Spinner` | Animated loading indicator |
//! | `Paginator` | Page state and navigation keys |
//! | `HelpModel` | Key binding help display |

pub mod error;
pub mod field;
pub mod grid;
pub mod help;
pub mod key;
pub mod paginator;
pub mod spinner;
pub mod textinput;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input and shows its active state; a
/// blurred one ignores input. Screens that stack a grid above a form use
/// this to decide where keys go.
///
/// ## Examples
///
/// ```rust
/// use bubbletea_datagrid::{Component, TextInput};
///
/// let mut input = bubbletea_datagrid::textinput_new();
/// input.focus();
/// assert!(Component::focused(&input));
/// Component::blur(&mut input);
/// assert!(!Component::focused(&input));
/// # let _: &TextInput = &input;
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command, for
    /// example to start a cursor blink.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use error::{ActionError, ActionResult, Error, FieldError, Result};
pub use field::{Field, Form, FormKeyMap};
pub use grid::{
    Column, GridConfig, Handlers, Model as DataGrid, Record, SearchMode, SelectAllScope,
};
pub use help::Model as HelpModel;
pub use key::{matches, matches_binding, new_binding, with_help, Binding, KeyMap, KeyPress};
pub use paginator::Model as Paginator;
pub use spinner::{Model as Spinner, TickMsg as SpinnerTickMsg};
pub use textinput::{
    new as textinput_new, EchoMode, KeyMap as TextInputKeyMap, Model as TextInput, ValidateFunc,
};

/// Everything needed to build a grid screen.
pub mod prelude {
    pub use crate::error::{ActionError, ActionResult};
    pub use crate::field::{Field, Form};
    pub use crate::grid::{
        Align, CellValue, Column, GridConfig, Handlers, Model as DataGrid, Record, RowAction,
        RowId, SearchMode, SelectAllScope, SortConfig, SortDirection,
    };
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::spinner::Model as Spinner;
    pub use crate::textinput::{new as textinput_new, Model as TextInput};
    pub use crate::Component;
}
