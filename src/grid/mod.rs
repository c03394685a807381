//! Tabular data grid.
//!
//! The grid shows caller-owned rows through a set of [`Column`]s and handles
//! everything between the data and the user: case-insensitive search,
//! single-column sort, pagination, id-keyed selection, and dispatching row
//! and bulk actions back to the caller through [`Handlers`].
//!
//! The grid never modifies or copies rows. Every action hands the caller a
//! reference to its own row, and the caller decides what to do (open a form,
//! call a server, ...) and, if data changed, pushes the new rows back with
//! [`Model::set_rows`].
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_datagrid::grid::{Column, Handlers, Model};
//! use serde_json::{json, Value};
//!
//! let grid = Model::new(vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("contactInfo.email", "Email"),
//! ])
//! .with_title("Companies")
//! .with_rows(vec![
//!     json!({"id": 1, "name": "Acme", "contactInfo": {"email": "ops@acme.test"}}),
//!     json!({"id": 2, "name": "Globex", "contactInfo": {"email": "it@globex.test"}}),
//! ])
//! .with_handlers(Handlers::new().on_edit(|company: &Value| {
//!     println!("edit {}", company["name"]);
//!     Ok(())
//! }));
//!
//! assert_eq!(grid.summary(), "Showing 1 to 2 of 2 results");
//! ```

mod actions;
pub mod column;
pub mod config;
pub mod handlers;
pub mod keys;
mod model;
pub mod pipeline;
mod rendering;
pub mod selection;
pub mod sort;
pub mod style;
pub mod value;

#[cfg(test)]
mod tests;

pub use column::{Align, Column, RenderFn};
pub use config::{GridConfig, SearchMode, SelectAllScope};
pub use handlers::{ActionKind, BulkHandler, Handlers, RowAction, RowHandler};
pub use keys::GridKeyMap;
pub use model::{Model, Status};
pub use selection::Selection;
pub use sort::{SortConfig, SortDirection};
pub use style::GridStyles;
pub use value::{CellValue, Record, RowId};

use crate::key::{self, KeyMap};
use crate::{spinner, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};

impl<R: Record> Model<R> {
    /// Handles key presses, spinner ticks and window resizes.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<spinner::TickMsg>().is_some() {
            return if self.config.loading {
                self.spinner.update(msg)
            } else {
                None
            };
        }
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.set_width(size.width as usize);
            return None;
        }
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg)
    }

    /// Applies one key press. Keys are ignored while loading.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.config.loading {
            return None;
        }
        if self.search_input.focused() {
            return self.handle_search_key(key_msg);
        }

        self.status = None;
        let km = &self.keymap;
        if km.cursor_up.matches(key_msg) {
            self.cursor_up();
        } else if km.cursor_down.matches(key_msg) {
            self.cursor_down();
        } else if let Some(action) = self
            .handlers
            .actions
            .iter()
            .position(|a| a.binding.matches(key_msg))
        {
            self.run_action(action, self.cursor);
        } else if self.paginator.handle_key(key_msg) {
            self.page_changed();
        } else if km.search.matches(key_msg) {
            let cmd = self.search_input.focus();
            self.update_keybindings();
            return cmd;
        } else if km.clear_search.matches(key_msg) {
            self.clear_search();
        } else if km.next_column.matches(key_msg) {
            self.next_column();
        } else if km.prev_column.matches(key_msg) {
            self.prev_column();
        } else if km.sort.matches(key_msg) {
            if let Some(key) = self.columns.get(self.column_cursor).map(|c| c.key.clone()) {
                self.toggle_sort(&key);
            }
        } else if km.toggle_row.matches(key_msg) {
            self.toggle_row(self.cursor);
        } else if km.toggle_all.matches(key_msg) {
            self.toggle_select_all();
        } else if km.activate.matches(key_msg) {
            self.click_row(self.cursor);
        } else if km.view.matches(key_msg) {
            self.view_row(self.cursor);
        } else if km.edit.matches(key_msg) {
            self.edit_row(self.cursor);
        } else if km.delete.matches(key_msg) {
            self.delete_row(self.cursor);
        } else if km.bulk_delete.matches(key_msg) {
            self.bulk_delete();
        } else if km.export.matches(key_msg) {
            self.export();
        } else if km.reset.matches(key_msg) {
            self.reset();
        } else if km.show_full_help.matches(key_msg) || km.close_full_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
            self.update_keybindings();
        }
        None
    }

    fn handle_search_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.accept_search.matches(key_msg) {
            self.search_input.blur();
            self.update_keybindings();
            return None;
        }
        if self.keymap.cancel_search.matches(key_msg) {
            self.search_input.blur();
            self.clear_search();
            return None;
        }

        let before = self.search_input.value();
        let cmd = self.search_input.handle_key(key_msg);
        if self.search_input.value() != before {
            self.apply_search();
        }
        cmd
    }
}

impl<R: Record> KeyMap for Model<R> {
    fn short_help(&self) -> Vec<&key::Binding> {
        if self.search_input.focused() {
            return vec![&self.keymap.accept_search, &self.keymap.cancel_search];
        }
        vec![
            &self.keymap.cursor_up,
            &self.keymap.cursor_down,
            &self.paginator.keymap.prev_page,
            &self.paginator.keymap.next_page,
            &self.keymap.search,
            &self.keymap.clear_search,
            &self.keymap.toggle_row,
            &self.keymap.edit,
            &self.keymap.delete,
            &self.keymap.show_full_help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let km = &self.keymap;
        let pk = &self.paginator.keymap;
        let mut row_actions = vec![
            &km.toggle_row,
            &km.toggle_all,
            &km.activate,
            &km.view,
            &km.edit,
            &km.delete,
        ];
        row_actions.extend(self.handlers.actions.iter().map(|a| &a.binding));
        vec![
            vec![
                &km.cursor_up,
                &km.cursor_down,
                &pk.prev_page,
                &pk.next_page,
                &pk.first_page,
                &pk.last_page,
            ],
            vec![
                &km.search,
                &km.clear_search,
                &km.next_column,
                &km.prev_column,
                &km.sort,
            ],
            row_actions,
            vec![&km.bulk_delete, &km.export, &km.reset, &km.close_full_help],
        ]
    }
}

impl<R: Record> Component for Model<R> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
        self.search_input.blur();
        self.update_keybindings();
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl<R: Record + Send + 'static> BubbleTeaModel for Model<R> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
