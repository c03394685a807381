//! Single-line text input.
//!
//! Used as the grid's search box and as the editable part of a form
//! [`Field`](crate::field::Field).
//!
//! ```rust
//! use bubbletea_datagrid::textinput::new;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut input = new();
//! input.set_placeholder("Search...");
//! let _ = input.focus();
//!
//! input.update(Box::new(KeyMsg { key: KeyCode::Char('h'), modifiers: KeyModifiers::NONE }));
//! input.update(Box::new(KeyMsg { key: KeyCode::Char('i'), modifiers: KeyModifiers::NONE }));
//! assert_eq!(input.value(), "hi");
//! ```

pub mod keymap;
pub mod model;
pub mod movement;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use types::{EchoMode, PasteErrMsg, PasteMsg, ValidateFunc};
