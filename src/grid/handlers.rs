//! Callbacks the grid invokes on row and bulk actions.
//!
//! The grid owns no data operations. Viewing, editing and deleting are all
//! the caller's; the grid only decides which row(s) an action refers to and
//! calls back with references to the caller's own rows.

use crate::error::ActionResult;
use crate::key;
use std::fmt;

/// Handler for an action on one row.
pub type RowHandler<R> = Box<dyn FnMut(&R) -> ActionResult + Send>;

/// Handler for an action on several rows.
pub type BulkHandler<R> = Box<dyn FnMut(&[&R]) -> ActionResult + Send>;

/// A caller-defined action shown next to view/edit/delete.
pub struct RowAction<R> {
    /// Label in the actions column and the help line.
    pub label: String,
    /// Key that triggers the action on the cursor row.
    pub binding: key::Binding,
    handler: RowHandler<R>,
}

impl<R> RowAction<R> {
    /// Creates an action triggered by `keys` (e.g. `&["p"]`).
    pub fn new<F>(label: impl Into<String>, keys: &[&str], handler: F) -> Self
    where
        F: FnMut(&R) -> ActionResult + Send + 'static,
    {
        let label = label.into();
        let help_key = keys.first().copied().unwrap_or_default();
        let binding = key::new_binding(vec![
            key::with_keys_str(keys),
            key::with_help(help_key, &label.to_lowercase()),
        ]);
        Self {
            label,
            binding,
            handler: Box::new(handler),
        }
    }

    pub(crate) fn call(&mut self, row: &R) -> ActionResult {
        (self.handler)(row)
    }
}

impl<R> fmt::Debug for RowAction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .field("binding", &self.binding)
            .finish()
    }
}

/// The built-in actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Row activated (enter).
    Click,
    /// View details.
    View,
    /// Edit.
    Edit,
    /// Delete one row.
    Delete,
    /// Delete the selected rows.
    BulkDelete,
    /// Export rows.
    Export,
}

impl ActionKind {
    /// Name used in status lines and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Click => "Open",
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::BulkDelete => "Bulk delete",
            Self::Export => "Export",
        }
    }
}

/// The set of callbacks a grid is configured with. Absent handlers hide the
/// corresponding action.
///
/// ```rust
/// use bubbletea_datagrid::grid::Handlers;
/// use serde_json::Value;
///
/// let handlers = Handlers::<Value>::new()
///     .on_edit(|row: &Value| {
///         println!("editing {}", row["name"]);
///         Ok(())
///     })
///     .on_bulk_delete(|rows: &[&Value]| {
///         println!("deleting {} rows", rows.len());
///         Ok(())
///     });
/// assert!(handlers.has(bubbletea_datagrid::grid::ActionKind::Edit));
/// ```
pub struct Handlers<R> {
    pub(crate) on_row_click: Option<RowHandler<R>>,
    pub(crate) on_view: Option<RowHandler<R>>,
    pub(crate) on_edit: Option<RowHandler<R>>,
    pub(crate) on_delete: Option<RowHandler<R>>,
    pub(crate) on_bulk_delete: Option<BulkHandler<R>>,
    pub(crate) on_export: Option<BulkHandler<R>>,
    pub(crate) actions: Vec<RowAction<R>>,
}

impl<R> Default for Handlers<R> {
    fn default() -> Self {
        Self {
            on_row_click: None,
            on_view: None,
            on_edit: None,
            on_delete: None,
            on_bulk_delete: None,
            on_export: None,
            actions: Vec::new(),
        }
    }
}

impl<R> Handlers<R> {
    /// No handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a row is activated.
    pub fn on_row_click<F>(mut self, f: F) -> Self
    where
        F: FnMut(&R) -> ActionResult + Send + 'static,
    {
        self.on_row_click = Some(Box::new(f));
        self
    }

    /// Called by the view action.
    pub fn on_view<F>(mut self, f: F) -> Self
    where
        F: FnMut(&R) -> ActionResult + Send + 'static,
    {
        self.on_view = Some(Box::new(f));
        self
    }

    /// Called by the edit action.
    pub fn on_edit<F>(mut self, f: F) -> Self
    where
        F: FnMut(&R) -> ActionResult + Send + 'static,
    {
        self.on_edit = Some(Box::new(f));
        self
    }

    /// Called by the delete action.
    pub fn on_delete<F>(mut self, f: F) -> Self
    where
        F: FnMut(&R) -> ActionResult + Send + 'static,
    {
        self.on_delete = Some(Box::new(f));
        self
    }

    /// Called with the selected rows by bulk delete.
    pub fn on_bulk_delete<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[&R]) -> ActionResult + Send + 'static,
    {
        self.on_bulk_delete = Some(Box::new(f));
        self
    }

    /// Called with the rows to export.
    pub fn on_export<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[&R]) -> ActionResult + Send + 'static,
    {
        self.on_export = Some(Box::new(f));
        self
    }

    /// Adds a custom row action.
    pub fn with_action(mut self, action: RowAction<R>) -> Self {
        self.actions.push(action);
        self
    }

    /// Whether a handler for `kind` is installed.
    pub fn has(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Click => self.on_row_click.is_some(),
            ActionKind::View => self.on_view.is_some(),
            ActionKind::Edit => self.on_edit.is_some(),
            ActionKind::Delete => self.on_delete.is_some(),
            ActionKind::BulkDelete => self.on_bulk_delete.is_some(),
            ActionKind::Export => self.on_export.is_some(),
        }
    }

    /// Custom actions in insertion order.
    pub fn actions(&self) -> &[RowAction<R>] {
        &self.actions
    }

    /// Labels of every per-row action that is available, built-ins first.
    pub fn row_action_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = [ActionKind::View, ActionKind::Edit, ActionKind::Delete]
            .into_iter()
            .filter(|k| self.has(*k))
            .map(ActionKind::label)
            .collect();
        labels.extend(self.actions.iter().map(|a| a.label.as_str()));
        labels
    }

    pub(crate) fn row_handler(&mut self, kind: ActionKind) -> Option<&mut RowHandler<R>> {
        match kind {
            ActionKind::Click => self.on_row_click.as_mut(),
            ActionKind::View => self.on_view.as_mut(),
            ActionKind::Edit => self.on_edit.as_mut(),
            ActionKind::Delete => self.on_delete.as_mut(),
            ActionKind::BulkDelete | ActionKind::Export => None,
        }
    }

    pub(crate) fn bulk_handler(&mut self, kind: ActionKind) -> Option<&mut BulkHandler<R>> {
        match kind {
            ActionKind::BulkDelete => self.on_bulk_delete.as_mut(),
            ActionKind::Export => self.on_export.as_mut(),
            _ => None,
        }
    }
}

impl<R> fmt::Debug for Handlers<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_row_click", &self.on_row_click.is_some())
            .field("on_view", &self.on_view.is_some())
            .field("on_edit", &self.on_edit.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .field("on_bulk_delete", &self.on_bulk_delete.is_some())
            .field("on_export", &self.on_export.is_some())
            .field("actions", &self.actions)
            .finish()
    }
}
