//! Dispatching row and bulk actions to the caller's handlers.

use super::handlers::ActionKind;
use super::model::{Model, Status};
use super::value::Record;
use crate::error::{failure_message, ActionResult};

impl<R: Record> Model<R> {
    /// Calls the row-click handler with the row at `pos` on the current page.
    ///
    /// Returns `None` when nothing was called: no handler, no such row, or the
    /// grid is loading.
    pub fn click_row(&mut self, pos: usize) -> Option<ActionResult> {
        self.dispatch_row(ActionKind::Click, pos)
    }

    /// Calls the view handler with the row at `pos`.
    pub fn view_row(&mut self, pos: usize) -> Option<ActionResult> {
        self.dispatch_row(ActionKind::View, pos)
    }

    /// Calls the edit handler with the row at `pos`.
    pub fn edit_row(&mut self, pos: usize) -> Option<ActionResult> {
        self.dispatch_row(ActionKind::Edit, pos)
    }

    /// Calls the delete handler with the row at `pos`.
    pub fn delete_row(&mut self, pos: usize) -> Option<ActionResult> {
        self.dispatch_row(ActionKind::Delete, pos)
    }

    /// Runs custom action number `action` on the row at `pos`.
    pub fn run_action(&mut self, action: usize, pos: usize) -> Option<ActionResult> {
        if self.config.loading {
            return None;
        }
        let index = *self.page_indices().get(pos)?;
        let action = self.handlers.actions.get_mut(action)?;
        let label = action.label.clone();
        let result = action.call(&self.rows[index]);
        log::debug!("{} on row {}", label, self.row_id(index));
        self.settle(&label, &result);
        Some(result)
    }

    fn dispatch_row(&mut self, kind: ActionKind, pos: usize) -> Option<ActionResult> {
        if self.config.loading {
            return None;
        }
        let index = *self.page_indices().get(pos)?;
        let handler = self.handlers.row_handler(kind)?;
        let result = handler(&self.rows[index]);
        log::debug!("{} on row {}", kind.label(), self.row_id(index));
        self.settle(kind.label(), &result);
        Some(result)
    }

    /// Calls the bulk-delete handler once with every selected row, in sort
    /// order. The selection is cleared when the handler succeeds.
    pub fn bulk_delete(&mut self) -> Option<ActionResult> {
        if self.config.loading || !self.config.selectable || self.selection.is_empty() {
            return None;
        }
        let indices = self.selected_indices();
        let handler = self.handlers.bulk_handler(ActionKind::BulkDelete)?;
        let rows: Vec<&R> = indices.iter().map(|&i| &self.rows[i]).collect();
        log::info!("bulk delete requested for {} row(s)", rows.len());
        let result = handler(rows.as_slice());

        if result.is_ok() {
            self.selection.clear();
        }
        self.settle(ActionKind::BulkDelete.label(), &result);
        Some(result)
    }

    /// Calls the export handler once: with the selected rows if any are
    /// selected, otherwise with the rows of the current page.
    pub fn export(&mut self) -> Option<ActionResult> {
        if self.config.loading || !self.config.exportable {
            return None;
        }
        let indices = if self.selection.is_empty() {
            self.page_indices().to_vec()
        } else {
            self.selected_indices()
        };
        if indices.is_empty() {
            return None;
        }
        let handler = self.handlers.bulk_handler(ActionKind::Export)?;
        let rows: Vec<&R> = indices.iter().map(|&i| &self.rows[i]).collect();
        log::info!("export requested for {} row(s)", rows.len());
        let result = handler(rows.as_slice());

        if result.is_ok() {
            self.status = Some(Status::Info(format!(
                "Exported {} row{}",
                indices.len(),
                if indices.len() == 1 { "" } else { "s" }
            )));
            self.update_keybindings();
        } else {
            self.settle(ActionKind::Export.label(), &result);
        }
        Some(result)
    }

    // Success clears the status line; failure replaces it. State is kept
    // either way.
    fn settle(&mut self, label: &str, result: &ActionResult) {
        match result {
            Ok(()) => self.status = None,
            Err(err) => {
                let message = failure_message(label, err);
                log::warn!("{}", message);
                self.status = Some(Status::Error(message));
            }
        }
        self.update_keybindings();
    }
}
