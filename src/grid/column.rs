//! Column definitions.

use super::value::{CellValue, Record};
use std::fmt;
use std::sync::Arc;

/// Custom cell renderer: receives the resolved value and the whole row.
pub type RenderFn<R> = Arc<dyn Fn(&CellValue, &R) -> String + Send + Sync>;

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad both sides.
    Center,
    /// Pad on the left; the usual choice for amounts.
    Right,
}

/// One column of the grid.
///
/// ```rust
/// use bubbletea_datagrid::grid::{Align, Column};
/// use serde_json::Value;
///
/// let amount: Column<Value> = Column::new("total", "Total")
///     .sortable()
///     .with_align(Align::Right)
///     .with_render(|v, _row| format!("${}", v));
/// assert!(amount.sortable);
/// ```
pub struct Column<R> {
    /// Key path into each row, e.g. `"contactInfo.email"`.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether the header cycles the sort.
    pub sortable: bool,
    /// Whether the search term is matched against this column.
    pub filterable: bool,
    /// Fixed width in cells. `None` sizes to the widest visible value.
    pub width: Option<usize>,
    /// Cell alignment.
    pub align: Align,
    render: Option<RenderFn<R>>,
}

impl<R> Column<R> {
    /// Creates a filterable, non-sortable, left-aligned column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            filterable: true,
            width: None,
            align: Align::Left,
            render: None,
        }
    }

    /// Makes the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets whether search looks at this column.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Fixes the column width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets cell alignment.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Installs a custom renderer.
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &R) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Whether a custom renderer is installed.
    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }
}

impl<R: Record> Column<R> {
    /// The raw value of this column for `row`.
    pub fn value(&self, row: &R) -> CellValue {
        row.field(&self.key)
    }

    /// The cell text: the renderer's output, or the plain value.
    pub fn cell_text(&self, row: &R) -> String {
        let value = self.value(row);
        match &self.render {
            Some(render) => render(&value, row),
            None => value.to_string(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            width: self.width,
            align: self.align,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("render", &self.render.is_some())
            .finish()
    }
}
