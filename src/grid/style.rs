//! Styles for the grid.
//!
//! Defaults use `AdaptiveColor` so the grid reads on light and dark
//! terminals alike.

use lipgloss_extras::prelude::*;

/// Marker for truncated cells.
pub const ELLIPSIS: &str = "…";

/// Checkbox glyphs: unchecked, checked, partially checked (header only).
pub const CHECKBOX: [&str; 3] = ["[ ]", "[x]", "[-]"];

/// Visual styles for every part of the grid.
#[derive(Debug, Clone)]
pub struct GridStyles {
    /// Heading.
    pub title: Style,
    /// Line under the heading.
    pub description: Style,
    /// Search prompt.
    pub search_prompt: Style,
    /// Header labels.
    pub header: Style,
    /// Header label of the column under the column cursor.
    pub header_active: Style,
    /// Body cells.
    pub cell: Style,
    /// The whole cursor row.
    pub cursor_row: Style,
    /// Checkbox of a selected row.
    pub selected: Style,
    /// Action labels in the actions column.
    pub action: Style,
    /// Skeleton placeholder bars.
    pub skeleton: Style,
    /// Spinner frame.
    pub spinner: Style,
    /// The empty message.
    pub empty: Style,
    /// The error message shown in place of the table.
    pub error: Style,
    /// Status line after a failed action.
    pub status_error: Style,
    /// Status line after a successful bulk action.
    pub status_info: Style,
    /// The `Delete (N)` button.
    pub bulk_delete: Style,
    /// Pagination footer.
    pub pagination: Style,
    /// Help line.
    pub help: Style,
}

impl Default for GridStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let danger = Color::from("203");

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            description: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            header: Style::new().bold(true),
            header_active: Style::new().bold(true).underline(true),
            cell: Style::new(),
            cursor_row: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            selected: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            action: Style::new().foreground(subdued.clone()),
            skeleton: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            spinner: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            empty: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            error: Style::new().foreground(danger.clone()),
            status_error: Style::new().foreground(danger.clone()),
            status_info: Style::new().foreground(subdued.clone()),
            bulk_delete: Style::new().foreground(danger).bold(true),
            pagination: Style::new().foreground(subdued),
            help: Style::new(),
        }
    }
}
