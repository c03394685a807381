//! View rendering for the grid.

use super::column::{Align, Column};
use super::handlers::ActionKind;
use super::model::{Model, Status};
use super::style::{CHECKBOX, ELLIPSIS};
use super::value::Record;
use lipgloss_extras::lipgloss;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const MAX_AUTO_WIDTH: usize = 40;
const SKELETON_ROWS: usize = 5;
const GAP: &str = "  ";

impl<R: Record> Model<R> {
    /// Renders the grid.
    pub fn view(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if let Some(title) = &self.config.title {
            sections.push(self.styles.title.render(title));
        }
        if let Some(description) = &self.config.description {
            sections.push(self.styles.description.render(description));
        }

        if self.config.loading {
            sections.push(self.view_loading());
            return sections.join("\n");
        }

        if self.config.searchable {
            sections.push(self.search_input.view());
        }
        if let Some(toolbar) = self.view_toolbar() {
            sections.push(toolbar);
        }

        if let Some(error) = &self.error {
            sections.push(self.styles.error.render(error));
        } else {
            sections.push(self.view_table());
            if self.config.show_pagination && !self.visible.is_empty() {
                sections.push(self.view_pagination());
            }
        }

        if let Some(status) = &self.status {
            let style = match status {
                Status::Error(_) => &self.styles.status_error,
                Status::Info(_) => &self.styles.status_info,
            };
            sections.push(style.render(status.text()));
        }

        if self.config.show_help {
            let help = self.help.view(self);
            if !help.is_empty() {
                sections.push(self.styles.help.render(&help));
            }
        }

        sections.join("\n")
    }

    fn view_loading(&self) -> String {
        let mut lines = vec![format!("{} Loading...", self.spinner.view())];
        let rows = self.config.page_size.min(SKELETON_ROWS);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.width.unwrap_or_else(|| c.label.width().max(8)))
            .collect();
        for _ in 0..rows {
            let bars: Vec<String> = widths.iter().map(|&w| "░".repeat(w)).collect();
            lines.push(self.styles.skeleton.render(&bars.join(GAP)));
        }
        lines.join("\n")
    }

    // Selection count and bulk actions; None when there is nothing to show.
    fn view_toolbar(&self) -> Option<String> {
        let selected = self.selection.len();
        let mut parts = Vec::new();
        if self.config.selectable && selected > 0 {
            parts.push(format!("{} selected", selected));
            if self.handlers.has(ActionKind::BulkDelete) {
                parts.push(
                    self.styles
                        .bulk_delete
                        .render(&format!("Delete ({})", selected)),
                );
            }
        }
        if self.config.exportable && self.handlers.has(ActionKind::Export) {
            parts.push(self.styles.action.render("Export"));
        }
        (!parts.is_empty()).then(|| parts.join(GAP))
    }

    fn view_table(&self) -> String {
        let page = self.page_indices();
        let texts: Vec<Vec<String>> = page
            .iter()
            .map(|&i| {
                self.columns
                    .iter()
                    .map(|c| c.cell_text(&self.rows[i]))
                    .collect()
            })
            .collect();
        let labels: Vec<String> = self.columns.iter().map(|c| self.header_label(c)).collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(col, c)| {
                c.width.unwrap_or_else(|| {
                    texts
                        .iter()
                        .map(|row| lipgloss::width_visible(&row[col]))
                        .chain(std::iter::once(labels[col].width()))
                        .max()
                        .unwrap_or(0)
                        .min(MAX_AUTO_WIDTH)
                })
            })
            .collect();
        let actions = self.handlers.row_action_labels();

        let mut lines = vec![self.view_header(&labels, &widths, !actions.is_empty())];

        if page.is_empty() {
            lines.push(self.styles.empty.render(&self.config.empty_message));
            return lines.join("\n");
        }

        for (pos, (&index, cells)) in page.iter().zip(texts.iter()).enumerate() {
            let is_cursor = self.focus && pos == self.cursor;
            let mut line = String::from(if is_cursor { "> " } else { "  " });
            if self.config.selectable {
                if self.is_selected(index) {
                    line.push_str(&self.styles.selected.render(CHECKBOX[1]));
                } else {
                    line.push_str(CHECKBOX[0]);
                }
                line.push(' ');
            }
            let cells: Vec<String> = cells
                .iter()
                .zip(self.columns.iter())
                .zip(widths.iter())
                .map(|((text, col), &w)| fit(text, w, col.align))
                .collect();
            let body = cells.join(GAP);
            if is_cursor {
                line.push_str(&self.styles.cursor_row.render(&body));
            } else {
                line.push_str(&self.styles.cell.render(&body));
            }
            if !actions.is_empty() {
                line.push_str(GAP);
                line.push_str(&self.styles.action.render(&actions.join(" · ")));
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn header_label(&self, column: &Column<R>) -> String {
        match &self.sort {
            Some(sort) if sort.key == column.key => {
                format!("{} {}", column.label, sort.direction.indicator())
            }
            _ => column.label.clone(),
        }
    }

    fn view_header(&self, labels: &[String], widths: &[usize], actions: bool) -> String {
        let mut line = String::from("  ");
        if self.config.selectable {
            let scope = self.select_all_scope_ids();
            let checkbox = if self.selection.contains_all(&scope) {
                CHECKBOX[1]
            } else if scope.iter().any(|id| self.selection.contains(id)) {
                CHECKBOX[2]
            } else {
                CHECKBOX[0]
            };
            line.push_str(checkbox);
            line.push(' ');
        }
        let cells: Vec<String> = labels
            .iter()
            .zip(self.columns.iter())
            .zip(widths.iter())
            .enumerate()
            .map(|(i, ((label, col), &w))| {
                let text = fit(label, w, col.align);
                if self.focus && i == self.column_cursor {
                    self.styles.header_active.render(&text)
                } else {
                    self.styles.header.render(&text)
                }
            })
            .collect();
        line.push_str(&cells.join(GAP));
        if actions {
            line.push_str(GAP);
            line.push_str(&self.styles.header.render("Actions"));
        }
        line
    }

    fn view_pagination(&self) -> String {
        self.styles
            .pagination
            .render(&format!("{}{}{}", self.summary(), GAP, self.page_label()))
    }
}

// Pads or truncates to exactly `width` cells. Styled text that has to be
// truncated loses its styling.
pub(super) fn fit(text: &str, width: usize, align: Align) -> String {
    let visible = lipgloss::width_visible(text);
    if visible > width {
        return truncate(&lipgloss::strip_ansi(text), width);
    }
    let pad = width - visible;
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(pad)),
        Align::Right => format!("{}{}", " ".repeat(pad), text),
        Align::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let budget = width - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let w = g.width();
        if used + w > budget {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push_str(ELLIPSIS);
    used += ELLIPSIS.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
