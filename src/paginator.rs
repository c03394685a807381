//! Pagination state and the pagination footer text.
//!
//! The paginator does not hold rows. It tracks the current page against a
//! total item count and hands out slice bounds, so callers slice their own
//! data:
//!
//! ```rust
//! use bubbletea_datagrid::paginator::Model;
//!
//! let rows: Vec<u32> = (1..=25).collect();
//! let mut paginator = Model::new().with_per_page(10).with_total_items(rows.len());
//! paginator.last_page();
//!
//! let (start, end) = paginator.get_slice_bounds(rows.len());
//! assert_eq!(&rows[start..end], &[21, 22, 23, 24, 25]);
//! assert_eq!(paginator.page_label(), "Page 3 of 3");
//! assert_eq!(paginator.summary(rows.len()), "Showing 21 to 25 of 25 results");
//! ```
//!
//! Pages are 0-indexed internally and 1-indexed in every rendered string.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};

/// How [`Model::view`] draws the page indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Page numbers, e.g. `"1/5"`.
    #[default]
    Arabic,
    /// One dot per page, e.g. `"• ○ ○ ○ ○"`.
    Dots,
}

/// Key bindings for page navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'.
    pub first_page: key::Binding,
    /// Last page. Default keys: End, 'G'.
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// Pagination state.
///
/// `total_pages` is always at least 1 and `page` always lies in
/// `0..total_pages`: every setter that can shrink the page count clamps the
/// current page onto the last valid one.
#[derive(Debug, Clone)]
pub struct Model {
    /// Indicator style used by [`Model::view`].
    pub paginator_type: Type,
    /// Current page, 0-indexed.
    pub page: usize,
    /// Items per page, at least 1.
    pub per_page: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Dot for the current page in dots mode.
    pub active_dot: String,
    /// Dot for other pages in dots mode.
    pub inactive_dot: String,
    /// Format for Arabic mode; the two `%d` are replaced by page and total.
    pub arabic_format: String,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 0,
            per_page: 1,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator on page 0 with one item per page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item count and recomputes the page count (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the page size (builder pattern). Values below 1 become 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the page size. Values below 1 become 1.
    ///
    /// The page count is not recomputed here; call
    /// [`set_total_items`](Self::set_total_items) afterwards.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Sets the page count directly, clamping the current page.
    pub fn set_total_pages(&mut self, pages: usize) {
        self.total_pages = pages.max(1);
        self.clamp_page();
    }

    /// Recomputes the page count from an item count, clamping the current page.
    ///
    /// Zero items still make one (empty) page.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = if items == 0 {
            1
        } else {
            items.div_ceil(self.per_page)
        };
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end.saturating_sub(start)
    }

    /// Start (inclusive) and end (exclusive) indices of the current page.
    ///
    /// Both bounds are clamped to `length`, so the result can always be used
    /// to slice.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Moves to the previous page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Moves to the next page; no-op on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) {
        self.page = 0;
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) {
        self.page = self.total_pages.saturating_sub(1);
    }

    /// Moves to a 1-indexed page number, clamped to the valid range.
    pub fn go_to_page(&mut self, number: usize) {
        self.page = number.saturating_sub(1);
        self.clamp_page();
    }

    /// True on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// True on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages.saturating_sub(1)
    }

    /// `"Page P of N"`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages)
    }

    /// `"Showing X to Y of Z results"` for the current page of `total_items`.
    pub fn summary(&self, total_items: usize) -> String {
        let (start, end) = self.get_slice_bounds(total_items);
        let first = if end > start { start + 1 } else { 0 };
        format!("Showing {} to {} of {} results", first, end, total_items)
    }

    /// Handles page navigation keys.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
    }

    /// Applies a key press; returns true if it changed pages or matched a binding.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> bool {
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.first_page();
        } else if self.keymap.last_page.matches(key_msg) {
            self.last_page();
        } else {
            return false;
        }
        true
    }

    /// Renders the page indicator in the configured style.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &(self.page + 1).to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        (0..self.total_pages)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
