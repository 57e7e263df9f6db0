use serde::{Deserialize, Serialize};

use super::window::{display_range, page_window, total_pages, DisplayRange, PageItem};

/// A user interaction with a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
    Select(PageItem),
    ItemsPerPage(u32),
}

/// The request a pagination control hands back to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    Page(u32),
    ItemsPerPage(u32),
}

/// Receiver of page-change requests, implemented by whatever owns the list.
pub trait PageChangeListener {
    fn on_page_change(&mut self, page: u32);

    /// Items-per-page selection is optional; the default ignores it.
    fn on_items_per_page_change(&mut self, _items_per_page: u32) {}
}

/// Pagination state owned by a list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl PaginationState {
    /// Builds a state, clamping `current_page` into `1..=max(total_pages, 1)`.
    pub fn new(current_page: u32, total_items: u64, items_per_page: u32) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_pages = total_pages(total_items, items_per_page);
        Self {
            current_page: current_page.clamp(1, total_pages.max(1)),
            total_pages,
            total_items,
            items_per_page,
        }
    }

    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.current_page, self.total_pages)
    }

    pub fn range(&self) -> Option<DisplayRange> {
        display_range(self.current_page, self.items_per_page, self.total_items)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Translates an action into the change it requests, or `None` when the
    /// action is a no-op for the current state.
    pub fn resolve(&self, action: PageAction) -> Option<PageChange> {
        match action {
            PageAction::Previous if self.has_previous() => Some(PageChange::Page(self.current_page - 1)),
            PageAction::Next if self.has_next() => Some(PageChange::Page(self.current_page + 1)),
            PageAction::Previous | PageAction::Next => None,
            PageAction::Select(PageItem::Ellipsis) => None,
            PageAction::Select(PageItem::Page(page)) => {
                let page = page.clamp(1, self.last_page());
                (page != self.current_page).then_some(PageChange::Page(page))
            }
            PageAction::ItemsPerPage(value) => {
                (value > 0 && value != self.items_per_page).then_some(PageChange::ItemsPerPage(value))
            }
        }
    }

    /// Notifies `listener` of the change `action` requests. The listener is
    /// called at most once; returns whether it was called.
    pub fn dispatch<L: PageChangeListener + ?Sized>(&self, action: PageAction, listener: &mut L) -> bool {
        match self.resolve(action) {
            Some(PageChange::Page(page)) => {
                listener.on_page_change(page);
                true
            }
            Some(PageChange::ItemsPerPage(value)) => {
                listener.on_items_per_page_change(value);
                true
            }
            None => false,
        }
    }

    /// Applies a change. A new page size restarts at page 1.
    pub fn apply(&mut self, change: PageChange) {
        match change {
            PageChange::Page(page) => {
                self.current_page = page.clamp(1, self.last_page());
            }
            PageChange::ItemsPerPage(value) => {
                *self = Self::new(1, self.total_items, value);
            }
        }
    }

    /// Updates the item count after the underlying list changed, keeping the
    /// current page valid.
    pub fn set_total_items(&mut self, total_items: u64) {
        *self = Self::new(self.current_page, total_items, self.items_per_page);
    }
}
