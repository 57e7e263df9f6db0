use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Numeric entries shown before the window starts sliding.
pub const WINDOW_SIZE: u32 = 5;

const ELLIPSIS: &str = "...";

/// One entry of a pagination control: a page number or a skipped-range marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl PageItem {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageItem::Ellipsis)
    }
}

// pages serialize as bare numbers and the marker as "..." so list responses
// can be rendered without a tag lookup
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u32(*n),
            PageItem::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

impl<'de> Deserialize<'de> for PageItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u32),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) if n >= 1 => Ok(PageItem::Page(n)),
            Raw::Num(n) => Err(serde::de::Error::custom(format!("invalid page number {}", n))),
            Raw::Str(s) if s == ELLIPSIS => Ok(PageItem::Ellipsis),
            Raw::Str(s) => Err(serde::de::Error::custom(format!("invalid page item {:?}", s))),
        }
    }
}

/// Computes the page indicators for a pagination control.
///
/// Up to five consecutive page numbers are shown. With more than five pages
/// the first and last page stay visible as anchors and skipped ranges are
/// replaced by [`PageItem::Ellipsis`]:
///
/// - `current_page <= 3`: `1 2 3 4 5 … N`
/// - `current_page >= N - 2`: `1 … N-4 N-3 N-2 N-1 N`
/// - otherwise: `1 … c-1 c c+1 … N`
///
/// `total_pages == 0` yields an empty window; the caller is expected to hide
/// the control in that case. Inputs are assumed to be already clamped.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= WINDOW_SIZE {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = Vec::with_capacity(WINDOW_SIZE as usize + 2);

    if current_page <= 3 {
        items.extend((1..=WINDOW_SIZE).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((total_pages - 4..=total_pages).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current_page - 1..=current_page + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total_pages));
    }

    items
}

/// 1-based inclusive bounds of the items shown on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub start_item: u64,
    pub end_item: u64,
}

/// "Showing 11 to 20 of 25". Returns `None` when there is nothing to show.
pub fn display_range(current_page: u32, items_per_page: u32, total_items: u64) -> Option<DisplayRange> {
    if total_items == 0 || items_per_page == 0 {
        return None;
    }
    let page = current_page.max(1) as u64;
    let per_page = items_per_page as u64;
    let start_item = (page - 1) * per_page + 1;
    let end_item = (page * per_page).min(total_items);
    Some(DisplayRange { start_item, end_item })
}

/// Number of pages needed for `total_items` at `items_per_page`.
pub fn total_pages(total_items: u64, items_per_page: u32) -> u32 {
    if items_per_page == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(items_per_page as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
