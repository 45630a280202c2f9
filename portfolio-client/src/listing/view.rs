use std::cmp::Ordering;

use serde_json::Value;

use super::{DeepLink, ListPage};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Reads an item's id from `id`, falling back to `Id`.
///
/// Both numbers and numeric strings are accepted.
pub fn item_id(item: &Value) -> Option<i64> {
    let raw = item.get("id").or_else(|| item.get("Id"))?;
    match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text_field<'a>(item: &'a Value, field: &str) -> Option<&'a str> {
    item.get(field).and_then(Value::as_str)
}

fn field_contains(item: &Value, field: &str, needle: &str) -> bool {
    match item.get(field) {
        Some(Value::String(s)) => s.to_lowercase().contains(needle),
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .any(|s| s.to_lowercase().contains(needle)),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl SortOrder {
    fn compare(self, a: &Value, b: &Value) -> Ordering {
        fn created(item: &Value) -> &str {
            text_field(item, "createdAt").unwrap_or_default()
        }
        fn title(item: &Value) -> String {
            text_field(item, "title").unwrap_or_default().to_lowercase()
        }

        // RFC 3339 timestamps from the API sort correctly as strings.
        match self {
            SortOrder::Newest => created(b).cmp(created(a)),
            SortOrder::Oldest => created(a).cmp(created(b)),
            SortOrder::TitleAsc => title(a).cmp(&title(b)),
            SortOrder::TitleDesc => title(b).cmp(&title(a)),
        }
    }
}

/// What `apply_deep_link` did with a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeepLinkOutcome {
    NoLink,
    AlreadyHandled,
    /// The target is on this page; it opens after the next render.
    Located { page: usize },
    /// No item has the requested id. The view stays on page 1.
    NotFound,
    FilterApplied,
}

/// The page-side effects of landing on a deep-linked item.
pub trait DetailOpener {
    fn scroll_into_view(&mut self, id: i64) -> anyhow::Result<()>;
    fn open_details(&mut self, id: i64) -> anyhow::Result<()>;
}

/// In-memory state of a list page: the full collection plus the filter,
/// search, sort and pagination applied on top of it.
#[derive(Debug, Clone)]
pub struct ListView {
    page: ListPage,
    items: Vec<Value>,
    filter: Option<String>,
    search: String,
    sort: SortOrder,
    current_page: usize,
    page_size: usize,
    pending_target: Option<i64>,
    deep_link_handled: bool,
}

impl ListView {
    pub fn new(page: ListPage, items: Vec<Value>) -> Self {
        Self {
            page,
            items,
            filter: None,
            search: String::new(),
            sort: SortOrder::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            pending_target: None,
            deep_link_handled: false,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn deep_link_handled(&self) -> bool {
        self.deep_link_handled
    }

    fn matches(&self, item: &Value) -> bool {
        if let Some(filter) = &self.filter {
            if text_field(item, self.page.filter_param()) != Some(filter.as_str()) {
                return false;
            }
        }

        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || self
                .page
                .search_fields()
                .iter()
                .any(|field| field_contains(item, field, &needle))
    }

    /// Items passing the filter and search, in sort order.
    pub fn filtered(&self) -> Vec<&Value> {
        let mut items: Vec<&Value> = self.items.iter().filter(|i| self.matches(i)).collect();
        items.sort_by(|a, b| self.sort.compare(a, b));
        items
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size).max(1)
    }

    pub fn page_items(&self) -> Vec<&Value> {
        self.filtered()
            .into_iter()
            .skip((self.current_page - 1) * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Moves to `page`, clamped to the available range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter.filter(|f| !f.is_empty());
        self.current_page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.current_page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.current_page = 1;
    }

    /// Applies a parsed link at most once per view. An id wins over a
    /// filter when both are present.
    pub fn apply_deep_link(&mut self, link: &DeepLink) -> DeepLinkOutcome {
        if self.deep_link_handled {
            return DeepLinkOutcome::AlreadyHandled;
        }
        if link.is_empty() {
            return DeepLinkOutcome::NoLink;
        }
        self.deep_link_handled = true;

        if let Some(id) = link.id {
            let position = self
                .filtered()
                .iter()
                .position(|item| item_id(item) == Some(id));

            return match position {
                Some(idx) => {
                    self.current_page = idx / self.page_size + 1;
                    self.pending_target = Some(id);
                    DeepLinkOutcome::Located {
                        page: self.current_page,
                    }
                }
                None => {
                    tracing::debug!(id, "Deep-linked item not found");
                    self.current_page = 1;
                    DeepLinkOutcome::NotFound
                }
            };
        }

        self.set_filter(link.filter.clone());
        DeepLinkOutcome::FilterApplied
    }

    /// Runs once the current page has been drawn. Scrolls to and opens a
    /// located deep-link target, then forgets it.
    pub fn after_render(&mut self, opener: &mut dyn DetailOpener) {
        let Some(id) = self.pending_target.take() else {
            return;
        };

        let on_page = self.page_items().iter().any(|item| item_id(item) == Some(id));
        if !on_page {
            tracing::debug!(id, page = self.current_page, "Deep-link target not rendered");
            return;
        }

        if let Err(e) = opener.scroll_into_view(id) {
            tracing::debug!(id, "Failed to scroll to item: {:?}", e);
        }
        if let Err(e) = opener.open_details(id) {
            tracing::debug!(id, "Failed to open details: {:?}", e);
        }
    }
}
