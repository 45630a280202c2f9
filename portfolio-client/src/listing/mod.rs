mod deep_link;
mod page;
mod view;

pub use deep_link::DeepLink;
pub use page::ListPage;
pub use view::{item_id, DeepLinkOutcome, DetailOpener, ListView, SortOrder};
