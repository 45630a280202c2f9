/// The static list pages of the site, one per catalog kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListPage {
    Products,
    Solutions,
    Publications,
    Repositories,
}

impl ListPage {
    /// API endpoint serving the full list, relative to the API base URL.
    pub fn api_path(self) -> &'static str {
        match self {
            ListPage::Products => "api/Products",
            ListPage::Solutions => "api/Solutions",
            ListPage::Publications => "api/Publications",
            ListPage::Repositories => "api/Repositories",
        }
    }

    /// Query parameter that pre-applies the page's filter. It is also the
    /// JSON field the filter compares against.
    pub fn filter_param(self) -> &'static str {
        match self {
            ListPage::Products | ListPage::Publications => "domain",
            ListPage::Solutions => "problemArea",
            ListPage::Repositories => "category",
        }
    }

    /// JSON fields the free-text box searches.
    pub fn search_fields(self) -> &'static [&'static str] {
        match self {
            ListPage::Products => &["title", "shortDescription", "domain"],
            ListPage::Solutions => &["title", "summary", "problemArea"],
            ListPage::Publications => &["title", "abstract", "authors", "keywords"],
            ListPage::Repositories => &["title", "description", "technicalStack"],
        }
    }
}
