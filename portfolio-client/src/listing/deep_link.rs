use url::{form_urlencoded, Url};

use super::ListPage;

/// State carried in a list page URL, parsed once per page load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLink {
    /// Item to land on, scroll to and open
    pub id: Option<i64>,
    /// Value for the page's filter control (`domain`, `category` or `problemArea`)
    pub filter: Option<String>,
}

impl DeepLink {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// Unparseable ids and empty filter values are ignored; the first
    /// occurrence of a repeated parameter wins.
    pub fn parse(query: &str, page: ListPage) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut link = DeepLink::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key == "id" {
                if link.id.is_none() {
                    link.id = value.trim().parse().ok();
                }
            } else if key == page.filter_param() && link.filter.is_none() && !value.is_empty() {
                link.filter = Some(value.into_owned());
            }
        }

        link
    }

    pub fn from_url(url: &Url, page: ListPage) -> Self {
        Self::parse(url.query().unwrap_or_default(), page)
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.filter.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id() {
        let link = DeepLink::parse("?id=42", ListPage::Products);
        assert_eq!(link.id, Some(42));
        assert_eq!(link.filter, None);
    }

    #[test]
    fn parses_page_specific_filter() {
        let link = DeepLink::parse("problemArea=Supply%20chain", ListPage::Solutions);
        assert_eq!(link.filter.as_deref(), Some("Supply chain"));

        // `domain` means nothing on the Solutions page.
        let link = DeepLink::parse("domain=Health", ListPage::Solutions);
        assert!(link.is_empty());
    }

    #[test]
    fn ignores_garbage_id() {
        let link = DeepLink::parse("id=abc&category=Web", ListPage::Repositories);
        assert_eq!(link.id, None);
        assert_eq!(link.filter.as_deref(), Some("Web"));
    }

    #[test]
    fn reads_query_from_full_url() {
        let url = Url::parse("https://example.com/Publications.html?domain=ML&id=7").unwrap();
        let link = DeepLink::from_url(&url, ListPage::Publications);
        assert_eq!(link.id, Some(7));
        assert_eq!(link.filter.as_deref(), Some("ML"));
    }

    #[test]
    fn empty_query_is_empty_link() {
        assert!(DeepLink::parse("", ListPage::Products).is_empty());
        let url = Url::parse("https://example.com/Products.html").unwrap();
        assert!(DeepLink::from_url(&url, ListPage::Products).is_empty());
    }
}
