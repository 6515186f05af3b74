//! Page link construction for a single request.

use crate::count::CountSource;
use crate::cursor::PagingCursor;
use crate::error::PagingResult;
use crate::links::LinkSet;
use crate::url::RequestUrl;
use once_cell::unsync::OnceCell;
use pagelinks_common_config::PagelinksConfig;
use serde::Serialize;
use tracing::{debug, warn};

/// Builds navigation links and the page count for one paged request.
///
/// Built once per request and discarded. The record counts, the `self` link
/// and the link set are computed on first use and cached, so each
/// [`CountSource`] method runs at most once per builder.
///
/// # Example
/// ```
/// use pagelinks_core::{LinkRole, PageLinkBuilder};
///
/// let builder = PageLinkBuilder::new("/api/vms?offset=2&limit=2", 7u64, 1000).unwrap();
/// let links = builder.links();
///
/// assert_eq!(links.get(LinkRole::Next), Some("/api/vms?offset=4&limit=2"));
/// assert_eq!(links.get(LinkRole::Previous), Some("/api/vms?offset=0&limit=2"));
/// assert_eq!(builder.page_count(), 4);
/// ```
#[derive(Debug)]
pub struct PageLinkBuilder<C> {
    url: RequestUrl,
    counts: C,
    cursor: PagingCursor,
    totals: OnceCell<(u64, Option<u64>)>,
    self_href: OnceCell<String>,
    links: OnceCell<LinkSet>,
}

impl<C: CountSource> PageLinkBuilder<C> {
    /// Create a builder for `href`.
    ///
    /// `default_page_limit` is used when the query carries no `limit`. Fails
    /// with [`PagingError::InvalidPagingRequest`](crate::PagingError) when the
    /// query names an `offset` and the effective limit is zero.
    pub fn new(href: &str, counts: C, default_page_limit: u64) -> PagingResult<Self> {
        let url = RequestUrl::parse(href);
        let cursor = PagingCursor::from_url(&url, default_page_limit);

        if let Err(err) = cursor.validate() {
            warn!(href, limit = cursor.limit, "Rejected paging request: {err}");
            return Err(err);
        }

        debug!(
            href,
            offset = cursor.offset,
            limit = cursor.limit,
            explicit_offset = cursor.has_explicit_offset(),
            "Derived paging cursor"
        );

        Ok(Self {
            url,
            counts,
            cursor,
            totals: OnceCell::new(),
            self_href: OnceCell::new(),
            links: OnceCell::new(),
        })
    }

    /// Effective offset and limit of the request.
    pub fn cursor(&self) -> PagingCursor {
        self.cursor
    }

    /// The count source this builder pages over.
    pub fn counts(&self) -> &C {
        &self.counts
    }

    /// Subquery count when present, otherwise the total count.
    pub fn paging_count(&self) -> u64 {
        let (count, subquery_count) = self.totals();
        subquery_count.unwrap_or(count)
    }

    /// Link to the requested page.
    pub fn self_href(&self) -> &str {
        self.self_href.get_or_init(|| self.format_href(self.cursor.offset))
    }

    /// Navigation links that apply to the requested page.
    pub fn links(&self) -> &LinkSet {
        self.links.get_or_init(|| {
            let count = self.paging_count();
            let first = self.format_href(0);

            LinkSet {
                current: self.self_href().to_string(),
                next: self.cursor.next_offset(count).map(|o| self.format_href(o)),
                previous: self.cursor.previous_offset().map(|o| match o {
                    0 => first.clone(),
                    o => self.format_href(o),
                }),
                last: self.format_href(self.cursor.last_offset(count)),
                first,
            }
        })
    }

    /// Number of pages needed for the paging count; `0` for no records.
    pub fn page_count(&self) -> u64 {
        self.cursor.page_count(self.paging_count())
    }

    /// Totals, page count and links, ready to embed in a collection response.
    pub fn summary(&self) -> PageSummary {
        let (count, subquery_count) = self.totals();
        PageSummary {
            count,
            subquery_count,
            pages: self.page_count(),
            links: self.links().clone(),
        }
    }

    fn totals(&self) -> (u64, Option<u64>) {
        *self
            .totals
            .get_or_init(|| (self.counts.count(), self.counts.subquery_count()))
    }

    fn format_href(&self, offset: i64) -> String {
        self.url.with_offset(offset)
    }
}

/// Paging fields of a collection response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Number of all records in the collection.
    pub count: u64,
    /// Number of records matching the request's filter, when one applied.
    #[serde(rename = "subcount", skip_serializing_if = "Option::is_none")]
    pub subquery_count: Option<u64>,
    /// Number of pages.
    pub pages: u64,
    /// Navigation links.
    pub links: LinkSet,
}

/// Creates builders with a configured default page limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLinkFactory {
    default_page_limit: u64,
}

impl PageLinkFactory {
    /// Factory using `default_page_limit` for requests without a `limit`.
    pub fn new(default_page_limit: u64) -> Self {
        Self { default_page_limit }
    }

    /// Factory using the configured `api.max_results_per_page`.
    pub fn from_config(config: &PagelinksConfig) -> Self {
        Self::new(config.default_page_limit())
    }

    /// Page size applied when a request carries no `limit`.
    pub fn default_page_limit(&self) -> u64 {
        self.default_page_limit
    }

    /// Create a builder for `href` paging over `counts`.
    pub fn builder<C: CountSource>(
        &self,
        href: &str,
        counts: C,
    ) -> PagingResult<PageLinkBuilder<C>> {
        PageLinkBuilder::new(href, counts, self.default_page_limit)
    }
}

impl Default for PageLinkFactory {
    fn default() -> Self {
        Self::from_config(&PagelinksConfig::default())
    }
}
