//! Request target splitting and textual offset substitution.
//!
//! Links are produced by editing the original request text rather than by
//! re-serializing a parsed URL, so parameter order, duplicates and percent
//! encoding survive untouched.

use std::ops::Range;

/// Name of the query parameter carrying the page offset.
pub const OFFSET_PARAM: &str = "offset";

/// Name of the query parameter carrying the page size.
pub const LIMIT_PARAM: &str = "limit";

/// A `key=value` token from a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam<'a> {
    /// Text before the first `=`.
    pub key: &'a str,
    /// Text after the first `=`, possibly empty.
    pub value: &'a str,
    /// Byte range of `value` within the query string.
    value_span: Range<usize>,
}

impl QueryParam<'_> {
    /// Value parsed as a lenient integer, see [`parse_integer`].
    ///
    /// A value with further `=` signs is read from its last non-empty
    /// segment, so `limit=5=2` reads as `2`.
    pub fn integer(&self) -> i64 {
        let last = self.value.rsplit('=').find(|s| !s.is_empty()).unwrap_or("");
        parse_integer(last)
    }
}

/// A request target split around its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    /// Everything before `?`: scheme, host and path.
    base: String,
    /// Text between `?` and `#`; `None` when the target has no `?`.
    query: Option<String>,
    /// Text after `#`, without the `#`.
    fragment: Option<String>,
}

impl RequestUrl {
    /// Split a request target. Never fails; any string is a valid target.
    pub fn parse(href: &str) -> Self {
        let (rest, fragment) = match href.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (href, None),
        };
        let (base, query) = match rest.split_once('?') {
            Some((base, query)) => (base, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            base: base.to_string(),
            query,
            fragment,
        }
    }

    /// Scheme, host and path of the target.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Raw query string, empty when absent.
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// `key=value` tokens in request order. Tokens without `=` are skipped.
    pub fn params(&self) -> impl Iterator<Item = QueryParam<'_>> {
        let query = self.query();
        let mut start = 0;
        query.split('&').filter_map(move |token| {
            let token_start = start;
            start += token.len() + 1;

            let (key, value) = token.split_once('=')?;
            let value_start = token_start + key.len() + 1;
            Some(QueryParam {
                key,
                value,
                value_span: value_start..value_start + value.len(),
            })
        })
    }

    /// First token whose key is exactly `key`.
    pub fn first_param(&self, key: &str) -> Option<QueryParam<'_>> {
        self.params().find(|p| p.key == key)
    }

    /// Render the target with its page offset set to `offset`.
    ///
    /// An existing `offset` token has its value replaced in place; otherwise
    /// `offset=<n>` is appended after the existing parameters.
    pub fn with_offset(&self, offset: i64) -> String {
        let query = self.query();
        let new_query = match self.first_param(OFFSET_PARAM) {
            Some(param) => {
                let span = param.value_span;
                format!("{}{}{}", &query[..span.start], offset, &query[span.end..])
            }
            None if query.is_empty() => format!("{OFFSET_PARAM}={offset}"),
            None => format!("{query}&{OFFSET_PARAM}={offset}"),
        };

        let mut href = String::with_capacity(self.base.len() + new_query.len() + 1);
        href.push_str(&self.base);
        href.push('?');
        href.push_str(&new_query);
        if let Some(fragment) = &self.fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

/// Parse the leading integer of `s`.
///
/// Accepts optional leading whitespace and sign followed by ASCII digits and
/// ignores anything after them. Text without leading digits is `0`, and values
/// beyond `i64` saturate. No range checks are applied.
pub fn parse_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}
