//! Effective offset and limit of a request.

use crate::error::{PagingError, PagingResult};
use crate::url::{RequestUrl, LIMIT_PARAM, OFFSET_PARAM};

/// Position of a page: the first record's index and the page size.
///
/// Values are taken from the query as-is. Negative or non-numeric input is
/// not rejected, so arithmetic on a cursor saturates instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingCursor {
    /// Zero-based index of the first record in the page.
    pub offset: i64,
    /// Maximum number of records per page.
    pub limit: i64,
    explicit_offset: bool,
}

impl PagingCursor {
    /// Read the cursor from `url`, falling back to `default_limit` when the
    /// query carries no `limit` and to offset 0 when it carries no `offset`.
    pub fn from_url(url: &RequestUrl, default_limit: u64) -> Self {
        let offset_param = url.first_param(OFFSET_PARAM);
        let limit = url
            .first_param(LIMIT_PARAM)
            .map(|p| p.integer())
            .unwrap_or_else(|| i64::try_from(default_limit).unwrap_or(i64::MAX));

        Self {
            offset: offset_param.as_ref().map_or(0, |p| p.integer()),
            limit,
            explicit_offset: offset_param.is_some(),
        }
    }

    /// Whether the request named an `offset` itself.
    pub fn has_explicit_offset(&self) -> bool {
        self.explicit_offset
    }

    /// Reject an explicit offset combined with a zero limit.
    pub fn validate(&self) -> PagingResult<()> {
        if self.explicit_offset && self.limit == 0 {
            return Err(PagingError::zero_limit());
        }
        Ok(())
    }

    /// Offset of the following page, if any record lies beyond this one.
    pub fn next_offset(&self, count: u64) -> Option<i64> {
        let next = self.offset.checked_add(self.limit)?;
        (next < count_as_i64(count)).then_some(next)
    }

    /// Offset of the preceding page, clamped to the first page.
    pub fn previous_offset(&self) -> Option<i64> {
        if self.offset <= 0 {
            return None;
        }
        Some(self.offset.saturating_sub(self.limit).max(0))
    }

    /// Offset of the page holding the record after the last full page.
    ///
    /// A zero limit has no page boundaries, so the last page is the first.
    /// The remainder is floored, taking the sign of the limit, so a negative
    /// limit moves `last` past the count.
    pub fn last_offset(&self, count: u64) -> i64 {
        let count = count_as_i64(count);
        match count.checked_rem(self.limit) {
            Some(rem) if rem != 0 && self.limit < 0 => {
                count.saturating_sub(rem.saturating_add(self.limit))
            }
            Some(rem) => count.saturating_sub(rem),
            None => 0,
        }
    }

    /// Number of pages needed to hold `count` records.
    pub fn page_count(&self, count: u64) -> u64 {
        match u64::try_from(self.limit) {
            Ok(limit) if limit > 0 => count.div_ceil(limit),
            _ => 0,
        }
    }
}

fn count_as_i64(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(href: &str) -> PagingCursor {
        PagingCursor::from_url(&RequestUrl::parse(href), 1000)
    }

    #[test]
    fn test_defaults_when_absent() {
        let c = cursor("/api/vms");
        assert_eq!(c.offset, 0);
        assert_eq!(c.limit, 1000);
        assert!(!c.has_explicit_offset());
    }

    #[test]
    fn test_explicit_values() {
        let c = cursor("/api/vms?limit=25&offset=50");
        assert_eq!(c.offset, 50);
        assert_eq!(c.limit, 25);
        assert!(c.has_explicit_offset());
    }

    #[test]
    fn test_validate_rejects_explicit_offset_with_zero_limit() {
        assert_eq!(
            cursor("/api/vms?offset=0&limit=0").validate(),
            Err(PagingError::zero_limit())
        );
        assert_eq!(
            cursor("/api/vms?offset=5&limit=0").validate(),
            Err(PagingError::zero_limit())
        );
    }

    #[test]
    fn test_validate_accepts_zero_limit_without_offset() {
        assert!(cursor("/api/vms?limit=0").validate().is_ok());
        assert!(cursor("/api/vms?offset=0&limit=1").validate().is_ok());
    }

    #[test]
    fn test_zero_default_limit_with_offset_is_rejected() {
        let c = PagingCursor::from_url(&RequestUrl::parse("/api/vms?offset=0"), 0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_last_offset_with_negative_limit_floors_remainder() {
        let c = cursor("/api/vms?limit=-3");
        assert_eq!(c.last_offset(7), 9);
        assert_eq!(c.last_offset(6), 6);
        assert_eq!(c.last_offset(0), 0);
        assert_eq!(c.page_count(7), 0);
    }

    #[test]
    fn test_offset_arithmetic() {
        let c = cursor("/api/vms?offset=2&limit=2");
        assert_eq!(c.next_offset(7), Some(4));
        assert_eq!(c.previous_offset(), Some(0));
        assert_eq!(c.last_offset(7), 6);
        assert_eq!(c.page_count(7), 4);

        let c = cursor("/api/vms?offset=6&limit=2");
        assert_eq!(c.next_offset(7), None);
    }

    #[test]
    fn test_previous_clamps_to_first_page() {
        let c = cursor("/api/vms?offset=10&limit=12");
        assert_eq!(c.previous_offset(), Some(0));
    }

    #[test]
    fn test_zero_limit_does_not_divide() {
        let c = cursor("/api/vms?limit=0");
        assert_eq!(c.last_offset(10), 0);
        assert_eq!(c.page_count(10), 0);
    }

    #[test]
    fn test_negative_values_pass_through() {
        let c = cursor("/api/vms?offset=-4&limit=2");
        assert_eq!(c.offset, -4);
        assert_eq!(c.previous_offset(), None);
        assert_eq!(c.next_offset(7), Some(-2));

        let c = cursor("/api/vms?limit=-3");
        assert_eq!(c.page_count(9), 0);
    }
}
