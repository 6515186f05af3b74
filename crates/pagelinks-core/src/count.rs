//! Record count providers.

use serde::{Deserialize, Serialize};

/// Source of the record totals a page of results is drawn from.
///
/// Raw integers implement this trait directly, so call sites without a
/// narrower subquery can pass the total as-is.
pub trait CountSource {
    /// Number of all matching records.
    fn count(&self) -> u64;

    /// Narrower count, e.g. after additional filtering. Takes precedence over
    /// [`count`](Self::count) for paging when present.
    fn subquery_count(&self) -> Option<u64> {
        None
    }

    /// Count used for `last`, `next` and page count calculations.
    fn paging_count(&self) -> u64 {
        self.subquery_count().unwrap_or_else(|| self.count())
    }
}

impl CountSource for u64 {
    fn count(&self) -> u64 {
        *self
    }
}

impl CountSource for u32 {
    fn count(&self) -> u64 {
        u64::from(*self)
    }
}

impl CountSource for usize {
    fn count(&self) -> u64 {
        *self as u64
    }
}

impl<T: CountSource + ?Sized> CountSource for &T {
    fn count(&self) -> u64 {
        (**self).count()
    }

    fn subquery_count(&self) -> Option<u64> {
        (**self).subquery_count()
    }
}

impl<T: CountSource + ?Sized> CountSource for Box<T> {
    fn count(&self) -> u64 {
        (**self).count()
    }

    fn subquery_count(&self) -> Option<u64> {
        (**self).subquery_count()
    }
}

/// Fixed totals for a collection query and an optional narrower subquery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubqueryCount {
    /// Number of all records in the collection.
    pub count: u64,
    /// Number of records left after filtering, if a filter was applied.
    pub subquery_count: Option<u64>,
}

impl SubqueryCount {
    /// Totals without a subquery.
    pub fn new(count: u64) -> Self {
        Self {
            count,
            subquery_count: None,
        }
    }

    /// Totals where a filter narrowed the collection to `subquery_count`.
    pub fn with_subquery(count: u64, subquery_count: u64) -> Self {
        Self {
            count,
            subquery_count: Some(subquery_count),
        }
    }
}

impl CountSource for SubqueryCount {
    fn count(&self) -> u64 {
        self.count
    }

    fn subquery_count(&self) -> Option<u64> {
        self.subquery_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_integers_have_no_subquery() {
        assert_eq!(7u64.paging_count(), 7);
        assert_eq!(7u32.subquery_count(), None);
        assert_eq!(7usize.count(), 7);
    }

    #[test]
    fn test_subquery_takes_precedence() {
        let counts = SubqueryCount::with_subquery(100, 12);
        assert_eq!(counts.count(), 100);
        assert_eq!(counts.paging_count(), 12);

        let counts = SubqueryCount::new(100);
        assert_eq!(counts.paging_count(), 100);
    }

    #[test]
    fn test_zero_subquery_count_is_still_preferred() {
        let counts = SubqueryCount::with_subquery(100, 0);
        assert_eq!(counts.paging_count(), 0);
    }

    #[test]
    fn test_boxed_and_borrowed_sources_delegate() {
        let counts = SubqueryCount::with_subquery(9, 4);
        let boxed: Box<dyn CountSource> = Box::new(counts);
        assert_eq!(boxed.paging_count(), 4);
        assert_eq!((&counts).subquery_count(), Some(4));
    }
}
