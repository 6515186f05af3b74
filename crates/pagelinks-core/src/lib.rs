//! Pagination links for paged API responses.
//!
//! Given a request URL and the number of matching records, this crate works
//! out the `self`, `next`, `previous`, `first` and `last` links and the page
//! count for an offset/limit paged collection.
//!
//! Links are produced by rewriting the `offset` parameter of the original
//! request text. Every other query parameter keeps its position and encoding.
//!
//! # Features
//!
//! - `axum` - `IntoResponse` for [`PagingError`], answering with a 400

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod count;
pub mod cursor;
pub mod error;
pub mod links;
#[cfg(feature = "axum")]
pub mod response;
pub mod url;

pub use builder::{PageLinkBuilder, PageLinkFactory, PageSummary};
pub use count::{CountSource, SubqueryCount};
pub use cursor::PagingCursor;
pub use error::{PagingError, PagingResult};
pub use links::{LinkRole, LinkSet};
pub use url::RequestUrl;
