//! Command implementations.

mod links;
mod pages;

pub use links::LinksCommand;
pub use pages::PagesCommand;
