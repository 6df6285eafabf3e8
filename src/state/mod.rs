//! Generator state kept between runs: the last page form and the page catalog.

mod catalog;
mod form;
mod store;

pub use catalog::*;
pub use form::*;
pub use store::*;
