//! The load, filter and submit machinery every content page is built from.

pub use facet::*;
pub use form::*;
pub use load::*;
pub use modal::*;

mod facet;
mod form;
mod load;
mod modal;
