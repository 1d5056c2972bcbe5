//! View-model
//!
//! What to show, as a typed tree, independent of how it is painted. The
//! `render` module turns a `Page` into markup.

mod node;
mod page;

pub use node::{Element, Node};
pub use page::{build_page, Page};
