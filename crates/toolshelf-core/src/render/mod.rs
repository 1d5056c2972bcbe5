//! Rendering backends
//!
//! A backend paints a `Page`. `HtmlRenderer` produces markup per target;
//! `HtmlDocument` keeps that markup the way the host page's regions would.

mod html;
mod document;

pub use html::HtmlRenderer;
pub use document::{HtmlDocument, Target};

use crate::view::Page;

/// Something that can paint a page
pub trait RenderBackend {
    type Output;

    fn render(&mut self, page: &Page) -> Self::Output;
}

/// Markup for every target of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Value for the root `data-theme` attribute
    pub theme: String,
    pub theme_toggle: String,
    pub favorites_toggle: String,
    pub header: String,
    pub category_list: String,
    pub tool_grid: String,
    pub loading: String,
    pub banner: String,
}
