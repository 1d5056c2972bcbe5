//! Core data types
//!
//! This module contains the shared types used across stores, filtering and rendering.

mod tool;
mod theme;
mod selection;

pub use tool::{Tool, Catalog};
pub use theme::Theme;
pub use selection::{CategoryFilter, UiSelection};
