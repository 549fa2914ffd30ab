//! Rendering search records for people and for other tools.

mod json;
mod md;

pub use json::to_json;
pub use md::{render_markdown, write_markdown};
