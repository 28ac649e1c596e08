//! Blog endpoints split by the role allowed to call them.

pub mod editor;
pub mod writer;

/// Tag for grouping blog endpoints in OpenAPI documentation
pub static BLOG_TAG: &str = "blog";
