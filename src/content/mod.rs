// src/content/mod.rs
//! Markdown content pipeline: path translation, fetch, render, link rewiring.
mod links;
mod paths;
mod pipeline;
mod render;

pub use links::{rewire_links, rewire_target};
pub use paths::{convert_html_path_to_md_path, md_path_in, page_title_from_path};
pub use pipeline::{ensure_container, load_page_content, render_error_panel, show_content};
pub use render::{MarkdownRenderer, MarkdownRs};
