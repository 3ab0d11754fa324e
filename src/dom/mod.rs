//! In-memory document tree mutated by the navigation engine.
mod document;
mod element;

pub use document::Document;
pub use element::{escape_attr, escape_text, Element, NodeId};
