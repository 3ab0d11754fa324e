//! Built-in page views.
pub mod index;
pub mod not_found;
