//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod books;

pub use books::{create_book, get_book};
