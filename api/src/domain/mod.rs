//! Domain layer
//!
//! The catalog's core types, free of web and database concerns.
//! - `entities`: `Book` and its store-assigned `BookId`
//! - `ports`: The `BookRepository` trait that storage adapters implement

pub mod entities;
pub mod ports;
