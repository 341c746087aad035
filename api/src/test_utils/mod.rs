//! Test utilities
//!
//! In-memory store and test fixtures for unit and HTTP tests.
//!
//! Service tests that need to verify exact calls use `MockBookRepository`
//! (generated by mockall on the port trait). Everything else uses the
//! in-memory store here, which behaves like the real one, including the
//! uniqueness constraint on ISBN.

pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
