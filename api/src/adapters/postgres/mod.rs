//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod book_repo;


pub use book_repo::PostgresBookRepository;
