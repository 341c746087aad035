//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{Book, BookId};
use crate::error::DomainError;

/// Repository for Book entities
///
/// Implementations must reject a second book with an ISBN that is already
/// stored, reporting `DomainError::AlreadyExists` from `save`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Check whether a book with exactly this ISBN is stored
    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, DomainError>;

    /// Persist a new book, returning it with its assigned ID
    async fn save(&self, book: &Book) -> Result<Book, DomainError>;

    /// Find a book by ID
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError>;
}
