//! Book service
//!
//! Registers books in the catalog, enforcing ISBN uniqueness.

use std::sync::Arc;

use crate::domain::entities::{Book, BookId};
use crate::domain::ports::BookRepository;
use crate::error::{AppError, BusinessError, DomainError};

/// Service for registering and looking up books
pub struct BookService<BR>
where
    BR: BookRepository + ?Sized,
{
    books: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository + ?Sized,
{
    pub fn new(books: Arc<BR>) -> Self {
        Self { books }
    }

    /// Register a new book
    ///
    /// Fails with a business error, without writing, if the ISBN is already
    /// in the catalog. Otherwise returns the store's result unchanged.
    pub async fn save(&self, book: Book) -> Result<Book, AppError> {
        if self.books.exists_by_isbn(&book.isbn).await? {
            tracing::warn!(isbn = %book.isbn, "Rejected book with duplicate ISBN");
            return Err(BusinessError::duplicate_isbn().into());
        }

        // The store's unique constraint catches writers that raced past the check
        let saved = self.books.save(&book).await.map_err(|e| match e {
            DomainError::AlreadyExists(_) => AppError::Business(BusinessError::duplicate_isbn()),
            e => AppError::Domain(e),
        })?;

        tracing::info!(id = ?saved.id, isbn = %saved.isbn, "Registered book");
        Ok(saved)
    }

    /// Get a book by ID
    pub async fn find_by_id(&self, id: &BookId) -> Result<Book, AppError> {
        self.books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }
}
