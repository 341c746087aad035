//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Book, BookId};
use crate::domain::ports::BookRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Book Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<BTreeMap<BookId, Book>>>,
    by_isbn: Arc<RwLock<HashMap<String, BookId>>>,
    next_id: AtomicI64,
    save_calls: AtomicUsize,
    fail_writes: bool,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose writes fail with a database error
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a book for testing. Assigns an ID if it has none.
    pub fn with_book(self, book: Book) -> Self {
        let id = match book.id {
            Some(id) => {
                // Keep later saves from reusing a seeded ID
                self.next_id.fetch_max(id.0, Ordering::SeqCst);
                id
            }
            None => self.allocate_id(),
        };
        {
            let mut books = self.books.write().unwrap();
            let mut by_isbn = self.by_isbn.write().unwrap();

            by_isbn.insert(book.isbn.clone(), id);
            books.insert(id, book.with_id(id));
        }
        self
    }

    /// Number of times `save` was called, including rejected calls
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.books.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn allocate_id(&self) -> BookId {
        BookId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, DomainError> {
        let by_isbn = self.by_isbn.read().unwrap();
        Ok(by_isbn.contains_key(isbn))
    }

    async fn save(&self, book: &Book) -> Result<Book, DomainError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_writes {
            return Err(DomainError::Database("simulated write failure".to_string()));
        }

        // Check and insert under the same lock, like a unique index
        let mut books = self.books.write().unwrap();
        let mut by_isbn = self.by_isbn.write().unwrap();

        if by_isbn.contains_key(&book.isbn) {
            return Err(DomainError::AlreadyExists(format!(
                "Book with ISBN {}",
                book.isbn
            )));
        }

        let saved = book.clone().with_id(self.allocate_id());
        if let Some(id) = saved.id {
            by_isbn.insert(saved.isbn.clone(), id);
            books.insert(id, saved.clone());
        }

        Ok(saved)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        let books = self.books.read().unwrap();
        Ok(books.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{saved_book, test_book, test_book_with_isbn};

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryBookRepository::new();

        let a = repo.save(&test_book_with_isbn("1")).await.unwrap();
        let b = repo.save(&test_book_with_isbn("2")).await.unwrap();

        assert_eq!(a.id, Some(BookId(1)));
        assert_eq!(b.id, Some(BookId(2)));
        assert_eq!(repo.save_calls(), 2);
    }

    #[tokio::test]
    async fn save_enforces_unique_isbn() {
        let repo = InMemoryBookRepository::new().with_book(saved_book(5));

        let result = repo.save(&test_book()).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn with_book_is_visible_to_lookups() {
        let repo = InMemoryBookRepository::new().with_book(test_book());

        assert!(repo.exists_by_isbn("123").await.unwrap());
        assert!(!repo.exists_by_isbn("456").await.unwrap());
        assert!(repo.find_by_id(&BookId(1)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn save_after_seeding_with_id_gets_a_fresh_id() {
        let repo = InMemoryBookRepository::new()
            .with_book(Book::new("A", "B", "111").with_id(BookId(1)));

        let saved = repo.save(&test_book_with_isbn("222")).await.unwrap();

        assert_ne!(saved.id, Some(BookId(1)));
        assert_eq!(repo.len(), 2);
        assert!(repo.exists_by_isbn("111").await.unwrap());
        assert_eq!(
            repo.find_by_id(&BookId(1)).await.unwrap().map(|b| b.isbn),
            Some("111".to_string())
        );
    }

    #[tokio::test]
    async fn failing_repository_rejects_writes() {
        let repo = InMemoryBookRepository::failing();

        let result = repo.save(&test_book()).await;

        assert!(matches!(result, Err(DomainError::Database(_))));
        assert!(repo.is_empty());
    }
}
