//! Book domain entity
//!
//! A title registered in the catalog. The ISBN is the only uniqueness key.

/// Store-assigned identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub i64);

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book in the catalog
///
/// Built by callers without an `id`; the store fills it in on first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    /// Create an unsaved book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Copy of this book carrying the given identity
    pub fn with_id(self, id: BookId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
