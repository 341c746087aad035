//! Book handlers
//!
//! Endpoints for registering and reading catalog entries.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Book, BookId};
use crate::error::AppError;
use crate::AppState;

/// Book as sent and received over the API
///
/// Missing text fields deserialize as empty strings so that they are
/// reported by `validate` instead of failing extraction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
}

impl BookDto {
    /// Collect a message for every blank required field, in field order
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = [
            ("title", &self.title),
            ("author", &self.author),
            ("isbn", &self.isbn),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| format!("{} must not be empty", field))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Convert to an unsaved domain book. Any client-supplied ID is ignored.
    pub fn into_book(self) -> Book {
        Book::new(self.title, self.author, self.isbn)
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.map(|id| id.0),
            title: book.title,
            author: book.author,
            isbn: book.isbn,
        }
    }
}

/// POST /api/books
///
/// Register a new book. Rejects blank fields and duplicate ISBNs.
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookDto>, JsonRejection>,
) -> Result<(StatusCode, Json<BookDto>), AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(vec![e.body_text()]))?;
    request.validate().map_err(AppError::Validation)?;

    let saved = state.book_service.save(request.into_book()).await?;

    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// GET /api/books/:id
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookDto>, AppError> {
    let Path(id) = id.map_err(|e| AppError::Validation(vec![e.body_text()]))?;
    let book = state.book_service.find_by_id(&BookId(id)).await?;
    Ok(Json(book.into()))
}
