//! PostgreSQL adapter for BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, PaginatorTrait, QueryFilter, Schema, Set, SqlErr,
};

use crate::domain::entities::{Book, BookId};
use crate::domain::ports::BookRepository;
use crate::entity::books;
use crate::error::DomainError;

/// PostgreSQL implementation of BookRepository
pub struct PostgresBookRepository {
    db: DatabaseConnection,
}

impl PostgresBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `books` table, with its unique ISBN index, if missing
    pub async fn init_schema(&self) -> Result<(), DomainError> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut stmt = schema.create_table_from_entity(books::Entity);
        stmt.if_not_exists();

        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, DomainError> {
        let count = books::Entity::find()
            .filter(books::Column::Isbn.eq(isbn))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, book: &Book) -> Result<Book, DomainError> {
        let model = books::ActiveModel {
            id: NotSet,
            title: Set(book.title.clone()),
            author: Set(book.author.clone()),
            isbn: Set(book.isbn.clone()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, &book.isbn))?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        let result = books::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Unique index violations mean another writer registered the ISBN first
fn map_insert_error(err: DbErr, isbn: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::AlreadyExists(format!("Book with ISBN {}", isbn))
        }
        _ => DomainError::Database(err.to_string()),
    }
}

/// Convert SeaORM model to domain entity
impl From<books::Model> for Book {
    fn from(model: books::Model) -> Self {
        Book::new(model.title, model.author, model.isbn).with_id(BookId(model.id))
    }
}
