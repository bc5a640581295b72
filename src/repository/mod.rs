//! Repository layer for database operations

pub mod books;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

pub use books::BooksRepository;

const BOOKS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id bigserial PRIMARY KEY,
    title TEXT NOT NULL UNIQUE,
    author TEXT NOT NULL
)
"#;

/// Storage operations on books.
///
/// `update` and `delete` do not check that the row exists: touching an
/// unknown id succeeds with zero rows affected.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Validate and insert a book, returning it with its generated id
    async fn create(&self, data: &CreateBook) -> AppResult<Book>;

    /// All books, in whatever order the database returns them
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Book>;

    /// Exact-match lookup on title
    async fn find_by_title(&self, title: &str) -> AppResult<Book>;

    async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Create the books table if it does not exist yet
pub async fn ensure_schema(pool: &Pool<Postgres>) -> AppResult<()> {
    sqlx::query(BOOKS_SCHEMA).execute(pool).await?;
    Ok(())
}
