//! Business logic services

pub mod books;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    repository::BookRepository,
};

/// Book operations exposed to the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookService: Send + Sync {
    async fn create(&self, data: &CreateBook) -> AppResult<Book>;

    async fn get_all(&self) -> AppResult<Vec<Book>>;

    async fn get_by_id(&self, id: i64) -> AppResult<Book>;

    async fn get_by_title(&self, title: &str) -> AppResult<Book>;

    async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: Arc<dyn BookService>,
}

impl Services {
    /// Create all services on top of the given repository
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self::with_books(Arc::new(books::BooksService::new(repository)))
    }

    /// Build the container around an already constructed book service
    pub fn with_books(books: Arc<dyn BookService>) -> Self {
        Self { books }
    }
}
