//! Books service

use std::sync::Arc;

use async_trait::async_trait;

use super::BookService;
use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    repository::BookRepository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BookRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BookService for BooksService {
    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        self.repository.create(data).await
    }

    async fn get_all(&self) -> AppResult<Vec<Book>> {
        self.repository.find_all().await
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.find_by_id(id).await
    }

    async fn get_by_title(&self, title: &str) -> AppResult<Book> {
        self.repository.find_by_title(title).await
    }

    async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<()> {
        self.repository.update(id, data).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
