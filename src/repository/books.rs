//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use validator::Validate;

use super::BookRepository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// `UPDATE books` statement covering only the columns present in a patch.
///
/// Columns are always ordered title then author, numbered from `$1`, and the
/// id placeholder comes last.
#[derive(Debug, PartialEq, Eq)]
pub struct UpdateQuery<'a> {
    assignments: Vec<(&'static str, &'a str)>,
}

impl<'a> UpdateQuery<'a> {
    pub fn from_patch(data: &'a UpdateBook) -> AppResult<Self> {
        data.validate()?;

        let mut assignments = Vec::with_capacity(2);
        if let Some(ref title) = data.title {
            assignments.push(("title", title.as_str()));
        }
        if let Some(ref author) = data.author {
            assignments.push(("author", author.as_str()));
        }

        Ok(Self { assignments })
    }

    pub fn sql(&self) -> String {
        let sets: Vec<String> = self
            .assignments
            .iter()
            .enumerate()
            .map(|(idx, (column, _))| format!("{} = ${}", column, idx + 1))
            .collect();

        format!(
            "UPDATE books SET {} WHERE id = ${}",
            sets.join(", "),
            self.assignments.len() + 1
        )
    }

    /// Values to bind, in placeholder order (the id is bound after these)
    pub fn values(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.assignments.iter().map(|(_, value)| *value)
    }
}

#[async_trait]
impl BookRepository for BooksRepository {
    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;

        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_scalar::<_, i64>(
            "INSERT INTO books (title, author) VALUES ($1, $2) RETURNING id",
        )
        .bind(&data.title)
        .bind(&data.author)
        .fetch_one(&mut *tx)
        .await;

        let id = match inserted {
            Ok(id) => id,
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!("Rollback after failed insert also failed: {}", rollback);
                }
                return Err(e.into());
            }
        };

        tx.commit().await?;
        tracing::debug!(id, title = %data.title, "Book created");

        Ok(data.clone().into_book(id))
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT id, title, author FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT id, title, author FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT id, title, author FROM books WHERE title = $1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book titled '{}' not found", title)))
    }

    async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<()> {
        let query = UpdateQuery::from_patch(data)?;
        let sql = query.sql();

        let mut builder = sqlx::query(&sql);
        for value in query.values() {
            builder = builder.bind(value);
        }

        let result = builder.bind(id).execute(&self.pool).await?;
        tracing::debug!(id, rows = result.rows_affected(), "{}", sql);
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id, rows = result.rows_affected(), "Book deleted");
        Ok(())
    }
}
