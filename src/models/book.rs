//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Generated by the database on insert
    pub id: i64,
    /// Unique across all books
    pub title: String,
    pub author: String,
}

/// Create book request
///
/// Absent fields decode as empty strings so that they are reported by
/// validation instead of by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub author: String,
}

/// Update book request. Only the fields present are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl CreateBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Attach the generated id once the row is stored
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
        }
    }
}

impl UpdateBook {
    /// Reject a patch that carries no field at all. An empty string is a value.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.is_none() && self.author.is_none() {
            return Err(AppError::Validation(
                "update structure has no values".to_string(),
            ));
        }
        Ok(())
    }
}
