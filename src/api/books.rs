//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    AppState,
};

use super::{BookId, JsonBody};

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Body is not valid JSON", body = crate::error::ErrorResponse),
        (status = 422, description = "Validation or storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 422, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.get_all().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 422, description = "Invalid id, unknown book or storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Get book by exact title
#[utoipa::path(
    get,
    path = "/books/by-title/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Exact book title")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 422, description = "Unknown book or storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_title(&title).await?;
    Ok(Json(book))
}

/// Partially update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated"),
        (status = 400, description = "Body is not valid JSON", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid id, empty patch or storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    JsonBody(data): JsonBody<UpdateBook>,
) -> AppResult<StatusCode> {
    state.services.books.update(id, &data).await?;
    Ok(StatusCode::OK)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 422, description = "Invalid id or storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::OK)
}
