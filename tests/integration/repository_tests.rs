//! Repository tests (require DATABASE_URL)

use books_server::{
    models::book::{CreateBook, UpdateBook},
    repository::{ensure_schema, BookRepository, BooksRepository},
    AppError,
};
use sqlx::{
    postgres::{PgConnection, PgPoolOptions},
    Connection,
};

use super::unique_title;

async fn repository() -> BooksRepository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    ensure_schema(&pool).await.expect("Failed to create schema");
    BooksRepository::new(pool)
}

/// Repository over a freshly created schema, so its `books` table starts empty.
/// Returns the admin connection and schema name for cleanup.
async fn isolated_repository() -> (BooksRepository, PgConnection, String) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let schema = unique_title("books_test").replace(' ', "_");

    let mut admin = PgConnection::connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::query(&format!("CREATE SCHEMA {}", schema))
        .execute(&mut admin)
        .await
        .expect("Failed to create schema");

    let search_path = format!("SET search_path TO {}", schema);
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .after_connect(move |conn, _meta| {
            let sql = search_path.clone();
            Box::pin(async move {
                sqlx::query(&sql).execute(conn).await?;
                Ok(())
            })
        })
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    ensure_schema(&pool).await.expect("Failed to create books table");

    (BooksRepository::new(pool), admin, schema)
}

#[tokio::test]
#[ignore]
async fn test_find_all_on_empty_table_returns_empty_list() {
    let (repo, mut admin, schema) = isolated_repository().await;

    let books = repo.find_all().await;

    sqlx::query(&format!("DROP SCHEMA {} CASCADE", schema))
        .execute(&mut admin)
        .await
        .expect("Failed to drop schema");

    assert_eq!(books.expect("find_all"), vec![]);
}

#[tokio::test]
#[ignore]
async fn test_create_then_find_by_id() {
    let repo = repository().await;
    let data = CreateBook::new(unique_title("Create"), "Author");

    let created = repo.create(&data).await.expect("create");
    assert!(created.id > 0);

    let found = repo.find_by_id(created.id).await.expect("find");
    assert_eq!(found, data.into_book(created.id));
}

#[tokio::test]
#[ignore]
async fn test_create_invalid_book_does_not_insert() {
    let repo = repository().await;
    let title = unique_title("Invalid");

    let err = repo
        .create(&CreateBook::new(title.clone(), ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = repo.find_by_title(&title).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_title_keeps_existing_row() {
    let repo = repository().await;
    let title = unique_title("Duplicate");

    let original = repo
        .create(&CreateBook::new(title.clone(), "First"))
        .await
        .expect("create");

    let err = repo
        .create(&CreateBook::new(title.clone(), "Second"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Database(_)));

    let found = repo.find_by_title(&title).await.expect("find");
    assert_eq!(found, original);
}

#[tokio::test]
#[ignore]
async fn test_update_title_only_leaves_author() {
    let repo = repository().await;
    let created = repo
        .create(&CreateBook::new(unique_title("Before"), "Kept Author"))
        .await
        .expect("create");

    let new_title = unique_title("After");
    repo.update(
        created.id,
        &UpdateBook {
            title: Some(new_title.clone()),
            author: None,
        },
    )
    .await
    .expect("update");

    let found = repo.find_by_id(created.id).await.expect("find");
    assert_eq!(found.title, new_title);
    assert_eq!(found.author, "Kept Author");
}

#[tokio::test]
#[ignore]
async fn test_empty_update_is_rejected_for_any_id() {
    let repo = repository().await;

    for id in [1, i64::MAX] {
        let err = repo.update(id, &UpdateBook::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

#[tokio::test]
#[ignore]
async fn test_update_and_delete_unknown_id_succeed() {
    let repo = repository().await;
    let patch = UpdateBook {
        title: None,
        author: Some("Nobody".into()),
    };

    // Current behavior: zero rows affected is not an error
    repo.update(i64::MAX, &patch).await.expect("update");
    repo.delete(i64::MAX).await.expect("delete");
}

#[tokio::test]
#[ignore]
async fn test_delete_removes_row() {
    let repo = repository().await;
    let created = repo
        .create(&CreateBook::new(unique_title("Delete"), "Author"))
        .await
        .expect("create");

    repo.delete(created.id).await.expect("delete");

    let err = repo.find_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore]
async fn test_find_all_contains_created_books() {
    let repo = repository().await;
    let created = repo
        .create(&CreateBook::new(unique_title("Listed"), "Author"))
        .await
        .expect("create");

    let books = repo.find_all().await.expect("find_all");
    assert!(books.contains(&created));
}
