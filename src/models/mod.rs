//! Data models

pub mod book;

pub use book::{Book, CreateBook, UpdateBook};
