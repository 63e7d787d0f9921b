//! Backend access layer speaking JSON over HTTP

pub mod http;

pub use http::HttpBackend;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, BookDraft, BorrowReceipt, BorrowRequest, Student, StudentDraft},
};

/// Query parameters for listing books
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    /// Exact-match author filter
    pub author: Option<String>,
}

/// Wire contract of the library backend.
///
/// One method per REST operation. Implementations send a single request and
/// decode the JSON response into typed models; there are no retries and no
/// auth headers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// GET /books, with an optional author-equality filter.
    async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>>;

    /// GET /books/{id}.
    async fn get_book(&self, id: i32) -> AppResult<Book>;

    /// POST /books.
    async fn create_book(&self, draft: &BookDraft) -> AppResult<Book>;

    /// PUT /books/{id}.
    async fn update_book(&self, id: i32, draft: &BookDraft) -> AppResult<Book>;

    /// DELETE /books/{id}.
    async fn delete_book(&self, id: i32) -> AppResult<()>;

    /// GET /students.
    async fn list_students(&self) -> AppResult<Vec<Student>>;

    /// POST /students.
    async fn create_student(&self, draft: &StudentDraft) -> AppResult<Student>;

    /// POST /books/borrow.
    async fn borrow_book(&self, request: &BorrowRequest) -> AppResult<BorrowReceipt>;

    /// GET /students/{id}/books.
    async fn student_books(&self, student_id: i32) -> AppResult<Vec<Book>>;
}
