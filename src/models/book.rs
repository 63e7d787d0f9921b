//! Book model and related types

use serde::{Deserialize, Serialize};

/// Book record as returned by the backend
///
/// The id is assigned by the server and never generated client-side. The live
/// backend may attach extra fields (such as the current borrower); they are
/// ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
}

/// Request body for creating or updating a book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
}

impl BookDraft {
    /// Draft with both fields trimmed, as submitted to the backend.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
        }
    }

    /// True when either field is empty after trimming.
    pub fn has_blank_field(&self) -> bool {
        self.title.trim().is_empty() || self.author.trim().is_empty()
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

/// Borrow request linking a student to a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRequest {
    pub student_id: i32,
    pub book_id: i32,
}

/// Confirmation message returned by the borrow endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct BorrowReceipt {
    pub message: String,
}
