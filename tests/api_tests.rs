//! API integration tests
//!
//! These run against a live backend on the default port.

use shelfctl::client::{Backend, BookQuery, HttpBackend};
use shelfctl::config::BackendConfig;
use shelfctl::error::AppError;
use shelfctl::models::{BookDraft, StudentDraft};

const BASE_URL: &str = "http://127.0.0.1:8000";

fn backend() -> HttpBackend {
    HttpBackend::new(&BackendConfig {
        base_url: BASE_URL.to_string(),
        timeout_secs: 10,
    })
    .expect("Failed to build backend client")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_list_books() {
    let backend = backend();

    let books = backend
        .list_books(&BookQuery::default())
        .await
        .expect("Failed to list books");

    for book in &books {
        assert!(book.id > 0);
    }
}

#[tokio::test]
#[ignore]
async fn test_create_update_delete_book() {
    let backend = backend();

    let created = backend
        .create_book(&BookDraft {
            title: "Integration Test Book".to_string(),
            author: "Integration Author".to_string(),
        })
        .await
        .expect("Failed to create book");
    assert_eq!(created.title, "Integration Test Book");

    let fetched = backend
        .get_book(created.id)
        .await
        .expect("Failed to fetch created book");
    assert_eq!(fetched, created);

    let updated = backend
        .update_book(
            created.id,
            &BookDraft {
                title: "Integration Test Book (rev)".to_string(),
                author: "Integration Author".to_string(),
            },
        )
        .await
        .expect("Failed to update book");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Integration Test Book (rev)");

    backend
        .delete_book(created.id)
        .await
        .expect("Failed to delete book");

    let gone = backend.get_book(created.id).await;
    assert!(matches!(gone, Err(AppError::Status(status)) if status.as_u16() == 404));
}

#[tokio::test]
#[ignore]
async fn test_list_books_filtered_by_author() {
    let backend = backend();

    let created = backend
        .create_book(&BookDraft {
            title: "Filtered Book".to_string(),
            author: "Unique Filter Author".to_string(),
        })
        .await
        .expect("Failed to create book");

    let filtered = backend
        .list_books(&BookQuery {
            author: Some("Unique Filter Author".to_string()),
        })
        .await
        .expect("Failed to list filtered books");

    assert!(filtered.iter().all(|b| b.author == "Unique Filter Author"));
    assert!(filtered.iter().any(|b| b.id == created.id));

    let _ = backend.delete_book(created.id).await;
}

#[tokio::test]
#[ignore]
async fn test_get_book_not_found() {
    let backend = backend();

    let result = backend.get_book(i32::MAX).await;
    assert!(matches!(result, Err(AppError::Status(status)) if status.as_u16() == 404));
}

#[tokio::test]
#[ignore]
async fn test_create_and_list_students() {
    let backend = backend();

    let created = backend
        .create_student(&StudentDraft {
            name: "Integration Student".to_string(),
        })
        .await
        .expect("Failed to create student");
    assert!(created.id > 0);

    let students = backend
        .list_students()
        .await
        .expect("Failed to list students");
    assert!(students.iter().any(|s| s.id == created.id));
}

#[tokio::test]
#[ignore]
async fn test_borrow_flow() {
    let backend = backend();

    let student = backend
        .create_student(&StudentDraft {
            name: "Borrower".to_string(),
        })
        .await
        .expect("Failed to create student");
    let book = backend
        .create_book(&BookDraft {
            title: "Borrowed Book".to_string(),
            author: "Borrowed Author".to_string(),
        })
        .await
        .expect("Failed to create book");

    let receipt = backend
        .borrow_book(&shelfctl::models::BorrowRequest {
            student_id: student.id,
            book_id: book.id,
        })
        .await
        .expect("Failed to borrow book");
    assert!(!receipt.message.is_empty());

    let borrowed = backend
        .student_books(student.id)
        .await
        .expect("Failed to list borrowed books");
    assert!(borrowed.iter().any(|b| b.id == book.id));

    let _ = backend.delete_book(book.id).await;
}
