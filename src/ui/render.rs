//! Stateless projection of controller state to terminal text

use crate::client::Backend;
use crate::controller::{BooksController, EditMode, StudentsController};
use crate::models::{Book, Student};

pub fn book_row(book: &Book) -> String {
    format!(
        "ID: {} — Title: {} — Author: {}",
        book.id, book.title, book.author
    )
}

pub fn student_row(student: &Student) -> String {
    format!("ID: {} — Name: {}", student.id, student.name)
}

/// Render the book page: selected record, current error, list, edit form.
pub fn books_view<B: Backend>(controller: &BooksController<B>) -> String {
    if controller.loading() {
        return "Loading...".to_string();
    }

    let mut lines = Vec::new();

    if let Some(book) = controller.selected() {
        lines.push("Book Found:".to_string());
        lines.push(book_row(book));
        lines.push(String::new());
    }

    if let Some(error) = controller.error() {
        lines.push(error.to_string());
        lines.push(String::new());
    }

    if controller.books().is_empty() {
        lines.push("No books found.".to_string());
    } else {
        for book in controller.books() {
            lines.push(book_row(book));
        }
    }

    if let EditMode::Editing { id, draft } = controller.edit_mode() {
        lines.push(String::new());
        lines.push(format!("Update Book (ID: {})", id));
        lines.push(format!(
            "Title: {} — Author: {}",
            draft.title, draft.author
        ));
    }

    lines.join("\n")
}

/// Render the student page: current error, then the list.
pub fn students_view<B: Backend>(controller: &StudentsController<B>) -> String {
    if controller.loading() {
        return "Loading...".to_string();
    }

    let mut lines = Vec::new();

    if let Some(error) = controller.error() {
        lines.push(error.to_string());
        lines.push(String::new());
    }

    if controller.students().is_empty() {
        lines.push("No students found.".to_string());
    } else {
        for student in controller.students() {
            lines.push(student_row(student));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockBackend;

    #[test]
    fn book_row_matches_the_page_format() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
        };
        assert_eq!(book_row(&book), "ID: 1 — Title: Dune — Author: Herbert");
    }

    #[test]
    fn student_row_matches_the_page_format() {
        let student = Student {
            id: 4,
            name: "Ada".to_string(),
        };
        assert_eq!(student_row(&student), "ID: 4 — Name: Ada");
    }

    #[tokio::test]
    async fn fetched_list_renders_one_row_per_record() {
        let mut backend = MockBackend::new();
        backend.expect_list_books().returning(|_| {
            Ok(vec![Book {
                id: 1,
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
            }])
        });

        let mut controller = BooksController::new(backend);
        controller.refresh().await;

        assert_eq!(
            books_view(&controller),
            "ID: 1 — Title: Dune — Author: Herbert"
        );
    }

    #[test]
    fn loading_state_renders_placeholder() {
        let mut controller = BooksController::new(MockBackend::new());
        let _ticket = controller.begin_refresh();
        assert_eq!(books_view(&controller), "Loading...");
    }

    #[test]
    fn empty_lists_render_placeholders() {
        let books = BooksController::new(MockBackend::new());
        assert_eq!(books_view(&books), "No books found.");

        let students = StudentsController::new(MockBackend::new());
        assert_eq!(students_view(&students), "No students found.");
    }
}
