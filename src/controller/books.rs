//! Book list controller
//!
//! Holds the local mirror of the `/books` collection and every piece of
//! transient view state the book page needs. Single-record operations apply
//! their result to the mirror in place instead of refetching the whole list.

use crate::{
    client::{Backend, BookQuery},
    controller::{ConfirmPrompt, RefreshGeneration, RefreshTicket},
    error::AppResult,
    models::{Book, BookDraft, BorrowRequest},
};

/// Edit state of the book page. At most one record is in edit mode at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    NoSelection,
    Editing { id: i32, draft: BookDraft },
}

/// Controller for the book list page.
pub struct BooksController<B> {
    backend: B,
    books: Vec<Book>,
    loading: bool,
    error: Option<String>,
    form: BookDraft,
    search_author: String,
    lookup_id: String,
    selected: Option<Book>,
    edit: EditMode,
    generation: RefreshGeneration,
}

impl<B: Backend> BooksController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            books: Vec::new(),
            loading: false,
            error: None,
            form: BookDraft::default(),
            search_author: String::new(),
            lookup_id: String::new(),
            selected: None,
            edit: EditMode::NoSelection,
            generation: RefreshGeneration::default(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&Book> {
        self.selected.as_ref()
    }

    pub fn edit_mode(&self) -> &EditMode {
        &self.edit
    }

    pub fn new_title(&self) -> &str {
        &self.form.title
    }

    pub fn new_author(&self) -> &str {
        &self.form.author
    }

    pub fn search_author(&self) -> &str {
        &self.search_author
    }

    pub fn lookup_id(&self) -> &str {
        &self.lookup_id
    }

    pub fn set_new_title(&mut self, value: impl Into<String>) {
        self.form.title = value.into();
    }

    pub fn set_new_author(&mut self, value: impl Into<String>) {
        self.form.author = value.into();
    }

    pub fn set_search_author(&mut self, value: impl Into<String>) {
        self.search_author = value.into();
    }

    pub fn set_lookup_id(&mut self, value: impl Into<String>) {
        self.lookup_id = value.into();
    }

    /// Start a list refresh: raise the loading flag and stamp a ticket.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.loading = true;
        self.generation.begin()
    }

    /// Apply the outcome of a list fetch.
    ///
    /// Stale completions (a newer refresh has started since the ticket was
    /// issued) are discarded outright. Failures clear the loading flag and are
    /// logged, but set no user-visible error and leave the mirror unchanged.
    pub fn complete_refresh(&mut self, ticket: RefreshTicket, outcome: AppResult<Vec<Book>>) {
        if !self.generation.is_current(&ticket) {
            tracing::debug!("Discarding stale book list response");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(books) => self.books = books,
            Err(err) => tracing::error!("Error fetching books: {}", err),
        }
    }

    /// Fetch the book list, filtered by the author search buffer when set.
    pub async fn refresh(&mut self) {
        let query = BookQuery {
            author: (!self.search_author.is_empty()).then(|| self.search_author.clone()),
        };
        let ticket = self.begin_refresh();
        let outcome = self.backend.list_books(&query).await;
        self.complete_refresh(ticket, outcome);
    }

    /// Clear the author filter and reload the full list.
    pub async fn reset_search(&mut self) {
        self.search_author.clear();
        self.refresh().await;
    }

    /// Fetch a single book by the id in the lookup buffer.
    pub async fn fetch_by_id(&mut self) {
        let id: i32 = match self.lookup_id.trim().parse() {
            Ok(id) => id,
            Err(_) => {
                self.error = Some("Enter a valid book ID".to_string());
                return;
            }
        };

        match self.backend.get_book(id).await {
            Ok(book) => {
                self.selected = Some(book);
                self.error = None;
            }
            Err(err) => {
                tracing::error!("Error fetching book: {}", err);
                self.error = Some("Could not fetch book".to_string());
            }
        }
    }

    /// Create a book from the form buffers and append it to the mirror.
    pub async fn create(&mut self) {
        if self.form.has_blank_field() {
            self.error = Some("Both title and author are required".to_string());
            return;
        }

        let draft = self.form.trimmed();
        match self.backend.create_book(&draft).await {
            Ok(book) => {
                self.books.push(book);
                self.form = BookDraft::default();
                self.error = None;
            }
            Err(err) => {
                tracing::error!("Error adding book: {}", err);
                self.error = Some("Could not add book".to_string());
            }
        }
    }

    /// Enter edit mode for a mirrored record, seeding the draft from it.
    /// An id that is not in the mirror leaves the edit state unchanged.
    pub fn begin_edit(&mut self, id: i32) {
        if let Some(book) = self.books.iter().find(|b| b.id == id) {
            self.edit = EditMode::Editing {
                id,
                draft: BookDraft::from(book),
            };
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditMode::NoSelection;
    }

    pub fn set_edit_title(&mut self, value: impl Into<String>) {
        if let EditMode::Editing { draft, .. } = &mut self.edit {
            draft.title = value.into();
        }
    }

    pub fn set_edit_author(&mut self, value: impl Into<String>) {
        if let EditMode::Editing { draft, .. } = &mut self.edit {
            draft.author = value.into();
        }
    }

    /// Submit the edit draft, replacing the matching record in place.
    pub async fn update(&mut self) {
        let (id, body) = match &self.edit {
            EditMode::Editing { id, draft } => {
                if draft.has_blank_field() {
                    self.error =
                        Some("Both title and author are required for update".to_string());
                    return;
                }
                (*id, draft.trimmed())
            }
            EditMode::NoSelection => return,
        };

        match self.backend.update_book(id, &body).await {
            Ok(updated) => {
                if let Some(slot) = self.books.iter_mut().find(|b| b.id == updated.id) {
                    *slot = updated;
                }
                self.edit = EditMode::NoSelection;
                self.error = None;
            }
            Err(err) => {
                tracing::error!("Error updating book: {}", err);
                self.error = Some("Could not update book".to_string());
            }
        }
    }

    /// Delete a book after interactive confirmation.
    ///
    /// Declining aborts silently: no request, no state change. A failed
    /// request leaves the mirror unchanged; if the server deleted the record
    /// anyway the mirror stays stale until the next refresh.
    pub async fn delete(&mut self, id: i32, prompt: &dyn ConfirmPrompt) {
        if !prompt.confirm("Are you sure you want to delete this book?") {
            return;
        }

        match self.backend.delete_book(id).await {
            Ok(()) => {
                self.books.retain(|b| b.id != id);
            }
            Err(err) => {
                tracing::error!("Error deleting book: {}", err);
                self.error = Some("Could not delete book".to_string());
            }
        }
    }

    /// Record a student borrowing a book; returns the server's confirmation
    /// message. The mirror is unaffected, borrower links are not part of it.
    pub async fn borrow(&mut self, student_id: i32, book_id: i32) -> Option<String> {
        let request = BorrowRequest {
            student_id,
            book_id,
        };
        match self.backend.borrow_book(&request).await {
            Ok(receipt) => {
                self.error = None;
                Some(receipt.message)
            }
            Err(err) => {
                tracing::error!("Error borrowing book: {}", err);
                self.error = Some("Could not borrow book".to_string());
                None
            }
        }
    }
}
