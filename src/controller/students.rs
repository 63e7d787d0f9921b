//! Student list controller
//!
//! The student page is a subset of the book page: list and create only, with
//! a single name field. Borrowed-book lookups read through without touching
//! the mirror.

use crate::{
    client::Backend,
    controller::{RefreshGeneration, RefreshTicket},
    error::AppResult,
    models::{Book, Student, StudentDraft},
};

/// Controller for the student list page.
pub struct StudentsController<B> {
    backend: B,
    students: Vec<Student>,
    loading: bool,
    error: Option<String>,
    new_name: String,
    generation: RefreshGeneration,
}

impl<B: Backend> StudentsController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            students: Vec::new(),
            loading: false,
            error: None,
            new_name: String::new(),
            generation: RefreshGeneration::default(),
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn set_new_name(&mut self, value: impl Into<String>) {
        self.new_name = value.into();
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.loading = true;
        self.generation.begin()
    }

    /// Same contract as the book list: stale completions are discarded,
    /// failures are logged without a user-visible error.
    pub fn complete_refresh(&mut self, ticket: RefreshTicket, outcome: AppResult<Vec<Student>>) {
        if !self.generation.is_current(&ticket) {
            tracing::debug!("Discarding stale student list response");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(students) => self.students = students,
            Err(err) => tracing::error!("Error fetching students: {}", err),
        }
    }

    /// Fetch the full student list.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        let outcome = self.backend.list_students().await;
        self.complete_refresh(ticket, outcome);
    }

    /// Create a student from the name buffer and append it to the mirror.
    pub async fn create(&mut self) {
        if self.new_name.trim().is_empty() {
            self.error = Some("Name is required".to_string());
            return;
        }

        let draft = StudentDraft {
            name: self.new_name.trim().to_string(),
        };
        match self.backend.create_student(&draft).await {
            Ok(student) => {
                self.students.push(student);
                self.new_name.clear();
                self.error = None;
            }
            Err(err) => {
                tracing::error!("Error adding student: {}", err);
                self.error = Some("Could not add student".to_string());
            }
        }
    }

    /// Fetch the books currently borrowed by one student.
    pub async fn borrowed_books(&mut self, student_id: i32) -> Option<Vec<Book>> {
        match self.backend.student_books(student_id).await {
            Ok(books) => Some(books),
            Err(err) => {
                tracing::error!("Error fetching borrowed books: {}", err);
                self.error = Some("Could not fetch borrowed books".to_string());
                None
            }
        }
    }
}
