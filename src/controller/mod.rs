//! Stateful list controllers mirroring the backend collections
//!
//! Each controller owns the local copy of one server collection plus the
//! transient view state around it (loading flag, error message, form
//! buffers). The rendering layer reads this state; it never mutates it.

pub mod books;
pub mod students;

pub use books::{BooksController, EditMode};
pub use students::StudentsController;

/// Interactive yes/no confirmation asked before destructive operations.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Ticket handed out when a list refresh starts.
///
/// Completions are applied only while their ticket is still the most recent
/// one, so a slow older list response can never overwrite a newer one.
#[derive(Debug)]
pub struct RefreshTicket {
    generation: u64,
}

/// Generation counter backing [`RefreshTicket`].
#[derive(Debug, Default)]
pub(crate) struct RefreshGeneration {
    current: u64,
}

impl RefreshGeneration {
    pub(crate) fn begin(&mut self) -> RefreshTicket {
        self.current += 1;
        RefreshTicket {
            generation: self.current,
        }
    }

    pub(crate) fn is_current(&self, ticket: &RefreshTicket) -> bool {
        ticket.generation == self.current
    }
}
