//! Client and session controller for a paginated todo REST service.
//!
//! The remote collection lives behind a fixed REST contract at
//! `/api/todos`; this crate provides a typed client for its five
//! operations and a controller that keeps a session's list, pagination
//! index, and form state reconciled with the server after every mutation.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todoctl::{HttpCollection, ListFormController};
//!
//! # async fn example(notifier: Arc<dyn todoctl::Notifier>, confirm: Arc<dyn todoctl::ConfirmPrompt>) -> todoctl::Result<()> {
//! let collection = Arc::new(HttpCollection::new("http://localhost:8080"));
//! let mut controller = ListFormController::new(collection, notifier, confirm, 5);
//! controller.fetch_page(0).await?;
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod types;

pub use collection::{Collection, HttpCollection};
pub use controller::{ConfirmPrompt, ListFormController, Notice, Notifier, TodoForm};
pub use error::{Error, Result};
pub use types::{GeneratedPage, NewTodo, PageEnvelope, Todo};
