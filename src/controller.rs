//! Session controller binding the item list, the form, and the remote
//! collection.
//!
//! The controller owns all UI-facing state for one session: the cached
//! current page of items, the pagination index, the form values, and the
//! edit-mode flag. Every mutation against the collection is followed by a
//! refetch of the page that was current when the mutation was issued, so
//! the visible list never drifts from the server. Failures propagate to
//! the caller without touching state and without emitting a notification.

use std::sync::Arc;

use crate::collection::Collection;
use crate::error::Result;
use crate::types::{GeneratedPage, NewTodo, Todo};

/// Confirmation text shown before a delete is issued.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this record?";

/// User-visible notification keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
        }
    }
}

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Blocking yes/no confirmation seam.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Editable form state mirroring a single item.
///
/// The form never carries the server timestamps; populating it from an
/// item copies only the editable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

impl TodoForm {
    /// The one validation rule: name must be non-blank.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    fn populate(&mut self, todo: &Todo) {
        self.id = todo.id;
        self.name = todo.name.clone();
        self.description = todo.description.clone().unwrap_or_default();
        self.completed = todo.completed;
    }

    fn reset(&mut self) {
        *self = TodoForm::default();
    }

    fn description_opt(&self) -> Option<String> {
        if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description.clone())
        }
    }

    fn to_todo(&self) -> Todo {
        Todo {
            id: self.id,
            name: self.name.clone(),
            description: self.description_opt(),
            completed: self.completed,
            date_created: None,
            last_updated: None,
        }
    }
}

/// Coordinates UI state transitions around the five remote operations.
pub struct ListFormController {
    collection: Arc<dyn Collection>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    todos: Vec<Todo>,
    page_num: u32,
    size: u32,
    edit_mode: bool,
    generated_pages: Vec<GeneratedPage>,
    form: TodoForm,
}

impl ListFormController {
    pub fn new(
        collection: Arc<dyn Collection>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
        size: u32,
    ) -> Self {
        Self {
            collection,
            notifier,
            confirm,
            todos: Vec::new(),
            page_num: 0,
            size,
            edit_mode: false,
            generated_pages: Vec::new(),
            form: TodoForm::default(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn page_num(&self) -> u32 {
        self.page_num
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn generated_pages(&self) -> &[GeneratedPage] {
        &self.generated_pages
    }

    pub fn form(&self) -> &TodoForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TodoForm {
        &mut self.form
    }

    /// Fetch one page and reconcile it into state.
    ///
    /// The cached list is replaced wholesale, the page index is regenerated
    /// from the server-reported total, and the current page is set from the
    /// server-reported number (the server is authoritative; a request past
    /// the end lands wherever the server clamps it). On failure nothing is
    /// mutated.
    pub async fn fetch_page(&mut self, page: u32) -> Result<()> {
        let envelope = self.collection.list_page(page, self.size).await?;
        self.todos = envelope.embedded.todos;
        self.generate_all_pages(envelope.page.total_pages);
        self.page_num = envelope.page.number;
        Ok(())
    }

    fn generate_all_pages(&mut self, total_pages: u32) {
        self.generated_pages = (0..total_pages)
            .map(|i| GeneratedPage {
                value: i,
                display_value: i + 1,
            })
            .collect();
    }

    /// Copy an item's editable fields into the form and enter edit mode.
    /// Timestamps are never copied.
    pub fn handle_edit(&mut self, todo: &Todo) {
        self.edit_mode = true;
        self.form.populate(todo);
    }

    /// Leave edit mode and clear the form without a remote call.
    pub fn cancel_edit(&mut self) {
        self.edit_mode = false;
        self.form.reset();
    }

    /// Submit the form: replace when in edit mode, create otherwise.
    ///
    /// A form that fails validation returns immediately with zero remote
    /// calls and no notification. On create, the payload carries only the
    /// name and description with completed forced false; any stale id or
    /// completed flag left in the form is ignored.
    pub async fn on_submit(&mut self) -> Result<()> {
        if !self.form.is_valid() {
            return Ok(());
        }
        if self.edit_mode {
            self.update_todo().await
        } else {
            let new = NewTodo {
                name: self.form.name.clone(),
                description: self.form.description_opt(),
                completed: false,
            };
            self.collection.create(&new).await?;
            self.generate_all_pages(self.page_num);
            self.notifier.notify(Notice::Created);
            self.fetch_page(self.page_num).await
        }
    }

    async fn update_todo(&mut self) -> Result<()> {
        let page = self.page_num;
        let todo = self.form.to_todo();
        self.collection.replace(&todo).await?;
        // Form reset, notice, and mode flip follow the replace succeeding,
        // not the refetch: a failed refetch leaves the list stale but the
        // submission itself is done.
        let refetch = self.fetch_page(page).await;
        self.form.reset();
        self.notifier.notify(Notice::Updated);
        self.edit_mode = false;
        refetch
    }

    /// Delete an item after an explicit confirmation. Declining the prompt
    /// returns with zero remote calls and no state change.
    pub async fn delete_todo(&mut self, id: i64) -> Result<()> {
        if !self.confirm.confirm(DELETE_PROMPT) {
            return Ok(());
        }
        let page = self.page_num;
        self.collection.delete(id).await?;
        let refetch = self.fetch_page(page).await;
        self.notifier.notify(Notice::Deleted);
        refetch
    }

    /// Flip an item's completed flag via the partial status patch.
    pub async fn set_status(&mut self, id: i64, completed: bool) -> Result<()> {
        let page = self.page_num;
        self.collection.patch_status(id, completed).await?;
        let refetch = self.fetch_page(page).await;
        self.notifier.notify(Notice::Updated);
        refetch
    }
}
