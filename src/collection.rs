use async_trait::async_trait;

use crate::error::Result;
use crate::types::{NewTodo, PageEnvelope, Todo};

pub mod http;

pub use http::HttpCollection;

/// The five operations the remote todo collection exposes.
///
/// Every operation resolves to exactly one value or one failure; there is
/// no retry, caching, or cancellation at this layer. Replace and the
/// status patch are idempotent by virtue of their HTTP verbs; create and
/// delete are not and are never retried.
#[async_trait]
pub trait Collection: Send + Sync {
    /// Create a new item; the server assigns the id and both timestamps.
    async fn create(&self, new: &NewTodo) -> Result<Todo>;

    /// Fetch one page of items together with its pagination metadata.
    async fn list_page(&self, page: u32, size: u32) -> Result<PageEnvelope>;

    /// Delete an item by id. The caller is responsible for any
    /// confirmation step before the call is issued.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Replace an item in full, addressed by its id. The item must
    /// already possess an identifier; updating a nonexistent resource is
    /// a server-signaled failure.
    async fn replace(&self, todo: &Todo) -> Result<Todo>;

    /// Set only the completed flag of an item.
    async fn patch_status(&self, id: i64, completed: bool) -> Result<Todo>;
}
