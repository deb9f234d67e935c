//! HTTP implementation of the collection over the fixed REST contract.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::types::{NewTodo, PageEnvelope, Todo};

/// Fixed base resource path on the remote service.
const RESOURCE_PATH: &str = "/api/todos";

/// reqwest-backed implementation of [`Collection`].
pub struct HttpCollection {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCollection {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, RESOURCE_PATH)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, RESOURCE_PATH, id)
    }
}

/// Check the status and decode the body against an explicit schema.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(remote_error(status, response).await);
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

async fn remote_error(status: StatusCode, response: Response) -> Error {
    let message = response.text().await.unwrap_or_default();
    Error::Remote {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl Collection for HttpCollection {
    async fn create(&self, new: &NewTodo) -> Result<Todo> {
        let url = self.collection_url();
        debug!("POST {}", url);
        let response = self.client.post(&url).json(new).send().await?;
        read_json(response).await
    }

    async fn list_page(&self, page: u32, size: u32) -> Result<PageEnvelope> {
        let url = self.collection_url();
        debug!("GET {}?page={}&size={}", url, page, size);
        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("size", size)])
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(remote_error(status, response).await);
        }
        Ok(())
    }

    async fn replace(&self, todo: &Todo) -> Result<Todo> {
        let id = todo.id.ok_or(Error::MissingId)?;
        let url = self.item_url(id);
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(todo).send().await?;
        read_json(response).await
    }

    async fn patch_status(&self, id: i64, completed: bool) -> Result<Todo> {
        let url = self.item_url(id);
        debug!("PATCH {}", url);
        let response = self
            .client
            .patch(&url)
            .json(&json!({ "completed": completed }))
            .send()
            .await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn created_body() -> String {
        serde_json::json!({
            "id": 7,
            "name": "water plants",
            "description": "balcony only",
            "completed": false,
            "dateCreated": "2024-03-01T09:00:00Z",
            "lastUpdated": "2024-03-01T09:00:00Z"
        })
        .to_string()
    }

    #[tokio::test]
    async fn create_posts_payload_and_returns_assigned_item() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/todos")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "water plants",
                "description": "balcony only",
                "completed": false
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(created_body())
            .create_async()
            .await;

        let collection = HttpCollection::new(server.url());
        let new = NewTodo {
            name: "water plants".to_string(),
            description: Some("balcony only".to_string()),
            completed: false,
        };
        let todo = collection.create(&new).await.unwrap();

        mock.assert_async().await;
        assert_eq!(todo.id, Some(7));
        assert!(todo.date_created.is_some());
    }

    #[tokio::test]
    async fn list_page_sends_page_and_size_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/todos")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("size".into(), "5".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"_embedded":{"todos":[]},"page":{"size":5,"totalElements":0,"totalPages":1,"number":0}}"#,
            )
            .create_async()
            .await;

        let collection = HttpCollection::new(server.url());
        let envelope = collection.list_page(2, 5).await.unwrap();

        mock.assert_async().await;
        assert!(envelope.embedded.todos.is_empty());
        assert_eq!(envelope.page.total_pages, 1);
    }

    #[tokio::test]
    async fn delete_addresses_item_by_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/todos/3")
            .with_status(204)
            .create_async()
            .await;

        let collection = HttpCollection::new(server.url());
        collection.delete(3).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn replace_puts_full_item() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/todos/7")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "water plants",
                "description": "balcony only",
                "completed": true,
                "id": 7
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(created_body())
            .create_async()
            .await;

        let collection = HttpCollection::new(server.url());
        let todo = Todo {
            id: Some(7),
            name: "water plants".to_string(),
            description: Some("balcony only".to_string()),
            completed: true,
            date_created: None,
            last_updated: None,
        };
        collection.replace(&todo).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn replace_without_id_issues_no_request() {
        let collection = HttpCollection::new("http://localhost:1");
        let todo = Todo {
            id: None,
            name: "orphan".to_string(),
            description: None,
            completed: false,
            date_created: None,
            last_updated: None,
        };
        assert!(matches!(
            collection.replace(&todo).await,
            Err(Error::MissingId)
        ));
    }

    #[tokio::test]
    async fn patch_status_sends_only_completed_flag() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/todos/7")
            .match_body(Matcher::Json(serde_json::json!({"completed": true})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(created_body())
            .create_async()
            .await;

        let collection = HttpCollection::new(server.url());
        collection.patch_status(7, true).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_maps_to_remote_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/todos")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let collection = HttpCollection::new(server.url());
        let err = collection.list_page(0, 5).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn malformed_envelope_is_rejected() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/todos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"_embedded":{"todos":[]}}"#)
            .create_async()
            .await;

        let collection = HttpCollection::new(server.url());
        assert!(matches!(
            collection.list_page(0, 5).await,
            Err(Error::Malformed(_))
        ));
    }
}
