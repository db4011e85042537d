use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::databases::chat::messages::{ConversationSummary, Message, SendMessageRequest};
use crate::databases::users::user::User;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Search query is required")]
    EmptyQuery,
}

/// The calls a conversation screen makes against the messaging backend.
#[async_trait]
pub trait MessageApi: Send + Sync {
    async fn fetch_messages_between_users(
        &self,
        sender_id: i64,
        receiver_id: i64,
    ) -> Result<Vec<Message>, ClientError>;

    async fn send_message(
        &self,
        sender_id: i64,
        receiver_id: i64,
        content: &str,
    ) -> Result<Message, ClientError>;

    async fn fetch_conversations(&self, user_id: i64) -> Result<Vec<ConversationSummary>, ClientError>;

    async fn fetch_username_by_id(&self, user_id: i64) -> Result<String, ClientError>;

    async fn search_users(&self, query: &str) -> Result<Vec<User>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpMessageApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMessageApi {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpMessageApi {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl MessageApi for HttpMessageApi {
    async fn fetch_messages_between_users(
        &self,
        sender_id: i64,
        receiver_id: i64,
    ) -> Result<Vec<Message>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("message/{}/{}", sender_id, receiver_id)))
            .send()
            .await?;
        decode(response).await
    }

    async fn send_message(
        &self,
        sender_id: i64,
        receiver_id: i64,
        content: &str,
    ) -> Result<Message, ClientError> {
        let body = SendMessageRequest {
            sender_id,
            receiver_id,
            content: content.to_string(),
        };
        let response = self
            .client
            .post(self.url("message/send"))
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    async fn fetch_conversations(&self, user_id: i64) -> Result<Vec<ConversationSummary>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("message/conversations/{}", user_id)))
            .send()
            .await?;
        decode(response).await
    }

    async fn fetch_username_by_id(&self, user_id: i64) -> Result<String, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("user/{}", user_id)))
            .send()
            .await?;
        let user: User = decode(response).await?;
        Ok(user.username)
    }

    async fn search_users(&self, query: &str) -> Result<Vec<User>, ClientError> {
        if query.trim().is_empty() {
            return Err(ClientError::EmptyQuery);
        }
        let response = self
            .client
            .get(self.url("user/search"))
            .query(&[("query", query)])
            .send()
            .await?;
        decode(response).await
    }
}
