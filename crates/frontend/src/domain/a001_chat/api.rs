//! Chat backend API
//!
//! [`ChatApi`] is the seam between the request runner and the network;
//! [`HttpChatApi`] talks to the real backend over `fetch`.

use crate::shared::api_utils::{api_base, ApiError};
use async_trait::async_trait;
use contracts::domain::a001_chat::{ChatHistoryResponse, ChatRequest, ChatResponse};
use contracts::domain::a002_document::{
    AddDocumentRequest, AddDocumentResponse, DocumentListResponse,
};
use contracts::shared::ErrorResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const CHAT_PATH: &str = "/api/chat";
const CHAT_HISTORY_PATH: &str = "/api/chat/history";
const DOCUMENTS_PATH: &str = "/api/documents";
const CLEAR_HISTORY_PATH: &str = "/api/clear-history";

#[async_trait(?Send)]
pub trait ChatApi {
    /// `POST /api/chat`
    async fn send_chat(&self, req: &ChatRequest) -> Result<ChatResponse, ApiError>;

    /// `POST /api/documents`
    async fn add_document(&self, req: &AddDocumentRequest)
        -> Result<AddDocumentResponse, ApiError>;

    /// `GET /api/documents`
    async fn list_documents(&self) -> Result<DocumentListResponse, ApiError>;

    /// `GET /api/chat/history`
    async fn fetch_history(&self) -> Result<ChatHistoryResponse, ApiError>;

    /// `POST /api/clear-history`
    async fn clear_history(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpChatApi {
    base: String,
}

impl Default for HttpChatApi {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl HttpChatApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait(?Send)]
impl ChatApi for HttpChatApi {
    async fn send_chat(&self, req: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let response = Request::post(&self.url(CHAT_PATH))
            .json(req)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn add_document(
        &self,
        req: &AddDocumentRequest,
    ) -> Result<AddDocumentResponse, ApiError> {
        let response = Request::post(&self.url(DOCUMENTS_PATH))
            .json(req)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_ok(response).await?;
        // only the status matters; tolerate an empty or foreign body
        Ok(response.json().await.unwrap_or_default())
    }

    async fn list_documents(&self) -> Result<DocumentListResponse, ApiError> {
        let response = Request::get(&self.url(DOCUMENTS_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn fetch_history(&self) -> Result<ChatHistoryResponse, ApiError> {
        let response = Request::get(&self.url(CHAT_HISTORY_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn clear_history(&self) -> Result<(), ApiError> {
        let response = Request::post(&self.url(CLEAR_HISTORY_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_ok(response).await.map(|_| ())
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the `error` text
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| body.error);
    Err(ApiError::Status { status, message })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_use_base() {
        let api = HttpChatApi::new("http://localhost:5000");
        assert_eq!(api.url(CHAT_PATH), "http://localhost:5000/api/chat");
        assert_eq!(
            api.url(CHAT_HISTORY_PATH),
            "http://localhost:5000/api/chat/history"
        );

        let same_origin = HttpChatApi::new("");
        assert_eq!(same_origin.url(CLEAR_HISTORY_PATH), "/api/clear-history");
    }

    #[test]
    fn test_default_client_uses_configured_base() {
        let api = HttpChatApi::default();
        assert_eq!(api.url(DOCUMENTS_PATH), format!("{}/api/documents", api_base()));
    }
}
