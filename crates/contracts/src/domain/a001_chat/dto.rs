use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Active document; serialized as `null` when nothing is selected
    pub document_id: Option<String>,
}

/// Successful reply of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub message_id: Option<i64>,
}

/// One stored exchange, as returned by `GET /api/chat/history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_message: String,
    pub ai_response: String,
    /// ISO-8601, usually without an offset (server time in UTC)
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    #[serde(default)]
    pub messages: Vec<ChatHistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_document_sends_null() {
        let req = ChatRequest {
            message: "hi".into(),
            document_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"message": "hi", "document_id": null}));
    }

    #[test]
    fn test_history_tolerates_extra_fields() {
        let raw = r#"{
            "messages": [
                {
                    "id": 7,
                    "user_message": "What is in the doc?",
                    "ai_response": "A summary.",
                    "timestamp": "2024-03-15T14:02:26.123456",
                    "session_id": "abc"
                },
                {"user_message": "And?", "ai_response": "More."}
            ]
        }"#;
        let history: ChatHistoryResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(history.messages.len(), 2);
        assert_eq!(history.messages[0].id, Some(7));
        assert_eq!(history.messages[1].timestamp, None);
    }

    #[test]
    fn test_response_without_message_id() {
        let resp: ChatResponse = serde_json::from_str(r#"{"response": "ok"}"#).unwrap();
        assert_eq!(resp.response, "ok");
        assert_eq!(resp.message_id, None);
    }
}
