use serde::{Deserialize, Serialize};

/// Document reference as listed by `GET /api/documents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDto {
    pub document_id: String,
    pub title: String,
    /// ISO-8601 string; parsed on the client for relative display
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub documents: Vec<DocumentDto>,
}

/// Body of `POST /api/documents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDocumentRequest {
    pub document_id: String,
}

/// Reply of `POST /api/documents`; only the status is relied upon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDocumentResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub document: Option<DocumentDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_list() {
        let raw = r#"{"documents": [
            {"id": 1, "document_id": "ABC123", "title": "Roadmap", "last_updated": "2024-03-15T14:02:26"}
        ]}"#;
        let list: DocumentListResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            list.documents,
            vec![DocumentDto {
                document_id: "ABC123".into(),
                title: "Roadmap".into(),
                last_updated: "2024-03-15T14:02:26".into(),
            }]
        );
    }

    #[test]
    fn test_empty_add_reply_is_accepted() {
        let resp: AddDocumentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, AddDocumentResponse::default());
    }
}
