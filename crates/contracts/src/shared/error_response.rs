use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint on a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error": "Document already exists in knowledge base"}"#)
                .unwrap();
        assert_eq!(body.error, "Document already exists in knowledge base");
    }
}
