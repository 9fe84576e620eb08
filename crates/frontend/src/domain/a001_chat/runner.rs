//! Executes [`Request`]s against a [`ChatApi`] and maps outcomes to [`Action`]s

use super::api::ChatApi;
use super::state::{Action, Request, ADD_DOCUMENT_FAILED, CLEAR_HISTORY_FAILED, SEND_FAILED};
use chrono::Utc;

/// Perform one request
///
/// Returns the action to feed back into the reducer. Background loads
/// (documents, history) only log their failures and return `None`.
pub async fn perform<A>(api: &A, request: Request) -> Option<Action>
where
    A: ChatApi + ?Sized,
{
    match request {
        Request::SendChat(req) => {
            log::debug!("chat: sending message (document: {:?})", req.document_id);
            let action = match api.send_chat(&req).await {
                Ok(resp) => Action::ChatReplied {
                    text: resp.response,
                    at: Utc::now(),
                },
                Err(e) => {
                    log::warn!("chat: send failed: {}", e);
                    Action::ChatFailed {
                        error: e.user_message(SEND_FAILED),
                    }
                }
            };
            Some(action)
        }
        Request::AddDocument(req) => {
            log::debug!("chat: adding document {}", req.document_id);
            let action = match api.add_document(&req).await {
                Ok(_) => Action::DocumentAdded,
                Err(e) => {
                    log::warn!("chat: add document failed: {}", e);
                    Action::DocumentAddFailed {
                        error: e.user_message(ADD_DOCUMENT_FAILED),
                    }
                }
            };
            Some(action)
        }
        Request::ClearHistory => {
            let action = match api.clear_history().await {
                Ok(()) => Action::HistoryCleared,
                Err(e) => {
                    log::warn!("chat: clear history failed: {}", e);
                    Action::ClearHistoryFailed {
                        error: e.user_message(CLEAR_HISTORY_FAILED),
                    }
                }
            };
            Some(action)
        }
        Request::ListDocuments => match api.list_documents().await {
            Ok(resp) => Some(Action::DocumentsLoaded(resp.documents)),
            Err(e) => {
                log::error!("Failed to load documents: {}", e);
                None
            }
        },
        Request::FetchHistory => match api.fetch_history().await {
            Ok(resp) => Some(Action::HistoryLoaded {
                entries: resp.messages,
                at: Utc::now(),
            }),
            Err(e) => {
                log::error!("Failed to load chat history: {}", e);
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_chat::state::{ChatState, Command, Sender};
    use crate::shared::api_utils::ApiError;
    use async_trait::async_trait;
    use contracts::domain::a001_chat::{
        ChatHistoryEntry, ChatHistoryResponse, ChatRequest, ChatResponse,
    };
    use contracts::domain::a002_document::{
        AddDocumentRequest, AddDocumentResponse, DocumentDto, DocumentListResponse,
    };
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Canned backend that records every call
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        fail_with: Option<ApiError>,
        reply: String,
        documents: Vec<DocumentDto>,
        history: Vec<ChatHistoryEntry>,
    }

    impl FakeApi {
        fn failing(err: ApiError) -> Self {
            Self {
                fail_with: Some(err),
                ..Default::default()
            }
        }

        fn outcome<T>(&self, call: String, ok: T) -> Result<T, ApiError> {
            self.calls.borrow_mut().push(call);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(ok),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ChatApi for FakeApi {
        async fn send_chat(&self, req: &ChatRequest) -> Result<ChatResponse, ApiError> {
            self.outcome(
                format!("chat:{}", req.message),
                ChatResponse {
                    response: self.reply.clone(),
                    message_id: Some(1),
                },
            )
        }

        async fn add_document(
            &self,
            req: &AddDocumentRequest,
        ) -> Result<AddDocumentResponse, ApiError> {
            self.outcome(
                format!("add:{}", req.document_id),
                AddDocumentResponse::default(),
            )
        }

        async fn list_documents(&self) -> Result<DocumentListResponse, ApiError> {
            self.outcome(
                "list".to_string(),
                DocumentListResponse {
                    documents: self.documents.clone(),
                },
            )
        }

        async fn fetch_history(&self) -> Result<ChatHistoryResponse, ApiError> {
            self.outcome(
                "history".to_string(),
                ChatHistoryResponse {
                    messages: self.history.clone(),
                },
            )
        }

        async fn clear_history(&self) -> Result<(), ApiError> {
            self.outcome("clear".to_string(), ())
        }
    }

    /// Feed an action through the reducer and run all resulting requests
    fn drive(state: &mut ChatState, api: &FakeApi, action: Action) {
        let mut pending = vec![action];
        while let Some(action) = pending.pop() {
            for command in state.update(action) {
                if let Command::Request(request) = command {
                    if let Some(next) = block_on(perform(api, request)) {
                        pending.push(next);
                    }
                }
            }
        }
    }

    fn server_error(message: &str) -> ApiError {
        ApiError::Status {
            status: 500,
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_send_success_adds_one_assistant_turn() {
        let api = FakeApi {
            reply: "It is a roadmap.".into(),
            ..Default::default()
        };
        let mut state = ChatState::default();

        drive(
            &mut state,
            &api,
            Action::SendMessage {
                text: "What is this doc?".into(),
                at: Utc::now(),
            },
        );

        assert_eq!(api.calls(), vec!["chat:What is this doc?"]);
        let turns: Vec<(Sender, &str)> = state
            .messages
            .iter()
            .skip(1)
            .map(|m| (m.sender, m.text.as_str()))
            .collect();
        assert_eq!(
            turns,
            vec![
                (Sender::User, "What is this doc?"),
                (Sender::Assistant, "It is a roadmap."),
            ]
        );
        assert!(!state.send_in_flight);
    }

    #[test]
    fn test_send_failure_surfaces_server_error() {
        let api = FakeApi::failing(server_error("Failed to get AI response: quota"));
        let mut state = ChatState::default();

        drive(
            &mut state,
            &api,
            Action::SendMessage {
                text: "hi".into(),
                at: Utc::now(),
            },
        );

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1].sender, Sender::User);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to get AI response: quota")
        );
        assert!(!state.send_in_flight);
    }

    #[test]
    fn test_send_network_failure_uses_fallback() {
        let api = FakeApi::failing(ApiError::Network("offline".into()));
        let action = block_on(perform(
            &api,
            Request::SendChat(ChatRequest {
                message: "hi".into(),
                document_id: None,
            }),
        ));
        assert_eq!(
            action,
            Some(Action::ChatFailed {
                error: SEND_FAILED.into()
            })
        );
    }

    #[test]
    fn test_add_document_then_refresh() {
        let api = FakeApi {
            documents: vec![DocumentDto {
                document_id: "ABC123".into(),
                title: "Roadmap".into(),
                last_updated: "2024-03-15T14:02:26".into(),
            }],
            ..Default::default()
        };
        let mut state = ChatState::default();

        drive(
            &mut state,
            &api,
            Action::AddDocument("https://docs.google.com/document/d/ABC123/edit".into()),
        );

        assert_eq!(api.calls(), vec!["add:ABC123", "list"]);
        assert_eq!(state.documents.len(), 1);
        assert!(state.notice.is_some());
        assert!(!state.adding_document);
    }

    #[test]
    fn test_add_document_failure() {
        let api = FakeApi::failing(ApiError::Status {
            status: 400,
            message: None,
        });
        let mut state = ChatState::default();

        drive(&mut state, &api, Action::AddDocument("ABC123".into()));

        assert_eq!(api.calls(), vec!["add:ABC123"]);
        assert_eq!(state.error.as_deref(), Some(ADD_DOCUMENT_FAILED));
        assert!(!state.adding_document);
    }

    #[test]
    fn test_passive_load_failures_are_silent() {
        let api = FakeApi::failing(ApiError::Network("offline".into()));
        let mut state = ChatState::default();
        let before = state.clone();

        drive(&mut state, &api, Action::Start);

        assert_eq!(api.calls().len(), 2);
        assert_eq!(state, before);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_start_replays_history() {
        let api = FakeApi {
            history: vec![ChatHistoryEntry {
                id: Some(1),
                user_message: "q".into(),
                ai_response: "a".into(),
                timestamp: None,
            }],
            ..Default::default()
        };
        let mut state = ChatState::default();

        drive(&mut state, &api, Action::Start);

        assert_eq!(state.messages.len(), 3);
        assert_eq!(state.messages[2].text, "a");
    }

    #[test]
    fn test_clear_history_flow() {
        let api = FakeApi::default();
        let mut state = ChatState::default();
        drive(
            &mut state,
            &api,
            Action::SendMessage {
                text: "hi".into(),
                at: Utc::now(),
            },
        );

        drive(&mut state, &api, Action::ClearHistory { confirmed: false });
        assert_eq!(api.calls(), vec!["chat:hi"]);

        drive(&mut state, &api, Action::ClearHistory { confirmed: true });
        assert_eq!(api.calls(), vec!["chat:hi", "clear"]);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_clear_history_failure() {
        let api = FakeApi::failing(ApiError::Network("offline".into()));
        let action = block_on(perform(&api, Request::ClearHistory));
        assert_eq!(
            action,
            Some(Action::ClearHistoryFailed {
                error: CLEAR_HISTORY_FAILED.into()
            })
        );
    }
}
