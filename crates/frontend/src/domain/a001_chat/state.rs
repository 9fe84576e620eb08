//! Chat client state and its single update function
//!
//! Every user event and every request outcome is an [`Action`]. The reducer
//! mutates [`ChatState`] and answers with the [`Command`]s the shell has to
//! execute (HTTP requests, notice timers). Nothing here touches the DOM or
//! the network.

use super::document_ref::extract_document_id;
use crate::shared::date_utils::parse_timestamp;
use chrono::{DateTime, Utc};
use contracts::domain::a001_chat::{ChatHistoryEntry, ChatRequest};
use contracts::domain::a002_document::{AddDocumentRequest, DocumentDto};

pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI assistant. Add a Google Doc from the \
sidebar and select it to ask questions about its content, or just start chatting.";

pub const SEND_FAILED: &str = "Failed to send message. Please try again.";
pub const ADD_DOCUMENT_FAILED: &str =
    "Failed to add document. Please check the document ID or URL.";
pub const CLEAR_HISTORY_FAILED: &str = "Failed to clear chat history. Please try again.";
pub const DOCUMENT_ADDED: &str = "Document added successfully!";
pub const HISTORY_CLEARED: &str = "Chat history cleared successfully!";

/// Id of the static welcome entry; it is always `messages[0]`
pub const WELCOME_ID: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// CSS class used to style the turn
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "message user-message",
            Sender::Assistant => "message ai-message",
        }
    }
}

/// One turn of the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Transient success toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Widget mounted: load documents and history
    Start,
    DraftChanged(String),
    DocumentInputChanged(String),
    SendMessage { text: String, at: DateTime<Utc> },
    ChatReplied { text: String, at: DateTime<Utc> },
    ChatFailed { error: String },
    AddDocument(String),
    DocumentAdded,
    DocumentAddFailed { error: String },
    SelectDocument(String),
    NewChat,
    /// `confirmed` is the answer of the interactive confirmation
    ClearHistory { confirmed: bool },
    HistoryCleared,
    ClearHistoryFailed { error: String },
    LoadDocuments,
    DocumentsLoaded(Vec<DocumentDto>),
    LoadChatHistory,
    HistoryLoaded {
        entries: Vec<ChatHistoryEntry>,
        at: DateTime<Utc>,
    },
    DismissError,
    DismissNotice(u64),
}

/// HTTP call the shell has to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    SendChat(ChatRequest),
    AddDocument(AddDocumentRequest),
    ListDocuments,
    FetchHistory,
    ClearHistory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Request(Request),
    /// Dismiss notice `id` once it has been shown long enough
    ExpireNotice { id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub documents: Vec<DocumentDto>,
    pub selected_document_id: Option<String>,
    pub send_in_flight: bool,
    pub adding_document: bool,
    pub draft: String,
    pub document_input: String,
    pub error: Option<String>,
    pub notice: Option<Notice>,
    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl ChatState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: WELCOME_ID,
                sender: Sender::Assistant,
                text: WELCOME_MESSAGE.to_string(),
                timestamp: now,
            }],
            documents: Vec::new(),
            selected_document_id: None,
            send_in_flight: false,
            adding_document: false,
            draft: String::new(),
            document_input: String::new(),
            error: None,
            notice: None,
            next_id: WELCOME_ID + 1,
        }
    }

    pub fn is_selected(&self, document_id: &str) -> bool {
        self.selected_document_id.as_deref() == Some(document_id)
    }

    pub fn selected_document(&self) -> Option<&DocumentDto> {
        let id = self.selected_document_id.as_deref()?;
        self.documents.iter().find(|doc| doc.document_id == id)
    }

    pub fn update(&mut self, action: Action) -> Vec<Command> {
        match action {
            Action::Start => vec![
                Command::Request(Request::ListDocuments),
                Command::Request(Request::FetchHistory),
            ],
            Action::DraftChanged(text) => {
                self.draft = text;
                vec![]
            }
            Action::DocumentInputChanged(text) => {
                self.document_input = text;
                vec![]
            }
            Action::SendMessage { text, at } => self.send_message(text, at),
            Action::ChatReplied { text, at } => {
                self.send_in_flight = false;
                self.push_message(Sender::Assistant, text, at);
                vec![]
            }
            Action::ChatFailed { error } => {
                // The optimistic user turn stays in the transcript.
                self.send_in_flight = false;
                self.error = Some(error);
                vec![]
            }
            Action::AddDocument(input) => self.add_document(&input),
            Action::DocumentAdded => {
                self.adding_document = false;
                self.document_input.clear();
                let mut commands = vec![Command::Request(Request::ListDocuments)];
                commands.push(self.show_notice(DOCUMENT_ADDED));
                commands
            }
            Action::DocumentAddFailed { error } => {
                self.adding_document = false;
                self.error = Some(error);
                vec![]
            }
            Action::SelectDocument(document_id) => {
                self.selected_document_id = Some(document_id);
                vec![]
            }
            Action::NewChat => {
                self.new_chat();
                vec![]
            }
            Action::ClearHistory { confirmed } => {
                if !confirmed {
                    return vec![];
                }
                vec![Command::Request(Request::ClearHistory)]
            }
            Action::HistoryCleared => {
                self.new_chat();
                vec![self.show_notice(HISTORY_CLEARED)]
            }
            Action::ClearHistoryFailed { error } => {
                self.error = Some(error);
                vec![]
            }
            Action::LoadDocuments => vec![Command::Request(Request::ListDocuments)],
            Action::DocumentsLoaded(documents) => {
                self.documents = documents;
                vec![]
            }
            Action::LoadChatHistory => vec![Command::Request(Request::FetchHistory)],
            Action::HistoryLoaded { entries, at } => {
                self.replay_history(entries, at);
                vec![]
            }
            Action::DismissError => {
                self.error = None;
                vec![]
            }
            Action::DismissNotice(id) => {
                if self.notice.as_ref().is_some_and(|n| n.id == id) {
                    self.notice = None;
                }
                vec![]
            }
        }
    }

    fn send_message(&mut self, text: String, at: DateTime<Utc>) -> Vec<Command> {
        let message = text.trim();
        if message.is_empty() || self.send_in_flight {
            return vec![];
        }
        let message = message.to_string();

        self.push_message(Sender::User, message.clone(), at);
        self.draft.clear();
        self.send_in_flight = true;

        vec![Command::Request(Request::SendChat(ChatRequest {
            message,
            document_id: self.selected_document_id.clone(),
        }))]
    }

    fn add_document(&mut self, input: &str) -> Vec<Command> {
        let input = input.trim();
        if input.is_empty() {
            return vec![];
        }

        self.adding_document = true;
        vec![Command::Request(Request::AddDocument(AddDocumentRequest {
            document_id: extract_document_id(input),
        }))]
    }

    fn new_chat(&mut self) {
        self.messages.truncate(1);
        self.selected_document_id = None;
    }

    fn replay_history(&mut self, entries: Vec<ChatHistoryEntry>, at: DateTime<Utc>) {
        self.messages.truncate(1);
        for entry in entries {
            let ts = entry
                .timestamp
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or(at);
            self.push_message(Sender::User, entry.user_message, ts);
            self.push_message(Sender::Assistant, entry.ai_response, ts);
        }
    }

    fn push_message(&mut self, sender: Sender, text: String, timestamp: DateTime<Utc>) {
        let id = self.take_id();
        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            timestamp,
        });
    }

    fn show_notice(&mut self, text: &str) -> Command {
        let id = self.take_id();
        self.notice = Some(Notice {
            id,
            text: text.to_string(),
        });
        Command::ExpireNotice { id }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
