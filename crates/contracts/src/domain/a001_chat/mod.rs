pub mod dto;

pub use dto::{ChatHistoryEntry, ChatHistoryResponse, ChatRequest, ChatResponse};
