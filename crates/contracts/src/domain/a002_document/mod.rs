pub mod dto;

pub use dto::{AddDocumentRequest, AddDocumentResponse, DocumentDto, DocumentListResponse};
