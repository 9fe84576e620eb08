//! Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: ChatVm, dispatches actions and runs commands
//! - view.rs: Main component ChatPage
//! - document_list.rs: Sidebar with the document picker
//! - message_item.rs: One transcript entry
//! - overlays.rs: Error dialog, loading overlay, success toast

mod document_list;
mod message_item;
mod overlays;
mod view;
mod view_model;

pub use document_list::{DocumentSidebar, TITLE_DISPLAY_LEN};
pub use message_item::MessageItem;
pub use view::ChatPage;
pub use view_model::ChatVm;
