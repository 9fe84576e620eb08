use crate::domain::a001_chat::ui::ChatPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ChatPage />
    }
}
