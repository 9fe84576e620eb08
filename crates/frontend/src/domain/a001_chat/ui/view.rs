//! Chat - View Component

use super::document_list::{DocumentSidebar, TITLE_DISPLAY_LEN};
use super::message_item::MessageItem;
use super::overlays::{ErrorOverlay, LoadingOverlay, NoticeToast};
use super::view_model::ChatVm;
use crate::domain::a001_chat::state::Action;
use crate::shared::icons::icon;
use crate::shared::text_utils::truncate_text;
use chrono::Utc;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
#[allow(non_snake_case)]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let messages = Memo::new(move |_| vm.state.with(|s| s.messages.clone()));
    let in_flight = Memo::new(move |_| vm.state.with(|s| s.send_in_flight));
    let active_title = Memo::new(move |_| {
        vm.state.with(|s| {
            s.selected_document_id.as_ref().map(|id| {
                s.selected_document()
                    .map(|doc| doc.title.clone())
                    .unwrap_or_else(|| id.clone())
            })
        })
    });

    // Keep the newest turn (or the typing indicator) in view
    Effect::new(move |_| {
        messages.with(|m| m.len());
        in_flight.get();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = move || {
        let text = vm.state.with_untracked(|s| s.draft.clone());
        vm.dispatch(Action::SendMessage {
            text,
            at: Utc::now(),
        });
    };

    vm.dispatch(Action::Start);

    view! {
        <div class="chat-app" style="height: 100vh; display: flex;">
            <DocumentSidebar vm=vm />

            <main style="flex: 1; min-width: 0; height: 100%; display: flex; flex-direction: column; padding: 20px;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);">
                    <h2 style="font-size: 18px; font-weight: bold;">"Document Assistant"</h2>
                    {move || {
                        active_title
                            .get()
                            .map(|title| {
                                view! {
                                    <div
                                        id="documentIndicator"
                                        style="display: flex; align-items: center; gap: 6px; font-size: 14px; color: var(--colorNeutralForeground3);"
                                    >
                                        {icon("document")}
                                        {format!("Using: {}", truncate_text(&title, TITLE_DISPLAY_LEN))}
                                    </div>
                                }
                            })
                    }}
                </div>

                <div
                    id="chatMessages"
                    node_ref=messages_container_ref
                    style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
                >
                    <For
                        each=move || messages.get()
                        key=|msg| msg.id
                        let:msg
                    >
                        <MessageItem message=msg />
                    </For>

                    <Show when=move || in_flight.get()>
                        <div
                            id="typingIndicator"
                            style="align-self: flex-start; display: flex; align-items: center; gap: 8px; color: var(--colorNeutralForeground3); font-size: 13px;"
                        >
                            {icon("robot")}
                            <span>"AI is typing..."</span>
                        </div>
                    </Show>
                </div>

                <div style="display: flex; gap: 8px; align-items: flex-end;">
                    <textarea
                        id="messageInput"
                        rows="2"
                        placeholder="Type your message... (Enter to send, Shift+Enter for a new line)"
                        style="flex: 1; min-height: 44px; max-height: 120px; padding: 8px 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; resize: vertical; font-family: inherit;"
                        prop:value=move || vm.state.with(|s| s.draft.clone())
                        on:input=move |ev| vm.dispatch(Action::DraftChanged(event_target_value(&ev)))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send();
                            }
                        }
                    ></textarea>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=in_flight
                        on_click=move |_| handle_send()
                    >
                        {icon("send")}
                        {move || if in_flight.get() { " Sending..." } else { " Send" }}
                    </Button>
                </div>
            </main>

            <ErrorOverlay vm=vm />
            <LoadingOverlay vm=vm />
            <NoticeToast vm=vm />
        </div>
    }
}
