//! Chat - sidebar with the document picker

use super::view_model::ChatVm;
use crate::domain::a001_chat::state::Action;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::text_utils::truncate_text;
use chrono::{DateTime, Utc};
use contracts::domain::a002_document::DocumentDto;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Document titles are cut to this many characters in the list
pub const TITLE_DISPLAY_LEN: usize = 30;

const CONFIRM_CLEAR: &str = "Are you sure you want to clear your chat history?";

/// Row identity for the keyed list; a refreshed title or date rebuilds the row
fn document_row_key(doc: &DocumentDto) -> (String, String, String) {
    (
        doc.document_id.clone(),
        doc.title.clone(),
        doc.last_updated.clone(),
    )
}

#[component]
#[allow(non_snake_case)]
pub fn DocumentSidebar(vm: ChatVm) -> impl IntoView {
    let documents = Memo::new(move |_| vm.state.with(|s| s.documents.clone()));
    let selected = Memo::new(move |_| vm.state.with(|s| s.selected_document_id.clone()));

    let handle_add = move || {
        let input = vm.state.with_untracked(|s| s.document_input.clone());
        vm.dispatch(Action::AddDocument(input));
    };

    let handle_clear = move || {
        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message(CONFIRM_CLEAR).unwrap_or(false)
            } else {
                false
            }
        };
        vm.dispatch(Action::ClearHistory { confirmed });
    };

    view! {
        <aside
            class="sidebar"
            style="width: 300px; flex: none; height: 100%; display: flex; flex-direction: column; gap: 16px; padding: 16px; border-right: 1px solid var(--colorNeutralStroke2); background: var(--colorNeutralBackground2);"
        >
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.dispatch(Action::NewChat)
            >
                {icon("chat")}
                " New Chat"
            </Button>

            <div style="display: flex; flex-direction: column; gap: 8px;">
                <label class="form__label">"Add Google Doc"</label>
                <div style="display: flex; gap: 8px;">
                    <input
                        id="documentInput"
                        style="flex: 1; min-width: 0; height: 32px; padding: 4px 8px; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px;"
                        placeholder="Document ID or URL"
                        prop:value=move || vm.state.with(|s| s.document_input.clone())
                        on:input=move |ev| {
                            vm.dispatch(Action::DocumentInputChanged(event_target_value(&ev)))
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                handle_add();
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| handle_add()
                    >
                        {icon("plus")}
                    </Button>
                </div>
            </div>

            <div style="font-weight: 600;">"Documents"</div>
            <div
                id="documentsList"
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 6px;"
            >
                <Show
                    when=move || documents.with(|d| !d.is_empty())
                    fallback=|| {
                        view! {
                            <div class="empty-state" style="color: var(--colorNeutralForeground3); font-size: 14px;">
                                "No documents added yet"
                            </div>
                        }
                    }
                >
                    <For
                        each=move || documents.get()
                        key=document_row_key
                        let:doc
                    >
                        <DocumentItem vm=vm doc=doc selected=selected now=Utc::now() />
                    </For>
                </Show>
            </div>

            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| handle_clear()
            >
                {icon("delete")}
                " Clear History"
            </Button>
        </aside>
    }
}

#[component]
#[allow(non_snake_case)]
fn DocumentItem(
    vm: ChatVm,
    doc: DocumentDto,
    selected: Memo<Option<String>>,
    now: DateTime<Utc>,
) -> impl IntoView {
    let id_for_class = doc.document_id.clone();
    let id_for_click = doc.document_id.clone();
    let is_active = move || selected.get().as_deref() == Some(id_for_class.as_str());
    let title = truncate_text(&doc.title, TITLE_DISPLAY_LEN);
    let added = format!("Added {}", format_date(&doc.last_updated, now));

    view! {
        <div
            class="document-item"
            class:active=is_active
            data-document-id=doc.document_id.clone()
            title=doc.title.clone()
            on:click=move |_| vm.dispatch(Action::SelectDocument(id_for_click.clone()))
        >
            <div style="display: flex; justify-content: space-between; align-items: flex-start; gap: 8px;">
                <div style="flex: 1; min-width: 0;">
                    <div style="font-weight: 600;">{title}</div>
                    <small style="color: var(--colorNeutralForeground3);">{added}</small>
                </div>
                {icon("document")}
            </div>
        </div>
    }
}
