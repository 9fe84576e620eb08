//! Chat - error dialog, loading overlay and success toast

use super::view_model::ChatVm;
use crate::domain::a001_chat::state::{Action, Notice};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexJustify, Spinner};

const BACKDROP_STYLE: &str = "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); display: flex; align-items: center; justify-content: center; z-index: 1000;";
const SURFACE_STYLE: &str = "min-width: 320px; max-width: 480px; padding: 20px; border-radius: 8px; background: var(--colorNeutralBackground1); box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);";

/// Blocking error surface; stays until the user closes it
#[component]
#[allow(non_snake_case)]
pub fn ErrorOverlay(vm: ChatVm) -> impl IntoView {
    let error = Memo::new(move |_| vm.state.with(|s| s.error.clone()));

    view! {
        {move || {
            error.get().map(|message| {
                view! {
                    <div style=BACKDROP_STYLE>
                        <div role="alertdialog" style=SURFACE_STYLE>
                            <div style="font-size: 16px; font-weight: 600; margin-bottom: 12px; color: var(--color-error);">
                                "⚠ Error"
                            </div>
                            <div id="errorMessage" style="margin-bottom: 16px; white-space: pre-wrap;">
                                {message}
                            </div>
                            <Flex justify=FlexJustify::End>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| vm.dispatch(Action::DismissError)
                                >
                                    "Close"
                                </Button>
                            </Flex>
                        </div>
                    </div>
                }
            })
        }}
    }
}

/// Shown while a document is being added
#[component]
#[allow(non_snake_case)]
pub fn LoadingOverlay(vm: ChatVm) -> impl IntoView {
    let adding = Memo::new(move |_| vm.state.with(|s| s.adding_document));

    view! {
        <Show when=move || adding.get()>
            <div style=BACKDROP_STYLE>
                <div style=SURFACE_STYLE>
                    <Flex justify=FlexJustify::Center>
                        <Spinner />
                    </Flex>
                    <div style="margin-top: 12px; text-align: center;">
                        "Adding document to the knowledge base..."
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Transient success notice in the top-right corner
#[component]
#[allow(non_snake_case)]
pub fn NoticeToast(vm: ChatVm) -> impl IntoView {
    let notice = Memo::new(move |_| vm.state.with(|s| s.notice.clone()));

    view! {
        {move || {
            notice.get().map(|Notice { id, text }| {
                view! {
                    <div
                        class="alert alert-success"
                        role="status"
                        style="position: fixed; top: 20px; right: 20px; z-index: 9999; min-width: 300px; padding: 12px 16px; display: flex; justify-content: space-between; align-items: center; gap: 8px; border-radius: 8px; background: var(--colorPaletteGreenBackground2, #dff6dd); border: 1px solid var(--colorPaletteGreenBorder1, #9fd89f);"
                    >
                        <span>{text}</span>
                        <button
                            type="button"
                            style="background: none; border: none; cursor: pointer; padding: 2px;"
                            on:click=move |_| vm.dispatch(Action::DismissNotice(id))
                        >
                            {icon("close")}
                        </button>
                    </div>
                }
            })
        }}
    }
}
