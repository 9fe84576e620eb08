//! Chat - single transcript entry

use crate::domain::a001_chat::state::{ChatMessage, Sender};
use crate::shared::date_utils::format_time;
use crate::shared::icons::icon;
use crate::shared::text_utils::format_message;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn MessageItem(message: ChatMessage) -> impl IntoView {
    let is_user = message.sender == Sender::User;
    let html = format_message(&message.text);
    let time = format_time(&message.timestamp);

    view! {
        <div
            class=message.sender.css_class()
            style=if is_user {
                "display: flex; flex-direction: row-reverse; gap: 10px; align-self: flex-end; max-width: 75%;"
            } else {
                "display: flex; gap: 10px; align-self: flex-start; max-width: 75%;"
            }
        >
            <div
                class="message-avatar"
                style="flex: none; width: 32px; height: 32px; border-radius: 50%; display: flex; align-items: center; justify-content: center; background: var(--colorNeutralBackground3);"
            >
                {if is_user { icon("user") } else { icon("robot") }}
            </div>
            <div
                class="message-content"
                style=if is_user {
                    "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                } else {
                    "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                }
            >
                <div class="message-text" inner_html=html></div>
                <div class="message-time" style="font-size: 11px; opacity: 0.7; margin-top: 6px;">
                    {time}
                </div>
            </div>
        </div>
    }
}
