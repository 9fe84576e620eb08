//! Chat - View Model

use crate::domain::a001_chat::api::HttpChatApi;
use crate::domain::a001_chat::runner::perform;
use crate::domain::a001_chat::state::{Action, ChatState, Command};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a success notice stays on screen
const NOTICE_TTL_MS: u32 = 3000;

/// Holds the whole widget state; passed by value to every component
#[derive(Clone, Copy)]
pub struct ChatVm {
    pub state: RwSignal<ChatState>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ChatState::default()),
        }
    }

    /// Run the reducer, then execute whatever it asked for
    pub fn dispatch(&self, action: Action) {
        let mut commands = Vec::new();
        self.state.update(|state| commands = state.update(action));
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&self, command: Command) {
        let vm = *self;
        match command {
            Command::Request(request) => spawn_local(async move {
                let api = HttpChatApi::default();
                if let Some(action) = perform(&api, request).await {
                    vm.dispatch(action);
                }
            }),
            Command::ExpireNotice { id } => spawn_local(async move {
                TimeoutFuture::new(NOTICE_TTL_MS).await;
                vm.dispatch(Action::DismissNotice(id));
            }),
        }
    }
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}
