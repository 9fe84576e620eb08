pub mod app;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log_level(option_env!("CHAT_LOG_LEVEL")));
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

fn log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(log::Level::Debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(None), log::Level::Debug);
        assert_eq!(log_level(Some("warn")), log::Level::Warn);
        assert_eq!(log_level(Some("ERROR")), log::Level::Error);
        assert_eq!(log_level(Some("loud")), log::Level::Debug);
    }
}
