//! Todo Widget Entry Point

mod models;
mod config;
mod ids;
mod edit_session;
mod todo_list;
mod context;
mod logging;
mod components;

use components::TodoApp;
use config::TodoConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// The element the widget takes over, if the page has one
fn find_container(selector: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

fn main() {
    console_error_panic_hook::set_once();

    let config = TodoConfig::default();
    logging::init(config.log_level);

    let Some(container) = find_container(&config.container_selector) else {
        log::warn!("[APP] no element matches {}, not mounting", config.container_selector);
        return;
    };

    leptos::mount::mount_to(container, move || view! { <TodoApp config=config /> }).forget();
}
