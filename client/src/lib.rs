//! # eventboard-client
//!
//! Leptos + WASM single-page shell for the event board: the route table,
//! the session-marker navigation guard, and the bootstrap that mounts the
//! app.
//!
//! The routing and session modules are plain Rust and compile natively for
//! tests; only the `csr` feature pulls in the browser bindings.

pub mod app;
pub mod pages;
pub mod routing;
pub mod session;

/// Browser entry point: install panic and log hooks, then mount `App` on
/// the `#app` element (or `<body>` when the page has none).
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let mount_point = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match mount_point {
        Some(el) => leptos::mount::mount_to(el, app::App).forget(),
        None => {
            log::warn!("#app element missing; mounting on <body>");
            leptos::mount::mount_to_body(app::App);
        }
    }
}
