mod app;
mod core;
mod features;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("failed to initialize logging: {}", e).into());
    }

    leptos::mount::mount_to_body(App);
}
