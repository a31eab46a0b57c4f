//! Browser entry point: mounts the app and installs console logging.

#[cfg(feature = "csr")]
fn main() {
    use relaychat::app::App;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }

    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
