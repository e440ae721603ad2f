// Crown Screens landing page - browser entry
// (c)2024 Crown Screens Software

use crown_page::components::PageShell;
use crown_page::styles::PAGE_CSS;
use crown_page::types::PageContent;
use leptos::prelude::*;

/// Installs logging and the panic hook, then mounts [`App`] into `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();

    // authoring mistakes are reported, the page still mounts
    if let Err(err) = PageContent::crown_screens().validate() {
        tracing::error!(%err, "landing content failed validation");
    }

    tracing::info!("mounting Crown Screens landing page");
    leptos::mount::mount_to_body(App);
}

/// Routes `tracing` events (via its `log` feature) to the devtools console.
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // ignore if a logger is already installed
    let _ = console_log::init_with_level(level);
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <style inner_html=PAGE_CSS></style>
        <PageShell />
    }
}
