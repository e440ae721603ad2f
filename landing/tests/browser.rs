//! In-browser checks of the mount gate and the FAQ accordion.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use crown_landing::App;
use crown_page::content::FAQS;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

fn open_question() -> Option<String> {
    document()
        .query_selector(".faq-item.open .faq-question-text")
        .unwrap()
        .and_then(|el| el.text_content())
}

fn click_question(index: u32) {
    document()
        .query_selector_all(".faq-question")
        .unwrap()
        .item(index)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

async fn next_tick() {
    TimeoutFuture::new(0).await;
}

#[wasm_bindgen_test]
async fn gate_opens_after_first_tick_then_accordion_toggles() {
    leptos::mount::mount_to_body(App);

    // effects have not run yet
    assert_eq!(count(".nav"), 0);
    assert_eq!(count(".faq-item"), 0);

    next_tick().await;
    assert_eq!(count(".nav"), 1);
    assert_eq!(count(".faq-item"), FAQS.len() as u32);
    assert_eq!(open_question().as_deref(), Some(FAQS[0].question));

    click_question(2);
    next_tick().await;
    assert_eq!(count(".faq-item.open"), 1);
    assert_eq!(open_question().as_deref(), Some(FAQS[2].question));

    click_question(2);
    next_tick().await;
    assert_eq!(count(".faq-item.open"), 0);

    click_question(1);
    next_tick().await;
    assert_eq!(open_question().as_deref(), Some(FAQS[1].question));
}
