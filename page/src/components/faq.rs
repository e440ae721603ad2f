//! FAQ accordion view.
//!
//! Neither component here holds state. [`FaqSection`] receives the open
//! index from [`PageShell`](super::PageShell) and fans it out as one
//! `is_open` flag per [`DisclosureItem`]; clicks travel back up through
//! `on_toggle` carrying the entry's index.

use super::Icon;
use crate::types::{FaqEntry, IconKind};
use leptos::prelude::*;

#[component]
pub fn FaqSection(
    faqs: &'static [FaqEntry],
    /// Index of the expanded entry, if any
    open: Signal<Option<usize>>,
    /// Invoked with the index of the clicked question
    on_toggle: Callback<usize>,
) -> impl IntoView {
    view! {
        <section id="faq" class="section faq">
            <div class="container container-narrow">
                <div class="section-header">
                    <div class="section-icon">
                        <Icon kind=IconKind::MessageSquare size="40" />
                    </div>
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                    <p class="section-description">"Everything you need to know about Crown Screens."</p>
                </div>
                <div class="faq-panel">
                    {faqs
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let is_open = Signal::derive(move || open.get() == Some(index));
                            view! {
                                <DisclosureItem
                                    index=index
                                    entry=*entry
                                    is_open=is_open
                                    on_toggle=on_toggle
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One question row plus its collapsible answer.
///
/// The answer is always in the DOM; collapsing animates `max-height` to 0
/// (see [`crate::styles`]) instead of removing it.
#[component]
pub fn DisclosureItem(
    index: usize,
    entry: FaqEntry,
    is_open: Signal<bool>,
    on_toggle: Callback<usize>,
) -> impl IntoView {
    let answer_id = format!("faq-answer-{}", index);

    view! {
        <div class=move || if is_open.get() { "faq-item open" } else { "faq-item" }>
            <button
                class="faq-question"
                aria-expanded=move || is_open.get().to_string()
                aria-controls=answer_id.clone()
                on:click=move |_| on_toggle.run(index)
            >
                <span class="faq-question-text">{entry.question}</span>
                {move || {
                    let kind = if is_open.get() { IconKind::Minus } else { IconKind::Plus };
                    view! { <Icon kind=kind class="faq-toggle-icon" /> }
                }}
            </button>
            <div
                id=answer_id
                class="faq-answer"
                role="region"
                aria-hidden=move || (!is_open.get()).to_string()
            >
                <p class="faq-answer-text">{entry.answer}</p>
            </div>
        </div>
    }
}
