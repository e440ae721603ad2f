use super::Icon;
use crate::content::PRODUCT_NAME;
use crate::types::{IconKind, NavLink};
use leptos::prelude::*;

/// Fixed top bar: brand, section links and the two header buttons.
///
/// The first link is the current page and gets the `active` style.
#[component]
pub fn NavBar(links: &'static [NavLink], logo_src: String) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <div class="nav-logo">
                        <img src=logo_src alt="Crown Screens Logo" />
                    </div>
                    <span class="nav-title">{PRODUCT_NAME}</span>
                </a>

                <div class="nav-links">
                    {links
                        .iter()
                        .enumerate()
                        .map(|(idx, link)| {
                            let class = if idx == 0 { "nav-link active" } else { "nav-link" };
                            view! { <a href=link.href class=class>{link.label}</a> }
                        })
                        .collect_view()}
                </div>

                <div class="nav-actions">
                    <button class="btn btn-outline">
                        <Icon kind=IconKind::Eye size="16" />
                        "Partners"
                    </button>
                    <button class="btn btn-primary">
                        <Icon kind=IconKind::Download size="16" />
                        "Download"
                    </button>
                </div>
            </div>
        </nav>
    }
}
