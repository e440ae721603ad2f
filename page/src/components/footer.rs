use super::Icon;
use crate::content::PRODUCT_NAME;
use crate::types::{FooterColumn, IconKind, NavLink};
use leptos::prelude::*;

const SOCIAL_ICONS: [IconKind; 3] = [IconKind::Send, IconKind::MessageSquare, IconKind::Monitor];

#[component]
pub fn Footer(
    columns: &'static [FooterColumn],
    legal_links: &'static [NavLink],
    logo_src: String,
) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <img src=logo_src alt="footer logo" />
                            <span class="footer-title">{PRODUCT_NAME}</span>
                        </div>
                        <p class="footer-blurb">
                            "Professional-grade multi-device management solution. Built by developers, "
                            "for developers, powering massive mobile operations worldwide."
                        </p>
                        <div class="footer-social">
                            {SOCIAL_ICONS
                                .into_iter()
                                .map(|kind| {
                                    view! {
                                        <a href="#" class="social-link">
                                            <Icon kind=kind size="20" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {columns
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="footer-column">
                                    <h4 class="footer-heading">{column.heading}</h4>
                                    <ul class="footer-links">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href=link.href class="footer-link">{link.label}</a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-bottom">
                    <div class="footer-copyright">
                        "© 2024 Crown Screens Software. All rights reserved."
                    </div>
                    <div class="footer-legal">
                        {legal_links
                            .iter()
                            .map(|link| view! { <a href=link.href>{link.label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
