//! Root document component - the complete HTML page

use super::PageShell;
use crate::content::PRODUCT_NAME;
use crate::state::UiState;
use crate::structured_data::faq_json_ld;
use crate::styles::PAGE_CSS;
use crate::types::{PageAssets, PageContent};
use leptos::prelude::*;

/// Value of `<meta name="description">`.
pub const META_DESCRIPTION: &str = "Control, sync, and automate hundreds of Android devices from a single interface. Wireless ADB, real-time dashboard, AES-256 encryption.";

/// The complete HTML document: head (meta, stylesheet, JSON-LD) and the
/// page shell in the body.
///
/// Before the mount gate opens only the document chrome is rendered: the
/// head carries title, meta and CSS, and the FAQ structured data is left out.
#[component]
pub fn PageDocument(content: PageContent, assets: PageAssets, state: UiState) -> impl IntoView {
    let title = format!("{} - Multi-Device Command Center", PRODUCT_NAME);
    // FAQ copy stays out of the document until the gate opens
    let json_ld = state
        .mounted
        .is_mounted()
        .then(|| faq_json_ld(content.faqs))
        .and_then(|result| {
            result
                .map_err(|err| tracing::error!(%err, "skipping FAQ structured data"))
                .ok()
        });
    let favicon = assets.logo_src.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=META_DESCRIPTION />
                <title>{title}</title>
                <link rel="icon" href=favicon />
                <style inner_html=PAGE_CSS></style>
                {json_ld
                    .map(|json| {
                        view! { <script type="application/ld+json" inner_html=json></script> }
                    })}
            </head>
            <body>
                <PageShell content=content assets=assets initial=state />
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_entry_uses_the_same_description() {
        let index_html = include_str!("../../../landing/index.html");
        let expected = format!("<meta name=\"description\" content=\"{META_DESCRIPTION}\" />");
        assert!(index_html.contains(&expected), "landing/index.html drifted");
    }
}
