//! # crown-page
//!
//! Leptos components, static content and UI state for the Crown Screens
//! landing page.
//!
//! The same component tree runs in two places:
//!
//! - **Browser** (`csr` feature) - the `crown-landing` binary mounts
//!   [`components::PageShell`] into `<body>`.
//! - **Static HTML** (`ssr` feature, default) - [`render_page`] produces a
//!   complete document string for a given [`UiState`](state::UiState).
//!
//! ## Quick Start
//!
//! ```rust
//! use crown_page::{render_page, PageAssets};
//! use crown_page::state::UiState;
//! use crown_page::types::PageContent;
//!
//! let content = PageContent::crown_screens();
//! let state = UiState::mounted(content.faqs.len());
//!
//! let html = render_page(&content, &PageAssets::default(), state);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Frequently Asked Questions"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content records and asset configuration
//! - [`content`] - the shipped marketing copy
//! - [`state`] - mount gate and FAQ accordion
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`structured_data`] - JSON-LD for the FAQ
//! - [`error`] - error type

pub mod components;
pub mod content;
pub mod error;
pub mod state;
pub mod structured_data;
pub mod styles;
pub mod types;

pub use error::PageError;
pub use types::PageAssets;

#[cfg(feature = "ssr")]
use components::{PageDocument, PageShell};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use state::UiState;
#[cfg(feature = "ssr")]
use types::PageContent;

/// Render the full HTML document for `state`.
///
/// Effects do not run here, so the mount gate stays where `state` put it:
/// pass [`UiState::mounted`] for the page as users see it, or
/// [`UiState::new`] for the pre-mount document (title, meta and CSS only;
/// no page copy and no structured data).
///
/// # Example
///
/// ```rust
/// use crown_page::{render_page, PageAssets};
/// use crown_page::state::UiState;
/// use crown_page::types::PageContent;
///
/// let content = PageContent::crown_screens();
/// let html = render_page(&content, &PageAssets::default(), UiState::new(content.faqs.len()));
/// assert!(!html.contains("class=\"faq-item"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(content: &PageContent, assets: &PageAssets, state: UiState) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <PageDocument content=*content assets=assets.clone() state=state />
        }
        .to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the [`PageShell`] markup, without `<html>`/`<head>`.
#[cfg(feature = "ssr")]
pub fn render_shell(content: &PageContent, assets: &PageAssets, state: UiState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        view! {
            <PageShell content=*content assets=assets.clone() initial=state />
        }
        .to_html()
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn shipped() -> PageContent {
        PageContent::crown_screens()
    }

    #[test]
    fn renders_document_head() {
        let content = shipped();
        let html = render_page(&content, &PageAssets::default(), UiState::mounted(4));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Crown Screens - Multi-Device Command Center"));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains(".faq-item.open .faq-answer"));
    }

    #[test]
    fn unmounted_document_has_empty_body() {
        let content = shipped();
        let html = render_page(&content, &PageAssets::default(), UiState::new(4));

        assert!(html.contains("<title>"));
        assert!(!html.contains("application/ld+json"));
        assert!(!html.contains("<nav"));
        assert!(!html.contains("Core Competitive Edge"));
        assert!(!html.contains("class=\"faq-item"));
    }

    #[test]
    fn mounted_shell_renders_sections_in_order() {
        let html = render_shell(&shipped(), &PageAssets::default(), UiState::mounted(4));

        let order = [
            "class=\"nav\"",
            "class=\"hero\"",
            "id=\"features\"",
            "id=\"guide\"",
            "id=\"faq\"",
            "Ready to Scale Your Efficiency?",
            "class=\"footer\"",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn custom_assets_flow_into_markup() {
        let assets = PageAssets {
            logo_src: "/static/crown-logo.png".into(),
            dashboard_image_src: "/static/dashboard.jpg".into(),
            tutorial_image_src: "/static/tutorial.jpg".into(),
        };
        let html = render_shell(&shipped(), &assets, UiState::mounted(4));

        assert_eq!(html.matches("/static/crown-logo.png").count(), 3);
        assert!(html.contains("/static/dashboard.jpg"));
        assert!(html.contains("/static/tutorial.jpg"));
        assert!(!html.contains("icon1.png"));
    }
}
