//! Leptos UI components for the landing page.
//!
//! Every component except [`PageShell`] is a pure function of its props.
//! `PageShell` owns the [`UiState`](crate::state::UiState) and hands
//! children derived read-only signals plus a toggle callback.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (SSR only: <html>, head, stylesheet, JSON-LD)
//! └── PageShell (mount gate + FAQ state)
//!     ├── NavBar
//!     ├── Hero
//!     ├── FeaturesSection
//!     │   └── FeatureCard (per FeatureEntry)
//!     ├── GuideSection
//!     │   └── GuideStepRow (per GuideStep)
//!     ├── FaqSection
//!     │   └── DisclosureItem (per FaqEntry)
//!     ├── CallToAction
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use crown_page::components::PageShell;
//!
//! leptos::mount::mount_to_body(|| view! { <PageShell /> });
//! ```

mod cta;
mod document;
mod faq;
mod features;
mod footer;
mod guide;
mod hero;
mod icons;
mod nav;
mod shell;

pub use cta::CallToAction;
pub use document::PageDocument;
pub use faq::{DisclosureItem, FaqSection};
pub use features::{FeatureCard, FeaturesSection};
pub use footer::Footer;
pub use guide::{GuideSection, GuideStepRow};
pub use hero::Hero;
pub use icons::Icon;
pub use nav::NavBar;
pub use shell::{PageShell, ShellControls};
