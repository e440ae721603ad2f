//! Top-level page controller.

use super::{CallToAction, FaqSection, FeaturesSection, Footer, GuideSection, Hero, NavBar};
use crate::state::UiState;
use crate::types::{PageAssets, PageContent};
use leptos::prelude::*;

/// Reactive handles shared by [`PageShell`] and its children.
///
/// One `RwSignal<UiState>` is the only mutable storage; everything else is
/// derived from it. `Copy`, so it moves freely into closures.
#[derive(Clone, Copy)]
pub struct ShellControls {
    state: RwSignal<UiState>,
    /// Whether the mount gate has opened
    pub mounted: Memo<bool>,
    /// Index of the expanded FAQ entry
    pub open_faq: Signal<Option<usize>>,
    /// Click handler for FAQ rows
    pub toggle_faq: Callback<usize>,
}

impl ShellControls {
    pub fn new(initial: UiState) -> Self {
        let state = RwSignal::new(initial);
        let mounted = Memo::new(move |_| state.with(|s| s.mounted.is_mounted()));
        let open_faq = Signal::derive(move || state.with(|s| s.faq.open_index()));
        let toggle_faq = Callback::new(move |index: usize| {
            state.update(|s| {
                if let Err(err) = s.faq.toggle(index) {
                    // rows only ever pass their own index
                    debug_assert!(index < s.faq.len(), "{err}");
                }
            });
        });

        Self {
            state,
            mounted,
            open_faq,
            toggle_faq,
        }
    }

    /// Opens the mount gate. Later calls are no-ops.
    pub fn mount(&self) {
        self.state.update(|s| {
            s.mounted.mount();
        });
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> UiState {
        self.state.get_untracked()
    }
}

/// Owns all mutable page state and renders the sections in fixed order.
///
/// Nothing is rendered until the mount gate opens. In the browser that
/// happens in an effect right after the first render; during server
/// rendering effects never run, so the gate stays as `initial` left it.
#[component]
pub fn PageShell(
    /// Static copy to render
    #[prop(default = PageContent::crown_screens())]
    content: PageContent,
    /// Asset URLs
    #[prop(optional)]
    assets: PageAssets,
    /// Starting state; defaults to unmounted with the first FAQ open
    #[prop(optional)]
    initial: Option<UiState>,
) -> impl IntoView {
    let controls = ShellControls::new(initial.unwrap_or_else(|| UiState::new(content.faqs.len())));

    Effect::new(move || controls.mount());

    view! {
        <Show when=move || controls.mounted.get()>
            <div class="page">
                <NavBar links=content.nav_links logo_src=assets.logo_src.clone() />
                <main>
                    <Hero
                        logo_src=assets.logo_src.clone()
                        dashboard_image_src=assets.dashboard_image_src.clone()
                    />
                    <FeaturesSection features=content.features />
                    <GuideSection
                        steps=content.steps
                        tutorial_image_src=assets.tutorial_image_src.clone()
                    />
                    <FaqSection
                        faqs=content.faqs
                        open=controls.open_faq
                        on_toggle=controls.toggle_faq
                    />
                    <CallToAction />
                </main>
                <Footer
                    columns=content.footer_columns
                    legal_links=content.legal_links
                    logo_src=assets.logo_src.clone()
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_controls(initial: UiState, f: impl FnOnce(ShellControls)) {
        let owner = Owner::new();
        owner.with(|| f(ShellControls::new(initial)));
    }

    #[test]
    fn mount_opens_gate_once() {
        with_controls(UiState::new(4), |controls| {
            assert!(!controls.mounted.get_untracked());

            controls.mount();
            assert!(controls.mounted.get_untracked());
            assert_eq!(controls.open_faq.get_untracked(), Some(0));

            controls.toggle_faq.run(1);
            controls.mount();
            assert_eq!(controls.snapshot().faq.open_index(), Some(1));
        });
    }

    #[test]
    fn toggle_callback_drives_accordion() {
        with_controls(UiState::mounted(4), |controls| {
            let mut seen = Vec::new();
            for index in [0, 2, 2, 1] {
                controls.toggle_faq.run(index);
                seen.push(controls.open_faq.get_untracked());
            }
            assert_eq!(seen, vec![None, Some(2), None, Some(1)]);
        });
    }

    #[test]
    fn toggling_before_mount_keeps_gate_closed() {
        with_controls(UiState::new(4), |controls| {
            controls.toggle_faq.run(3);
            assert!(!controls.mounted.get_untracked());
            assert_eq!(controls.open_faq.get_untracked(), Some(3));
        });
    }
}
