use super::Icon;
use crate::types::FeatureEntry;
use leptos::prelude::*;

/// Feature grid, one [`FeatureCard`] per entry in order.
#[component]
pub fn FeaturesSection(features: &'static [FeatureEntry]) -> impl IntoView {
    view! {
        <section id="features" class="section features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Core Competitive Edge"</h2>
                    <p class="section-description">
                        "Designed for large-scale deployment, instant response, and ultimate stability."
                    </p>
                </div>
                <div class="features-grid">
                    {features
                        .iter()
                        .map(|entry| view! { <FeatureCard entry=*entry /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <Icon kind=entry.icon class=entry.accent.class() />
            </div>
            <h3 class="feature-title">{entry.title}</h3>
            <p class="feature-description">{entry.description}</p>
            <div class="feature-stats">
                {entry
                    .stats
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat-badge">
                                <div class="stat-label">{stat.label}</div>
                                <div class="stat-value">{stat.value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
