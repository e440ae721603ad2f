use super::Icon;
use crate::types::{GuideStep, IconKind};
use leptos::prelude::*;

/// "Get Started" steps next to the tutorial preview and testimonial.
#[component]
pub fn GuideSection(steps: &'static [GuideStep], tutorial_image_src: String) -> impl IntoView {
    view! {
        <section id="guide" class="section guide">
            <div class="container">
                <div class="guide-grid">
                    <div>
                        <h2 class="section-title">
                            "Get Started in "
                            <span class="text-primary">"3 Minutes"</span>
                        </h2>
                        <div class="guide-steps">
                            {steps
                                .iter()
                                .map(|step| view! { <GuideStepRow step=*step /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="guide-media">
                        <div class="media-frame">
                            <img class="media-image" src=tutorial_image_src alt="Tutorial" />
                            <div class="play-button">
                                <Icon kind=IconKind::Play size="32" fill="currentColor" />
                            </div>
                        </div>
                        <p class="testimonial">
                            "\"The most intuitive multi-device manager I've ever used for mobile app testing.\" "
                            "— Tech Review Weekly"
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn GuideStepRow(step: GuideStep) -> impl IntoView {
    view! {
        <div class="guide-step">
            <div class="step-bubble">{step.step}</div>
            <div>
                <h4 class="step-title">
                    <Icon kind=step.icon size="18" class="text-primary" />
                    {step.title}
                </h4>
                <p class="step-desc">{step.desc}</p>
            </div>
        </div>
    }
}
