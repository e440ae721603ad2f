use super::Icon;
use crate::content::RELEASE_BADGE;
use crate::types::IconKind;
use leptos::prelude::*;

#[component]
pub fn Hero(logo_src: String, dashboard_image_src: String) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-glow left"></div>
            <div class="hero-glow right"></div>

            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <div class="hero-badge-dot">
                                <span class="hero-badge-ping"></span>
                                <img src=logo_src alt="badge icon" />
                            </div>
                            {RELEASE_BADGE}
                        </div>
                        <h1 class="hero-title">
                            "Next-Gen "
                            <br />
                            <span class="text-gradient">"Multi-Device"</span>
                            <br />
                            "Command Center"
                        </h1>
                        <p class="hero-description">
                            "Built for professional developers and QA teams. Control, sync, and automate "
                            "hundreds of devices from a single interface to skyrocket your productivity."
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-primary btn-lg">
                                <Icon kind=IconKind::Download size="22" />
                                "START FREE TRIAL"
                            </button>
                            <button class="btn btn-outline btn-lg">
                                <Icon kind=IconKind::Play size="20" />
                                "WATCH DEMO"
                            </button>
                        </div>
                        <div class="hero-platforms">
                            <div class="platform-chip">
                                <Icon kind=IconKind::Settings size="16" />
                                "Windows 10/11"
                            </div>
                            <div class="platform-chip">
                                <Icon kind=IconKind::Smartphone size="16" />
                                "Android 5.0+"
                            </div>
                            <div class="platform-chip">
                                <Icon kind=IconKind::Activity size="16" />
                                "macOS / Linux"
                            </div>
                        </div>
                    </div>

                    <DashboardPreview image_src=dashboard_image_src />
                </div>
            </div>
        </section>
    }
}

#[component]
fn DashboardPreview(image_src: String) -> impl IntoView {
    view! {
        <div class="hero-preview">
            <div class="preview-frame">
                <img class="preview-image" src=image_src alt="Dashboard Preview" />
                <div class="status-card">
                    <div class="status-row">
                        <div class="status-dot"></div>
                        <span class="status-label">"Server Status: Online"</span>
                    </div>
                    <div class="status-value">"492 Devices Ready"</div>
                </div>
            </div>
        </div>
    }
}
