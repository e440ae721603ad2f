use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="section cta">
            <div class="container container-mid">
                <div class="cta-border">
                    <div class="cta-inner">
                        <h2 class="cta-title">"Ready to Scale Your Efficiency?"</h2>
                        <p class="cta-description">
                            "Join 10,000+ professionals worldwide. Download now and start your 14-day full feature trial."
                        </p>
                        <div class="cta-actions">
                            <button class="btn btn-light btn-lg">"Start Free Trial Now"</button>
                            <button class="btn btn-outline btn-lg">"Contact Sales"</button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
