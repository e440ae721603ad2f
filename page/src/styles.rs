//! CSS for the landing page.
//!
//! The whole stylesheet ships inline in the document head, so the page has
//! no build step for styles.
//!
//! # Customization
//!
//! ```rust
//! use crown_page::styles::PAGE_CSS;
//!
//! let brand_override = ":root { --primary: #ff4d6d; }";
//! let combined = format!("{}\n{}", PAGE_CSS, brand_override);
//! assert!(combined.ends_with("#ff4d6d; }"));
//! ```
//!
//! # FAQ animation
//!
//! Collapsed answers sit at `max-height: 0`; the open one animates up to
//! [`ANSWER_MAX_HEIGHT_REM`]. The answer height estimate used by
//! [`PageContent::validate`](crate::types::PageContent::validate) is built
//! from the same line-height and padding constants.

/// Height cap of an expanded FAQ answer, in rem.
pub const ANSWER_MAX_HEIGHT_REM: f32 = 24.0;

/// Line height of answer text, in rem (`1rem * 1.625`).
pub const ANSWER_LINE_HEIGHT_REM: f32 = 1.625;

/// Bottom padding of an expanded answer, in rem.
pub const ANSWER_PADDING_REM: f32 = 1.5;

/// Duration of the expand/collapse transition.
pub const ANSWER_TRANSITION_MS: u32 = 300;

/// Complete stylesheet - dark theme with blue/violet neon accents.
pub const PAGE_CSS: &str = r#"
:root {
    --background: #0b0f19;
    --surface: #111827;
    --slate-950: #020617;
    --slate-900: #0f172a;
    --slate-800: #1e293b;
    --slate-700: #334155;
    --slate-600: #475569;
    --slate-500: #64748b;
    --slate-400: #94a3b8;
    --slate-300: #cbd5e1;
    --slate-200: #e2e8f0;
    --primary: #3b82f6;
    --secondary: #8b5cf6;
    --white: #ffffff;
    --gradient-primary: linear-gradient(135deg, var(--primary), var(--secondary));
    --shadow-neon-blue: 0 0 20px rgba(59, 130, 246, 0.45);
    --radius: 0.75rem;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100vh;
    background: var(--background);
    color: var(--slate-200);
    font-family: Inter, system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
    line-height: 1.5;
}

::selection { background: var(--primary); color: var(--white); }

a { color: inherit; text-decoration: none; }
img { display: block; max-width: 100%; }

.container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.container-narrow { max-width: 56rem; }
.container-mid { max-width: 64rem; }

.icon { display: inline-block; flex-shrink: 0; vertical-align: middle; }
.text-primary { color: var(--primary); }
.text-secondary { color: var(--secondary); }
.text-gradient {
    background: var(--gradient-primary);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    border: 1px solid transparent;
    font: inherit;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--white);
    background: none;
    cursor: pointer;
    transition: opacity 150ms, background 150ms, transform 150ms;
}
.btn-outline { border-color: var(--slate-700); }
.btn-outline:hover { background: var(--slate-800); }
.btn-primary { background: var(--gradient-primary); box-shadow: var(--shadow-neon-blue); }
.btn-primary:hover { opacity: 0.9; }
.btn-light { background: var(--white); color: var(--background); font-weight: 900; }
.btn-light:hover { background: var(--primary); color: var(--white); }
.btn-lg { padding: 1rem 2.5rem; border-radius: var(--radius); font-size: 1rem; font-weight: 700; }
.btn-lg:hover { transform: scale(1.05); }
.btn-lg:active { transform: scale(0.95); }

/* Nav */
.nav {
    position: fixed;
    inset: 0 0 auto 0;
    z-index: 50;
    border-bottom: 1px solid var(--slate-800);
    background: rgba(11, 15, 25, 0.8);
    backdrop-filter: blur(12px);
}
.nav-inner {
    max-width: 80rem;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 1.5rem;
}
.nav-brand { display: flex; align-items: center; gap: 0.5rem; }
.nav-logo { border-radius: 0.5rem; overflow: hidden; box-shadow: var(--shadow-neon-blue); }
.nav-logo img { width: 2rem; height: 2rem; object-fit: cover; }
.nav-title { font-size: 1.25rem; font-weight: 700; color: var(--white); letter-spacing: 0.025em; }
.nav-links { display: none; gap: 2rem; font-weight: 500; }
.nav-link { color: var(--slate-400); transition: color 150ms; }
.nav-link:hover, .nav-link.active { color: var(--primary); }
.nav-link.active:hover { color: var(--white); }
.nav-actions { display: flex; align-items: center; gap: 0.75rem; }
.nav-actions .btn-outline { display: none; }

/* Hero */
.hero { position: relative; overflow: hidden; padding: 8rem 0 5rem; }
.hero-glow {
    position: absolute;
    width: 500px;
    height: 500px;
    border-radius: 9999px;
    filter: blur(120px);
    pointer-events: none;
}
.hero-glow.left { top: 0; left: 25%; background: rgba(59, 130, 246, 0.1); }
.hero-glow.right { bottom: 0; right: 25%; background: rgba(139, 92, 246, 0.1); }
.hero-grid { position: relative; z-index: 10; text-align: center; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0.75rem;
    margin-bottom: 1.5rem;
    border: 1px solid rgba(59, 130, 246, 0.2);
    border-radius: 9999px;
    background: rgba(59, 130, 246, 0.1);
    color: var(--primary);
    font-size: 0.75rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}
.hero-badge-dot { position: relative; display: flex; width: 0.75rem; height: 0.75rem; }
.hero-badge-ping {
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    background: var(--primary);
    opacity: 0.75;
    animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
}
.hero-badge-dot img { position: relative; width: 0.75rem; height: 0.75rem; border-radius: 9999px; object-fit: cover; }
.hero-title {
    margin: 0 0 1.5rem;
    font-size: 2.25rem;
    font-weight: 800;
    line-height: 1.1;
    letter-spacing: -0.025em;
    color: var(--white);
}
.hero-description {
    max-width: 42rem;
    margin: 0 auto 2.5rem;
    font-size: 1.125rem;
    line-height: 1.625;
    color: var(--slate-400);
}
.hero-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 3rem; }
.hero-platforms {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
    font-size: 0.875rem;
    opacity: 0.6;
    filter: grayscale(1);
    transition: filter 300ms;
}
.hero-platforms:hover { filter: none; }
.platform-chip { display: flex; align-items: center; gap: 0.5rem; }
.hero-preview { position: relative; margin-top: 4rem; }
.preview-frame {
    position: relative;
    z-index: 10;
    padding: 0.5rem;
    border: 1px solid var(--slate-700);
    border-radius: 1rem;
    background: var(--slate-900);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
    transition: transform 500ms;
}
.preview-image { width: 100%; height: auto; border-radius: var(--radius); filter: grayscale(0.2); }
.status-card {
    position: absolute;
    right: -1.5rem;
    bottom: -1.5rem;
    display: none;
    padding: 1rem;
    border: 1px solid var(--slate-700);
    border-radius: var(--radius);
    background: var(--surface);
}
.status-row { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; }
.status-dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; background: #22c55e; animation: pulse 2s infinite; }
.status-label { font-size: 0.75rem; font-weight: 700; color: var(--slate-300); }
.status-value { font-size: 1.25rem; font-weight: 700; color: var(--white); }

/* Sections */
.section { padding: 6rem 0; }
.section-header { margin-bottom: 4rem; text-align: center; }
.section-title { margin: 0 0 1rem; font-size: 1.875rem; font-weight: 700; color: var(--white); }
.section-description { max-width: 42rem; margin: 0 auto; color: var(--slate-400); }
.section-icon { margin: 0 auto 1rem; color: var(--primary); }

/* Features */
.features { background: rgba(15, 23, 42, 0.3); }
.features-grid { display: grid; gap: 2rem; }
.feature-card {
    padding: 2rem;
    border: 1px solid var(--slate-800);
    border-radius: 1rem;
    background: var(--surface);
    transition: border-color 300ms, transform 300ms;
}
.feature-card:hover { border-color: rgba(59, 130, 246, 0.5); transform: translateY(-0.25rem); }
.feature-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    margin-bottom: 1.5rem;
    border-radius: var(--radius);
    background: var(--slate-800);
    transition: background 150ms;
}
.feature-card:hover .feature-icon { background: rgba(59, 130, 246, 0.2); }
.feature-title { margin: 0 0 0.75rem; font-size: 1.25rem; font-weight: 700; color: var(--white); }
.feature-card:hover .feature-title { color: var(--primary); }
.feature-description { margin: 0 0 1.5rem; font-size: 0.875rem; line-height: 1.625; color: var(--slate-400); }
.feature-stats { display: flex; gap: 1rem; }
.stat-badge {
    padding: 0.375rem 0.75rem;
    border: 1px solid var(--slate-800);
    border-radius: 0.5rem;
    background: rgba(15, 23, 42, 0.5);
}
.stat-label { font-size: 10px; font-weight: 700; letter-spacing: 0.05em; text-transform: uppercase; color: var(--slate-500); }
.stat-value { font-size: 0.75rem; font-weight: 600; color: var(--primary); }

/* Guide */
.guide { border-top: 1px solid var(--slate-800); border-bottom: 1px solid var(--slate-800); }
.guide-grid { display: flex; flex-direction: column; gap: 3rem; }
.guide-steps { display: flex; flex-direction: column; gap: 2rem; }
.guide-step { display: flex; gap: 1.5rem; }
.step-bubble {
    display: flex;
    flex-shrink: 0;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    background: var(--slate-800);
    color: var(--primary);
    font-weight: 700;
    transition: background 300ms, color 300ms;
}
.guide-step:hover .step-bubble { background: var(--primary); color: var(--white); }
.step-title { display: flex; align-items: center; gap: 0.5rem; margin: 0 0 0.5rem; font-size: 1.25rem; font-weight: 700; color: var(--white); }
.step-desc { margin: 0; line-height: 1.625; color: var(--slate-400); }
.guide-media {
    padding: 2rem;
    border: 1px solid rgba(255, 255, 255, 0.05);
    border-radius: 1.5rem;
    background: linear-gradient(to bottom right, rgba(59, 130, 246, 0.2), rgba(139, 92, 246, 0.2));
}
.media-frame {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    aspect-ratio: 16 / 9;
    overflow: hidden;
    border-radius: var(--radius);
    background: var(--slate-950);
    cursor: pointer;
}
.media-image { width: 100%; height: 100%; object-fit: cover; opacity: 0.4; transition: transform 700ms; }
.media-frame:hover .media-image { transform: scale(1.05); }
.play-button {
    position: absolute;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 5rem;
    height: 5rem;
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(4px);
    color: var(--white);
}
.testimonial { margin: 1.5rem 0 0; text-align: center; font-size: 0.875rem; font-style: italic; font-weight: 500; color: var(--slate-400); }

/* FAQ */
.faq-panel {
    padding: 2rem;
    border: 1px solid var(--slate-800);
    border-radius: 1.5rem;
    background: var(--surface);
}
.faq-item { border-bottom: 1px solid var(--slate-800); }
.faq-item:last-child { border-bottom: 0; }
.faq-question {
    display: flex;
    width: 100%;
    align-items: center;
    justify-content: space-between;
    padding: 1.5rem 0;
    border: 0;
    background: none;
    font: inherit;
    text-align: left;
    color: inherit;
    cursor: pointer;
}
.faq-question-text { padding-right: 2rem; font-size: 1.125rem; font-weight: 600; color: var(--slate-200); transition: color 150ms; }
.faq-question:hover .faq-question-text, .faq-item.open .faq-question-text { color: var(--primary); }
.faq-toggle-icon { color: var(--slate-500); }
.faq-item.open .faq-toggle-icon { color: var(--primary); }
.faq-answer {
    max-height: 0;
    overflow: hidden;
    transition: max-height 300ms ease-in-out, padding-bottom 300ms ease-in-out;
}
.faq-item.open .faq-answer { max-height: 24rem; padding-bottom: 1.5rem; }
.faq-answer-text { margin: 0; font-size: 0.875rem; line-height: 1.625; color: var(--slate-400); }

/* Call to action */
.cta { position: relative; overflow: hidden; text-align: center; }
.cta-border { padding: 1px; border-radius: 2rem; background: linear-gradient(to right, var(--primary), var(--secondary)); }
.cta-inner { padding: 4rem 2rem; border-radius: 2rem; background: var(--background); }
.cta-title { margin: 0 0 1.5rem; font-size: 2.25rem; font-weight: 900; color: var(--white); }
.cta-description { max-width: 42rem; margin: 0 auto 2.5rem; font-size: 1.125rem; color: var(--slate-400); }
.cta-actions { display: flex; flex-direction: column; justify-content: center; gap: 1rem; }

/* Footer */
.footer { padding: 5rem 0 2.5rem; border-top: 1px solid var(--slate-900); background: var(--slate-950); }
.footer-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 3rem; margin-bottom: 4rem; }
.footer-brand { grid-column: span 2; }
.footer-logo { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1.5rem; }
.footer-logo img { width: 2rem; height: 2rem; border-radius: 0.5rem; box-shadow: var(--shadow-neon-blue); }
.footer-title { font-size: 1.5rem; font-weight: 700; color: var(--white); letter-spacing: 0.025em; }
.footer-blurb { max-width: 24rem; margin: 0 0 2rem; color: var(--slate-400); }
.footer-social { display: flex; gap: 1rem; }
.social-link { padding: 0.5rem; border: 1px solid var(--slate-800); border-radius: 0.5rem; background: var(--slate-900); transition: color 150ms; }
.social-link:hover { color: var(--primary); }
.footer-heading { margin: 0 0 1.5rem; font-weight: 700; color: var(--white); }
.footer-links { margin: 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 1rem; color: var(--slate-500); }
.footer-link:hover { color: var(--primary); }
.footer-bottom {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    padding-top: 2.5rem;
    border-top: 1px solid var(--slate-900);
}
.footer-copyright { font-size: 0.875rem; color: var(--slate-600); }
.footer-legal { display: flex; gap: 2rem; font-size: 0.875rem; color: var(--slate-500); }
.footer-legal a:hover { color: var(--white); }

@keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
@keyframes pulse { 50% { opacity: 0.5; } }

@media (min-width: 640px) {
    .nav-actions .btn-outline { display: inline-flex; }
    .cta-actions { flex-direction: row; }
}

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .hero-title { font-size: 4.5rem; }
    .hero-description { font-size: 1.25rem; }
    .section-title { font-size: 3rem; }
    .features-grid { grid-template-columns: repeat(2, 1fr); }
    .status-card { display: block; }
    .faq-panel { padding: 3rem; }
    .faq-answer-text { font-size: 1rem; }
    .cta-title { font-size: 3.75rem; }
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
    .footer-bottom { flex-direction: row; }
}

@media (min-width: 1024px) {
    .hero { padding: 12rem 0 8rem; }
    .hero-grid { display: flex; align-items: center; gap: 3rem; text-align: left; }
    .hero-grid > * { flex: 1 1 50%; }
    .hero-description { margin-left: 0; }
    .hero-actions, .hero-platforms { justify-content: flex-start; }
    .hero-preview { margin-top: 0; }
    .preview-frame { transform: rotate(2deg); }
    .preview-frame:hover { transform: rotate(0); }
    .features-grid { grid-template-columns: repeat(3, 1fr); }
    .guide-grid { flex-direction: row; align-items: center; gap: 4rem; }
    .guide-grid > * { flex: 1 1 50%; }
}
"#;
