//! Content data types for the landing page.
//!
//! Everything here is immutable and defined as `'static` literals in
//! [`crate::content`]. Records have no identity beyond their position in the
//! slice they belong to; each one is rendered 1:1 into a component.
//!
//! # Example
//!
//! ```rust
//! use crown_page::types::{Accent, FeatureEntry, IconKind, Stat};
//!
//! let entry = FeatureEntry {
//!     title: "Mass Device Sync",
//!     description: "One-to-many input.",
//!     icon: IconKind::Zap,
//!     accent: Accent::Primary,
//!     stats: &[Stat { label: "Latency", value: "< 2ms" }],
//! };
//! assert_eq!(entry.stats.len(), 1);
//! ```

/// Symbolic reference to one of the icons the page draws.
///
/// Resolved to inline SVG by [`crate::components::Icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Zap,
    LayoutGrid,
    Cpu,
    Lock,
    Globe,
    Settings,
    Download,
    Play,
    Eye,
    Send,
    MessageSquare,
    Monitor,
    Smartphone,
    Activity,
    Plus,
    Minus,
}

/// Colour accent applied to an icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Primary,
    Secondary,
}

impl Accent {
    /// CSS class carrying the accent colour.
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "text-primary",
            Accent::Secondary => "text-secondary",
        }
    }
}

/// Small label/value badge shown under a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// One card of the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub accent: Accent,
    /// Badges, rendered in order
    pub stats: &'static [Stat],
}

/// One row of the "getting started" guide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuideStep {
    /// Ordinal label shown in the bubble ("01", "02", ...)
    pub step: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: IconKind,
}

/// A question and its answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A plain hyperlink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A titled list of links in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

/// Every static slice the page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub nav_links: &'static [NavLink],
    pub features: &'static [FeatureEntry],
    pub steps: &'static [GuideStep],
    pub faqs: &'static [FaqEntry],
    pub footer_columns: &'static [FooterColumn],
    pub legal_links: &'static [NavLink],
}

/// Asset locations used by the page.
///
/// Values are opaque URLs; nothing in the crate reads the files behind them.
///
/// ```rust
/// use crown_page::PageAssets;
///
/// let assets = PageAssets {
///     logo_src: "/static/crown.png".into(),
///     ..Default::default()
/// };
/// assert!(assets.dashboard_image_src.starts_with("https://"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageAssets {
    /// Brand logo bitmap (nav bar, hero badge, footer)
    pub logo_src: String,
    /// Dashboard preview photo in the hero section
    pub dashboard_image_src: String,
    /// Tutorial thumbnail in the guide section
    pub tutorial_image_src: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            logo_src: "icon1.png".into(),
            dashboard_image_src: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80&w=1200".into(),
            tutorial_image_src: "https://images.unsplash.com/photo-1558494949-ef010cbdcc48?auto=format&fit=crop&q=80&w=800".into(),
        }
    }
}
