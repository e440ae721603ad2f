//! Inline SVG icons (Lucide, 24px grid, 2px stroke).
//!
//! Icons are drawn from static markup keyed by [`IconKind`], so the page
//! needs no icon font or sprite sheet.

use crate::types::IconKind;
use leptos::prelude::*;

/// Renders one icon as an inline `<svg>`.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Zap class="text-primary" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Width and height in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Extra CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Fill colour; Lucide icons are outline-only by default
    #[prop(default = "none")]
    fill: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {}", class)
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            data-icon=kind.name()
            inner_html=kind.svg_markup()
        ></svg>
    }
}

impl IconKind {
    /// Lucide name of the icon.
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Zap => "zap",
            IconKind::LayoutGrid => "layout-grid",
            IconKind::Cpu => "cpu",
            IconKind::Lock => "lock",
            IconKind::Globe => "globe",
            IconKind::Settings => "settings",
            IconKind::Download => "download",
            IconKind::Play => "play",
            IconKind::Eye => "eye",
            IconKind::Send => "send",
            IconKind::MessageSquare => "message-square",
            IconKind::Monitor => "monitor",
            IconKind::Smartphone => "smartphone",
            IconKind::Activity => "activity",
            IconKind::Plus => "plus",
            IconKind::Minus => "minus",
        }
    }

    /// Inner SVG markup (shapes only, no `<svg>` wrapper).
    pub fn svg_markup(self) -> &'static str {
        match self {
            IconKind::Zap => ICON_ZAP,
            IconKind::LayoutGrid => ICON_LAYOUT_GRID,
            IconKind::Cpu => ICON_CPU,
            IconKind::Lock => ICON_LOCK,
            IconKind::Globe => ICON_GLOBE,
            IconKind::Settings => ICON_SETTINGS,
            IconKind::Download => ICON_DOWNLOAD,
            IconKind::Play => ICON_PLAY,
            IconKind::Eye => ICON_EYE,
            IconKind::Send => ICON_SEND,
            IconKind::MessageSquare => ICON_MESSAGE_SQUARE,
            IconKind::Monitor => ICON_MONITOR,
            IconKind::Smartphone => ICON_SMARTPHONE,
            IconKind::Activity => ICON_ACTIVITY,
            IconKind::Plus => ICON_PLUS,
            IconKind::Minus => ICON_MINUS,
        }
    }
}

// =============================================================================
// Lucide icons - https://lucide.dev/
// =============================================================================

const ICON_ZAP: &str = r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#;

const ICON_LAYOUT_GRID: &str = r#"<rect width="7" height="7" x="3" y="3" rx="1"/><rect width="7" height="7" x="14" y="3" rx="1"/><rect width="7" height="7" x="14" y="14" rx="1"/><rect width="7" height="7" x="3" y="14" rx="1"/>"#;

const ICON_CPU: &str = r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/><path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#;

const ICON_LOCK: &str = r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#;

const ICON_GLOBE: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#;

const ICON_SETTINGS: &str = r#"<path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/><circle cx="12" cy="12" r="3"/>"#;

const ICON_DOWNLOAD: &str = r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#;

const ICON_PLAY: &str = r#"<polygon points="6 3 20 12 6 21 6 3"/>"#;

const ICON_EYE: &str = r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/><circle cx="12" cy="12" r="3"/>"#;

const ICON_SEND: &str = r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#;

const ICON_MESSAGE_SQUARE: &str = r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#;

const ICON_MONITOR: &str = r#"<rect width="20" height="14" x="2" y="3" rx="2"/><line x1="8" x2="16" y1="21" y2="21"/><line x1="12" x2="12" y1="17" y2="21"/>"#;

const ICON_SMARTPHONE: &str = r#"<rect width="14" height="20" x="5" y="2" rx="2" ry="2"/><path d="M12 18h.01"/>"#;

const ICON_ACTIVITY: &str = r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#;

const ICON_PLUS: &str = r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#;

const ICON_MINUS: &str = r#"<path d="M5 12h14"/>"#;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconKind; 16] = [
        IconKind::Zap,
        IconKind::LayoutGrid,
        IconKind::Cpu,
        IconKind::Lock,
        IconKind::Globe,
        IconKind::Settings,
        IconKind::Download,
        IconKind::Play,
        IconKind::Eye,
        IconKind::Send,
        IconKind::MessageSquare,
        IconKind::Monitor,
        IconKind::Smartphone,
        IconKind::Activity,
        IconKind::Plus,
        IconKind::Minus,
    ];

    #[test]
    fn every_icon_has_self_closing_shapes() {
        for kind in ALL {
            let markup = kind.svg_markup();
            assert!(markup.starts_with('<'), "{}", kind.name());
            assert!(markup.ends_with("/>"), "{}", kind.name());
            assert!(!markup.contains("<svg"), "{}", kind.name());
        }
    }

    #[test]
    fn icon_names_are_unique_kebab_case() {
        let mut seen = std::collections::HashSet::new();
        for kind in ALL {
            let name = kind.name();
            assert!(seen.insert(name), "duplicate icon name {name}");
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "{name}"
            );
        }
    }
}
