//! Static copy for the Crown Screens landing page.
//!
//! All marketing text lives here as `'static` data so components stay pure
//! functions of their props. [`PageContent::crown_screens`] bundles the
//! slices; [`PageContent::validate`] checks the authoring invariants.

use crate::error::{PageError, Result};
use crate::styles::{ANSWER_MAX_HEIGHT_REM, ANSWER_LINE_HEIGHT_REM, ANSWER_PADDING_REM};
use crate::types::{
    Accent, FaqEntry, FeatureEntry, FooterColumn, GuideStep, IconKind, NavLink, PageContent, Stat,
};

/// Product name used in the nav bar, footer and document title.
pub const PRODUCT_NAME: &str = "Crown Screens";

/// Release announced in the hero badge.
pub const RELEASE_BADGE: &str = "Version 4.2 Now Live";

/// Narrowest answer column we lay out for, in characters per line.
const ANSWER_CHARS_PER_LINE: usize = 36;

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#" },
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "Guide", href: "#guide" },
    NavLink { label: "FAQ", href: "#faq" },
];

pub static FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        title: "Mass Device Sync",
        description: "Millisecond-level latency sending keystrokes, gestures, and commands to hundreds of devices simultaneously. Realize true 'one-to-many' operations.",
        icon: IconKind::Zap,
        accent: Accent::Primary,
        stats: &[
            Stat { label: "Latency", value: "< 2ms" },
            Stat { label: "Capacity", value: "Unlimited" },
        ],
    },
    FeatureEntry {
        title: "Visual Dashboard",
        description: "Real-time thumbnail previews for all connected devices. Monitor device status and performance metrics from a single, unified interface.",
        icon: IconKind::LayoutGrid,
        accent: Accent::Secondary,
        stats: &[
            Stat { label: "Refresh Rate", value: "60 FPS" },
            Stat { label: "Modes", value: "Grid/List" },
        ],
    },
    FeatureEntry {
        title: "Wireless ADB Protocol",
        description: "Based on standard ADB Over WiFi. Break free from cable clutter and access your remote device pool anytime, anywhere.",
        icon: IconKind::Cpu,
        accent: Accent::Primary,
        stats: &[
            Stat { label: "Connection", value: "WiFi/USB" },
            Stat { label: "Support", value: "Android 5+" },
        ],
    },
    FeatureEntry {
        title: "Enterprise-Grade Security",
        description: "All data streams are encrypted with AES-256. Supports role-based access control to protect sensitive business operations.",
        icon: IconKind::Lock,
        accent: Accent::Secondary,
        stats: &[
            Stat { label: "Encryption", value: "AES-256" },
            Stat { label: "Auth", value: "SSO Ready" },
        ],
    },
    FeatureEntry {
        title: "Global Node Relay",
        description: "Utilize built-in relay servers to manage devices across different regions and networks while maintaining extreme link stability.",
        icon: IconKind::Globe,
        accent: Accent::Primary,
        stats: &[
            Stat { label: "Uptime", value: "99.9%" },
            Stat { label: "Nodes", value: "Global" },
        ],
    },
    FeatureEntry {
        title: "Smart Automation",
        description: "Record and replay complex tasks. Supports visual process design with Python/JS script extensions to maximize efficiency.",
        icon: IconKind::Settings,
        accent: Accent::Secondary,
        stats: &[
            Stat { label: "Scripting", value: "Python/JS" },
            Stat { label: "Flow", value: "Visual" },
        ],
    },
];

pub static GUIDE_STEPS: &[GuideStep] = &[
    GuideStep {
        step: "01",
        title: "Download & Install",
        desc: "Get the installer for your OS from the official site and run the one-click setup.",
        icon: IconKind::Download,
    },
    GuideStep {
        step: "02",
        title: "Activate ADB Mode",
        desc: "Connect your device via USB once to authorize Wireless ADB, then you can disconnect the cables forever.",
        icon: IconKind::Cpu,
    },
    GuideStep {
        step: "03",
        title: "Start Managing",
        desc: "Devices appear automatically in the dashboard. You can start syncing or running scripts immediately.",
        icon: IconKind::LayoutGrid,
    },
];

pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How many devices does Crown Screens support?",
        answer: "There is no software-imposed limit. Capacity is primarily determined by your host hardware (CPU/RAM). On high-performance workstations, we have successfully managed 500+ concurrent devices.",
    },
    FaqEntry {
        question: "Does the software require Root access?",
        answer: "No. Crown Screens is developed based on standard ADB protocols. No Root is required for screen sharing, touch control, or file management on Android devices.",
    },
    FaqEntry {
        question: "Can I remotely control devices across different regions?",
        answer: "Yes. With our built-in Relay Server feature, you can seamlessly control devices anywhere in the world as long as they have internet access.",
    },
    FaqEntry {
        question: "What operating systems are supported?",
        answer: "We currently support Windows 10/11, macOS (Intel/M1/M2/M3), and major Linux distributions. Mobile device support includes Android 5.0 and above.",
    },
];

pub static FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &[
            NavLink { label: "Downloads", href: "#" },
            NavLink { label: "Features", href: "#features" },
            NavLink { label: "Pricing", href: "#" },
            NavLink { label: "Change Log", href: "#" },
        ],
    },
    FooterColumn {
        heading: "Support",
        links: &[
            NavLink { label: "Documentation", href: "#" },
            NavLink { label: "Help Center", href: "#" },
            NavLink { label: "Community", href: "#" },
            NavLink { label: "API Keys", href: "#" },
        ],
    },
];

pub static LEGAL_LINKS: &[NavLink] = &[
    NavLink { label: "Privacy Policy", href: "#" },
    NavLink { label: "Terms of Service", href: "#" },
    NavLink { label: "Cookie Settings", href: "#" },
];

impl PageContent {
    /// The content shipped on crownscreens.io.
    pub fn crown_screens() -> Self {
        Self {
            nav_links: NAV_LINKS,
            features: FEATURES,
            steps: GUIDE_STEPS,
            faqs: FAQS,
            footer_columns: FOOTER_COLUMNS,
            legal_links: LEGAL_LINKS,
        }
    }

    /// Checks the authoring invariants the components rely on: no rendered
    /// section is empty and no FAQ answer outgrows the collapse cap.
    pub fn validate(&self) -> Result<()> {
        if self.features.is_empty() {
            return Err(PageError::EmptySection("features"));
        }
        if self.steps.is_empty() {
            return Err(PageError::EmptySection("steps"));
        }
        if self.faqs.is_empty() {
            return Err(PageError::EmptySection("faqs"));
        }

        for (index, faq) in self.faqs.iter().enumerate() {
            let estimated_rem = estimated_answer_height_rem(faq.answer);
            if estimated_rem > ANSWER_MAX_HEIGHT_REM {
                return Err(PageError::AnswerExceedsCap {
                    index,
                    estimated_rem,
                    cap_rem: ANSWER_MAX_HEIGHT_REM,
                });
            }
        }
        Ok(())
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self::crown_screens()
    }
}

/// Rough rendered height of an open answer, bottom padding included.
pub fn estimated_answer_height_rem(answer: &str) -> f32 {
    let chars = answer.chars().count();
    let lines = chars.div_ceil(ANSWER_CHARS_PER_LINE).max(1);
    lines as f32 * ANSWER_LINE_HEIGHT_REM + ANSWER_PADDING_REM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_content_is_valid() {
        PageContent::crown_screens().validate().unwrap();
    }

    #[test]
    fn shipped_content_shape() {
        let content = PageContent::default();
        assert_eq!(content.features.len(), 6);
        assert_eq!(content.steps.len(), 3);
        assert_eq!(content.faqs.len(), 4);
        assert!(content.features.iter().all(|f| f.stats.len() == 2));
        assert_eq!(
            content.steps.iter().map(|s| s.step).collect::<Vec<_>>(),
            vec!["01", "02", "03"]
        );
    }

    #[test]
    fn empty_faq_list_is_an_authoring_defect() {
        let content = PageContent {
            faqs: &[],
            ..PageContent::crown_screens()
        };
        assert_eq!(content.validate(), Err(PageError::EmptySection("faqs")));
    }

    #[test]
    fn empty_feature_grid_is_rejected_first() {
        let content = PageContent {
            features: &[],
            steps: &[],
            ..PageContent::crown_screens()
        };
        assert_eq!(content.validate(), Err(PageError::EmptySection("features")));
    }

    #[test]
    fn oversized_answer_is_rejected() {
        static LONG: &[FaqEntry] = &[FaqEntry {
            question: "Short?",
            answer: include_str!("../tests/fixtures/long_answer.txt"),
        }];
        let content = PageContent {
            faqs: LONG,
            ..PageContent::crown_screens()
        };
        match content.validate() {
            Err(PageError::AnswerExceedsCap { index, cap_rem, .. }) => {
                assert_eq!(index, 0);
                assert_eq!(cap_rem, ANSWER_MAX_HEIGHT_REM);
            }
            other => panic!("expected AnswerExceedsCap, got {other:?}"),
        }
    }

    #[test]
    fn every_answer_leaves_headroom_under_cap() {
        for faq in FAQS {
            let height = estimated_answer_height_rem(faq.answer);
            assert!(
                height * 2.0 <= ANSWER_MAX_HEIGHT_REM,
                "{:?} estimated at {height}rem",
                faq.question
            );
        }
    }

    #[test]
    fn height_estimate_counts_wrapped_lines() {
        let one_line = estimated_answer_height_rem("Yes.");
        let two_lines = estimated_answer_height_rem(&"x".repeat(ANSWER_CHARS_PER_LINE + 1));
        assert_eq!(one_line, ANSWER_LINE_HEIGHT_REM + ANSWER_PADDING_REM);
        assert_eq!(two_lines, 2.0 * ANSWER_LINE_HEIGHT_REM + ANSWER_PADDING_REM);
    }
}
