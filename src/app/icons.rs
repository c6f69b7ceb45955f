use leptos::prelude::*;

// Stroke-style 24x24 icon bodies.
const SUN: &str = r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#;
const MOON: &str = r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#;
const MENU: &str = r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#;
const CLOSE: &str = r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#;
const CHEVRON_DOWN: &str = r#"<path d="m6 9 6 6 6-6"/>"#;
const POINTER: &str = r#"<path d="M3 3l7.07 16.97 2.51-7.39 7.39-2.51L3 3z"/><path d="M13 13l6 6"/>"#;
const GITHUB: &str = r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#;
const LINKEDIN: &str = r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#;
const MAIL: &str = r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#;
const FILE_TEXT: &str = r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Sun,
    Moon,
    Menu,
    Close,
    ChevronDown,
    Pointer,
    Github,
    Linkedin,
    Mail,
    FileText,
}

impl IconKind {
    pub(super) fn body(self) -> &'static str {
        match self {
            Self::Sun => SUN,
            Self::Moon => MOON,
            Self::Menu => MENU,
            Self::Close => CLOSE,
            Self::ChevronDown => CHEVRON_DOWN,
            Self::Pointer => POINTER,
            Self::Github => GITHUB,
            Self::Linkedin => LINKEDIN,
            Self::Mail => MAIL,
            Self::FileText => FILE_TEXT,
        }
    }

    /// Maps the icon names used by the content module.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "github" => Some(Self::Github),
            "linkedin" => Some(Self::Linkedin),
            "mail" => Some(Self::Mail),
            "file-text" => Some(Self::FileText),
            _ => None,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            inner_html=kind.body()
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SOCIAL_LINKS;

    #[test]
    fn test_every_social_icon_resolves() {
        for link in SOCIAL_LINKS {
            assert!(
                IconKind::from_name(link.icon).is_some(),
                "{} uses unknown icon {:?}",
                link.label,
                link.icon
            );
        }
    }

    #[test]
    fn test_unknown_icon_name() {
        assert_eq!(IconKind::from_name("GitHub"), None);
        assert_eq!(IconKind::from_name(""), None);
    }

    #[test]
    fn test_theme_icons_are_distinct() {
        assert_ne!(IconKind::Sun.body(), IconKind::Moon.body());
        assert_ne!(IconKind::Menu.body(), IconKind::Close.body());
    }
}
