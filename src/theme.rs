use std::fmt;

/// Display mode for the whole page. The site always starts dark; the choice
/// is not remembered across reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Selects the style variant matching this mode.
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    /// Page-level foreground/background classes.
    pub fn page_class(self) -> &'static str {
        self.pick("bg-black text-white", "bg-white text-black")
    }

    /// Solid accent used by the progress bar, skill bars and primary buttons.
    pub fn accent_class(self) -> &'static str {
        self.pick("bg-white", "bg-black")
    }

    pub fn button_class(self) -> &'static str {
        self.pick(
            "bg-white text-black hover:bg-gray-200",
            "bg-black text-white hover:bg-gray-800",
        )
    }

    /// Header background: a light tint at the top of the page, nearly
    /// opaque once scrolled.
    pub fn header_class(self, scrolled: bool) -> &'static str {
        match (self, scrolled) {
            (Self::Dark, true) => "bg-black/90 backdrop-blur-md shadow-md",
            (Self::Light, true) => "bg-white/90 backdrop-blur-md shadow-md",
            (Self::Dark, false) => "bg-black/20",
            (Self::Light, false) => "bg-white/20",
        }
    }

    /// Tinted hover overlay on project cards. Text colour contrasts with the tint.
    pub fn overlay_class(self) -> &'static str {
        self.pick("bg-black/70 text-white", "bg-white/70 text-black")
    }

    pub fn input_class(self) -> &'static str {
        self.pick(
            "bg-gray-800 border-2 border-gray-700 focus:border-white",
            "bg-gray-200 border-2 border-gray-300 focus:border-black",
        )
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(ThemeMode::default().is_dark());
    }

    #[test]
    fn test_toggle_sequence() {
        let mut mode = ThemeMode::default();
        mode.toggle();
        assert_eq!(mode, ThemeMode::Light);
        mode.toggle();
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_pick_follows_mode() {
        assert_eq!(ThemeMode::Dark.pick(1, 2), 1);
        assert_eq!(ThemeMode::Light.pick(1, 2), 2);
        assert_eq!(ThemeMode::Light.page_class(), "bg-white text-black");
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_translucent_backgrounds_use_alpha_suffix() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let classes = [
                mode.header_class(true),
                mode.header_class(false),
                mode.overlay_class(),
            ];
            for class in classes {
                assert!(!class.contains("bg-opacity"), "{mode}: {class}");
                assert!(class.contains("bg-") && class.contains('/'), "{mode}: {class}");
            }
        }
        assert!(ThemeMode::Dark.header_class(true).starts_with("bg-black/90"));
        assert!(ThemeMode::Light.header_class(true).starts_with("bg-white/90"));
        assert_ne!(
            ThemeMode::Dark.header_class(true),
            ThemeMode::Dark.header_class(false)
        );
    }

    #[test]
    fn test_overlay_text_contrasts_with_tint() {
        assert_eq!(ThemeMode::Dark.overlay_class(), "bg-black/70 text-white");
        assert_eq!(ThemeMode::Light.overlay_class(), "bg-white/70 text-black");
    }
}
