/// One-shot viewport visibility. Moves `NotSeen -> Seen` on the first
/// intersection and never moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    NotSeen,
    Seen,
}

impl Visibility {
    /// Feeds one intersection observation. Returns `true` only for the
    /// observation that caused the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (Self::NotSeen, true) => {
                *self = Self::Seen;
                true
            }
            _ => false,
        }
    }

    pub fn is_seen(self) -> bool {
        self == Self::Seen
    }
}

/// Where a revealed element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    /// From 50px below.
    Rise,
    /// From 50px to the left.
    SlideLeft,
    /// From 20px to the left.
    Nudge,
}

impl Entrance {
    pub fn hidden_transform(self) -> &'static str {
        match self {
            Self::Rise => "translateY(50px)",
            Self::SlideLeft => "translateX(-50px)",
            Self::Nudge => "translateX(-20px)",
        }
    }
}

/// Inline style for a revealed element in the given state.
pub fn reveal_style(
    visibility: Visibility,
    entrance: Entrance,
    duration: f64,
    delay: f64,
) -> String {
    let (opacity, transform) = if visibility.is_seen() {
        (1, "none")
    } else {
        (0, entrance.hidden_transform())
    };
    format!(
        "opacity: {opacity}; transform: {transform}; transition: opacity {duration:.2}s ease-out {delay:.2}s, transform {duration:.2}s ease-out {delay:.2}s;"
    )
}
