/// Interval type the countdown is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Deep-work interval. Completing one credits the history.
    Work,
    /// Rest interval.
    Rest,
}

impl Mode {
    /// Parse mode from its stored tag ("deep" / "rest")
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "deep" => Some(Self::Work),
            "rest" => Some(Self::Rest),
            _ => None,
        }
    }

    /// Convert mode to its stored tag
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Work => "deep",
            Self::Rest => "rest",
        }
    }

    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Rest => "Rest",
        }
    }

    /// The mode an interval of this mode hands over to when it completes
    pub fn other(&self) -> Self {
        match self {
            Self::Work => Self::Rest,
            Self::Rest => Self::Work,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Settings modal is open (text fields have focus)
    Settings,
    /// Typing a new todo (text field has focus)
    AddingTodo,
}

impl UiMode {
    /// Whether a text input currently owns the keyboard
    pub fn captures_text(&self) -> bool {
        matches!(self, Self::Settings | Self::AddingTodo)
    }
}
