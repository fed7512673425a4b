use std::{fmt, str::FromStr};

use leptos::prelude::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Colors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fonts {
    pub primary: &'static str,
    pub mono: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakpoints {
    pub mobile: &'static str,
    pub tablet: &'static str,
    pub desktop: &'static str,
}

/// Named style tokens for one theme. Palettes are never mutated, only selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub colors: Colors,
    pub fonts: Fonts,
    pub spacing: Spacing,
    pub breakpoints: Breakpoints,
    pub avatar_border: &'static str,
}

const FONTS: Fonts = Fonts {
    primary: "'Inter', sans-serif",
    mono: "'Fira Code', monospace",
};

const SPACING: Spacing = Spacing {
    xs: "0.25rem",
    sm: "0.5rem",
    md: "1rem",
    lg: "2rem",
    xl: "4rem",
};

const BREAKPOINTS: Breakpoints = Breakpoints {
    mobile: "320px",
    tablet: "768px",
    desktop: "1024px",
};

pub static DARK: Palette = Palette {
    colors: Colors {
        primary: "#64ffda",
        secondary: "#7928ca",
        background: "#0a192f",
        surface: "#112240",
        text: "#e6f1ff",
        text_secondary: "#8892b0",
        accent: "#ffd700",
        error: "#ff5555",
        success: "#50fa7b",
        border: "#1d2d50",
    },
    fonts: FONTS,
    spacing: SPACING,
    breakpoints: BREAKPOINTS,
    avatar_border: "#64ffda",
};

pub static LIGHT: Palette = Palette {
    colors: Colors {
        primary: "#0070f3",
        secondary: "#7928ca",
        background: "#ffffff",
        surface: "#f8f9fa",
        text: "#1a1a1a",
        text_secondary: "#4a5568",
        accent: "#7928ca",
        error: "#ff4444",
        success: "#0070f3",
        border: "#e2e8f0",
    },
    fonts: FONTS,
    spacing: SPACING,
    breakpoints: BREAKPOINTS,
    avatar_border: "#0070f3",
};

impl Palette {
    /// Renders every token as a CSS custom property declaration.
    ///
    /// The stylesheet only reads `var(--...)`, so setting this on the page
    /// container restyles every section below it.
    pub fn css_variables(&self) -> String {
        let Colors {
            primary,
            secondary,
            background,
            surface,
            text,
            text_secondary,
            accent,
            error,
            success,
            border,
        } = self.colors;
        [
            ("color-primary", primary),
            ("color-secondary", secondary),
            ("color-background", background),
            ("color-surface", surface),
            ("color-text", text),
            ("color-text-secondary", text_secondary),
            ("color-accent", accent),
            ("color-error", error),
            ("color-success", success),
            ("color-border", border),
            ("font-primary", self.fonts.primary),
            ("font-mono", self.fonts.mono),
            ("space-xs", self.spacing.xs),
            ("space-sm", self.spacing.sm),
            ("space-md", self.spacing.md),
            ("space-lg", self.spacing.lg),
            ("space-xl", self.spacing.xl),
            ("breakpoint-mobile", self.breakpoints.mobile),
            ("breakpoint-tablet", self.breakpoints.tablet),
            ("breakpoint-desktop", self.breakpoints.desktop),
            ("avatar-border", self.avatar_border),
        ]
        .iter()
        .map(|(name, value)| format!("--{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

/// The page-wide theme selection, shared with every section through context.
#[derive(Debug, Clone, Copy)]
pub struct ThemeState {
    selected: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new(theme: Theme) -> Self {
        Self {
            selected: RwSignal::new(theme),
        }
    }

    pub fn toggle(&self) {
        self.selected.update(|theme| *theme = theme.toggle());
        log::debug!("theme switched to {}", self.selected.get_untracked());
    }

    pub fn theme(&self) -> Signal<Theme> {
        self.selected.into()
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let selected = self.selected;
        Signal::derive(move || selected.get().is_dark())
    }

    pub fn palette(&self) -> Signal<&'static Palette> {
        let selected = self.selected;
        Signal::derive(move || selected.get().palette())
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

pub fn provide_theme(theme: Theme) -> ThemeState {
    let state = ThemeState::new(theme);
    provide_context(state);
    state
}

pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
            assert_eq!(theme.toggle().toggle().palette(), theme.palette());
        }
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
        assert_eq!(Theme::Light.palette().colors.background, "#ffffff");
        assert_eq!(Theme::Dark.palette().colors.background, "#0a192f");
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeError::Unknown("sepia".to_string()))
        );
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_css_variables_cover_palette() {
        let vars = DARK.css_variables();
        assert!(vars.contains("--color-primary: #64ffda;"));
        assert!(vars.contains("--color-text-secondary: #8892b0;"));
        assert!(vars.contains("--font-mono: 'Fira Code', monospace;"));
        assert!(vars.contains("--space-xl: 4rem;"));
        assert!(vars.contains("--avatar-border: #64ffda;"));
        for (name, value) in [
            ("mobile", DARK.breakpoints.mobile),
            ("tablet", DARK.breakpoints.tablet),
            ("desktop", DARK.breakpoints.desktop),
        ] {
            assert!(
                vars.contains(&format!("--breakpoint-{name}: {value};")),
                "missing breakpoint {name} in {vars}"
            );
        }

        let light = LIGHT.css_variables();
        assert!(light.contains("--color-primary: #0070f3;"));
        assert!(!light.contains("#64ffda"));
        assert_eq!(vars.matches("--").count(), light.matches("--").count());
    }

    #[test]
    fn test_theme_state_toggle() {
        let owner = Owner::new();
        owner.with(|| {
            let state = ThemeState::new(Theme::Light);
            assert!(!state.is_dark().get_untracked());

            state.toggle();
            assert_eq!(state.theme().get_untracked(), Theme::Dark);
            assert_eq!(state.palette().get_untracked(), &DARK);

            state.toggle();
            assert_eq!(state.theme().get_untracked(), Theme::Light);
            assert_eq!(state.palette().get_untracked(), &LIGHT);
        });
    }
}
