//! Centralized theme and color scheme for the dashboard.
//!
//! Every view reads colors through [`colors`], so toggling the theme at
//! runtime restyles the whole screen on the next frame.

use crate::scoring::Band;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Available dashboard themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
    HighContrast,
}

impl ThemeKind {
    /// Name used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::HighContrast => "high-contrast",
        }
    }

    /// Parse a theme name (case-insensitive, with a few aliases).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "high-contrast" | "highcontrast" | "hc" => Some(Self::HighContrast),
            _ => None,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dark, Self::Light, Self::HighContrast]
    }

    /// Next theme in the rotation (dark -> light -> high-contrast -> dark)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::HighContrast,
            Self::HighContrast => Self::Dark,
        }
    }
}

/// Color scheme for the dashboard.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub highlight: Color,

    // Status colors, one per score band
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub badge_fg: Color,
    pub error_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            highlight: Color::Yellow,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg: Color::Black,
            error_bg: Color::Rgb(80, 30, 30),
        }
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            secondary: Color::Rgb(0, 0, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            highlight: Color::Rgb(180, 140, 0),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            badge_fg: Color::White,
            error_bg: Color::Rgb(255, 200, 200),
        }
    }

    /// High contrast theme (accessibility)
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::LightCyan,
            secondary: Color::LightBlue,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            highlight: Color::LightYellow,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg: Color::Black,
            error_bg: Color::Rgb(100, 30, 30),
        }
    }

    #[must_use]
    pub const fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
            ThemeKind::HighContrast => Self::high_contrast(),
        }
    }

    /// Semantic color for a score band.
    #[must_use]
    pub const fn band_color(&self, band: Band) -> Color {
        match band {
            Band::Excellent => self.success,
            Band::Good => self.warning,
            Band::NeedsImprovement => self.error,
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: ColorScheme,
    pub kind: ThemeKind,
}

impl Theme {
    #[must_use]
    pub const fn new(kind: ThemeKind) -> Self {
        Self {
            colors: ColorScheme::for_kind(kind),
            kind,
        }
    }

    /// Theme for a configured name, falling back to dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::new(ThemeKind::from_name(name).unwrap_or(ThemeKind::Dark))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeKind::Dark)
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::new(ThemeKind::Dark));

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .kind
        .name()
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation and return its name
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme.kind.next());
    theme.kind.name()
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }

    /// Foreground style for a score band.
    pub fn band(band: Band) -> Style {
        Style::default().fg(colors().band_color(band))
    }
}

/// Render a band badge such as ` Excellent ↑ `.
pub fn band_badge(band: Band) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} {} ", band.label(), band.trend().symbol()),
        Style::default()
            .fg(scheme.badge_fg)
            .bg(scheme.band_color(band))
            .bold(),
    )
}

/// Footer key hints, rendered as `key description` pairs.
pub fn footer_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Styles::shortcut_desc()));
        }
        spans.push(Span::styled(*key, Styles::shortcut_key().bold()));
        spans.push(Span::styled(format!(" {desc}"), Styles::shortcut_desc()));
    }
    Line::from(spans)
}
