//! Theme system for UI styling
//!
//! Consistent styling across components with a couple of built-in themes.

use ratatui::style::{Color, Modifier, Style};

/// UI theme containing all style definitions
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Color scheme
    pub colors: ColorScheme,
}

impl Theme {
    /// Load a theme by name, falling back to the default
    pub fn load(theme_name: &str) -> Self {
        match theme_name {
            "dark" => Self::dark_theme(),
            _ => Self::default_theme(),
        }
    }

    /// Default theme (dark with blue accents)
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            colors: ColorScheme {
                background: Color::Reset,
                foreground: Color::White,
                primary: Color::Blue,
                success: Color::Green,
                error: Color::Red,
                info: Color::Blue,
                muted: Color::DarkGray,
            },
        }
    }

    /// Dark theme with softer colors
    pub fn dark_theme() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ColorScheme {
                background: Color::Black,
                foreground: Color::Rgb(220, 220, 220),
                primary: Color::Rgb(100, 149, 237),
                success: Color::Rgb(50, 205, 50),
                error: Color::Rgb(220, 20, 60),
                info: Color::Rgb(135, 206, 235),
                muted: Color::Rgb(105, 105, 105),
            },
        }
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.colors.foreground)
    }

    /// Get style for selected/highlighted text
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.colors.background)
            .bg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for success messages
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.colors.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for error messages
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.colors.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for info messages
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.colors.info)
    }

    /// Get style for muted/disabled text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }
}

/// Color scheme for themes
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
}
