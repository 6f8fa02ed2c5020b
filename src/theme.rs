//! Theme selection and colour palettes
//!
//! The theme is explicit state owned by the application root: it is created
//! from the user configuration at startup, passed to the draw functions, and
//! written back to the configuration on shutdown.

use crate::config::TuiConfig;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// User-selectable theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the terminal's background
    #[default]
    System,
}

impl ThemeMode {
    pub fn next(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

/// Colours used by the draw functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub background: Color,
    pub error: Color,
    pub success: Color,
    pub tag_fg: Color,
    pub tag_bg: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        text: Color::White,
        muted: Color::DarkGray,
        accent: Color::Rgb(255, 112, 0),
        border: Color::Gray,
        background: Color::Black,
        error: Color::Red,
        success: Color::Green,
        tag_fg: Color::Gray,
        tag_bg: Color::Rgb(33, 36, 41),
    };

    pub const LIGHT: Palette = Palette {
        text: Color::Black,
        muted: Color::Gray,
        accent: Color::Rgb(255, 112, 0),
        border: Color::DarkGray,
        background: Color::White,
        error: Color::Red,
        success: Color::Green,
        tag_fg: Color::DarkGray,
        tag_bg: Color::Rgb(240, 240, 240),
    };
}

/// Active theme for the application
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    mode: ThemeMode,
    palette: Palette,
}

impl ThemeProvider {
    /// Create the provider from the user configuration
    pub fn init(config: &TuiConfig) -> Self {
        let mode = config.theme.unwrap_or_default();
        tracing::debug!("Theme initialised in {} mode", mode.label());
        Self {
            mode,
            palette: resolve(mode, terminal_is_dark()),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.palette = resolve(mode, terminal_is_dark());
    }

    pub fn cycle(&mut self) {
        self.set_mode(self.mode.next());
    }

    /// Write the selected mode back to the configuration
    ///
    /// System mode is stored as "no preference".
    pub fn teardown(self, config: &mut TuiConfig) {
        config.theme = match self.mode {
            ThemeMode::System => None,
            mode => Some(mode),
        };
    }
}

fn resolve(mode: ThemeMode, system_dark: bool) -> Palette {
    match mode {
        ThemeMode::Light => Palette::LIGHT,
        ThemeMode::Dark => Palette::DARK,
        ThemeMode::System if system_dark => Palette::DARK,
        ThemeMode::System => Palette::LIGHT,
    }
}

/// Guess the terminal background from `COLORFGBG` ("fg;bg"), defaulting to dark
fn terminal_is_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| background_is_dark(&value))
        .unwrap_or(true)
}

fn background_is_dark(colorfgbg: &str) -> Option<bool> {
    let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg < 7 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_system() {
        let provider = ThemeProvider::init(&TuiConfig::default());
        assert_eq!(provider.mode(), ThemeMode::System);
    }

    #[test]
    fn test_init_uses_configured_mode() {
        let config = TuiConfig {
            theme: Some(ThemeMode::Light),
            ..Default::default()
        };
        let provider = ThemeProvider::init(&config);
        assert_eq!(provider.mode(), ThemeMode::Light);
        assert_eq!(provider.palette(), &Palette::LIGHT);
    }

    #[test]
    fn test_cycle_switches_palette() {
        let config = TuiConfig {
            theme: Some(ThemeMode::Light),
            ..Default::default()
        };
        let mut provider = ThemeProvider::init(&config);
        provider.cycle();
        assert_eq!(provider.mode(), ThemeMode::Dark);
        assert_eq!(provider.palette(), &Palette::DARK);
    }

    #[test]
    fn test_teardown_persists_explicit_mode() {
        let mut config = TuiConfig::default();
        let mut provider = ThemeProvider::init(&config);
        provider.set_mode(ThemeMode::Dark);
        provider.teardown(&mut config);
        assert_eq!(config.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_teardown_clears_system_mode() {
        let mut config = TuiConfig {
            theme: Some(ThemeMode::Light),
            ..Default::default()
        };
        let mut provider = ThemeProvider::init(&config);
        provider.set_mode(ThemeMode::System);
        provider.teardown(&mut config);
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_system_mode_follows_background() {
        assert_eq!(resolve(ThemeMode::System, true), Palette::DARK);
        assert_eq!(resolve(ThemeMode::System, false), Palette::LIGHT);
    }

    #[test]
    fn test_background_is_dark_parsing() {
        assert_eq!(background_is_dark("15;0"), Some(true));
        assert_eq!(background_is_dark("0;15"), Some(false));
        assert_eq!(background_is_dark("0;default;8"), Some(true));
        assert_eq!(background_is_dark("garbage"), None);
    }
}
