use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// No colors regardless of terminal
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Applies terminal styling only when the configured color mode allows it.
///
/// An enabled styler forces `colored` on for its own lifetime and releases
/// the override when dropped.
#[derive(Debug)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        if enabled {
            colored::control::set_override(true);
        }
        Self { enabled }
    }

    pub fn success(&self, text: &str) -> String {
        self.apply(text, |t| t.green().bold())
    }

    pub fn error(&self, text: &str) -> String {
        self.apply(text, |t| t.red().bold())
    }

    pub fn header(&self, text: &str) -> String {
        self.apply(text, |t| t.blue().bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.apply(text, |t| t.dimmed())
    }

    fn apply(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Drop for Styler {
    fn drop(&mut self) {
        if self.enabled {
            colored::control::unset_override();
        }
    }
}

/// clap value parser for `--color`
pub fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    ColorMode::parse(s)
        .ok_or_else(|| format!("invalid color mode '{s}' (expected auto, always or never)"))
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
