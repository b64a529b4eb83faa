//! # Output Styling
//!
//! Status lines printed by the CLI (phase banners, the final verdict) go
//! through [`Style`], which decides once whether to use color and emoji.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! CI logs are usually not a TTY, so `auto` falls back to plain markers there
//! unless the provider sets `CLICOLOR_FORCE`.

use std::env;

use console::style;

/// Output style for status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl Style {
    /// Resolve the style from the `--color` flag and the environment.
    pub fn from_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    fn detect_color_support() -> bool {
        // Presence alone disables colors, even when empty.
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Line announcing a successful run.
    pub fn success(&self, message: &str) -> String {
        if self.use_color {
            format!("✅ {}", style(message).green().bold())
        } else {
            format!("[OK] {}", message)
        }
    }

    /// Line announcing a skipped run.
    pub fn skipped(&self, message: &str) -> String {
        if self.use_color {
            format!("⏭️  {}", style(message).yellow())
        } else {
            format!("[SKIP] {}", message)
        }
    }

    /// Line announcing a failed run.
    pub fn failure(&self, message: &str) -> String {
        if self.use_color {
            format!("❌ {}", style(message).red().bold())
        } else {
            format!("[FAIL] {}", message)
        }
    }

    /// Section heading, e.g. above a plan listing.
    pub fn heading(&self, message: &str) -> String {
        if self.use_color {
            style(message).cyan().bold().to_string()
        } else {
            message.to_string()
        }
    }
}
