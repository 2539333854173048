use std::io;

use is_terminal::IsTerminal;
use serde::Deserialize;

/// The default output template, matching the fields a pino-style logger emits.
pub const DEFAULT_TEMPLATE: &str = "{#level#} @ {#time#} - {#context#} {#msg#} {#err#}";

/// The default strftime-style format for the `time` field.
pub const DEFAULT_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// When to apply ANSI styling to the output.
///
/// Styling is purely presentational: with [`ColorMode::Never`] the output
/// carries exactly the same text content with no escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Style the output only when stdout is a terminal, so piping into a
    /// file or another tool produces clean text. This is the default.
    Auto,
    /// Always emit ANSI escape sequences.
    Always,
    /// Never emit ANSI escape sequences.
    Never,
}

impl ColorMode {
    /// Resolves the mode to a concrete on/off decision at startup.
    pub fn resolve(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => io::stdout().is_terminal(),
        }
    }
}

/// Configuration options for log pretty-printing.
///
/// This struct contains all settings that control how records are rendered.
/// Use [`Default::default()`] or [`PrettyLogOptions::recommended()`] to get
/// sensible defaults, then modify individual fields as needed. The options
/// are read once when a [`crate::PrettyFormatter`] is constructed and are
/// immutable afterwards.
///
/// # Example
///
/// ```rust
/// use prettylog::{ColorMode, PrettyLogOptions};
///
/// let mut options = PrettyLogOptions::default();
/// options.template = "{#level#} {#msg#}".to_string();
/// options.utc_time = true;
/// options.color_mode = ColorMode::Never;
/// ```
#[derive(Debug, Clone)]
pub struct PrettyLogOptions {
    /// The output template. Placeholders of the form `{#name#}` are replaced
    /// with the named record field; anything else is copied verbatim.
    /// Default: [`DEFAULT_TEMPLATE`].
    pub template: String,

    /// strftime-style format applied to the `time` field.
    /// Default: [`DEFAULT_TIME_FORMAT`].
    pub time_format: String,

    /// Render timestamps in UTC instead of local time.
    /// Default: false.
    pub utc_time: bool,

    /// When to apply ANSI styling. Default: [`ColorMode::Auto`].
    pub color_mode: ColorMode,
}

impl Default for PrettyLogOptions {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            utc_time: false,
            color_mode: ColorMode::Auto,
        }
    }
}

impl PrettyLogOptions {
    /// Creates a new `PrettyLogOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`], but may include
    /// improved defaults in future versions without breaking compatibility.
    pub fn recommended() -> Self {
        Self::default()
    }
}

/// Partial options loaded from a JSON config file.
///
/// Every field is optional; present fields overwrite the corresponding
/// [`PrettyLogOptions`] field, absent ones leave the current value alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionsOverlay {
    pub template: Option<String>,
    pub time_format: Option<String>,
    pub utc_time: Option<bool>,
}

impl OptionsOverlay {
    pub fn apply(&self, options: &mut PrettyLogOptions) {
        if let Some(template) = &self.template {
            options.template = template.clone();
        }
        if let Some(time_format) = &self.time_format {
            options.time_format = time_format.clone();
        }
        if let Some(utc_time) = self.utc_time {
            options.utc_time = utc_time;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_standard_template() {
        let options = PrettyLogOptions::default();
        assert_eq!(options.template, DEFAULT_TEMPLATE);
        assert_eq!(options.time_format, DEFAULT_TIME_FORMAT);
        assert!(!options.utc_time);
        assert_eq!(options.color_mode, ColorMode::Auto);
    }

    #[test]
    fn overlay_overwrites_only_present_fields() {
        let overlay: OptionsOverlay =
            serde_json::from_str(r#"{"template":"{#msg#}","utc_time":true}"#).unwrap();

        let mut options = PrettyLogOptions::default();
        overlay.apply(&mut options);

        assert_eq!(options.template, "{#msg#}");
        assert_eq!(options.time_format, DEFAULT_TIME_FORMAT);
        assert!(options.utc_time);
    }

    #[test]
    fn overlay_tolerates_empty_object() {
        let overlay: OptionsOverlay = serde_json::from_str("{}").unwrap();
        let mut options = PrettyLogOptions::default();
        overlay.apply(&mut options);
        assert_eq!(options.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn color_mode_resolves_explicit_choices() {
        assert!(ColorMode::Always.resolve());
        assert!(!ColorMode::Never.resolve());
    }
}
