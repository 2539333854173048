use std::fmt;

/// An immutable description of how a piece of text should look on a terminal.
///
/// Styles are built once when the field mapping is constructed and applied
/// (or not) at render time, keeping the templating logic free of escape
/// sequences. Applying the default style is the identity.
#[derive(Clone, Copy)]
pub struct Style {
    inner: owo_colors::Style,
    plain: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            inner: owo_colors::Style::new(),
            plain: true,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red(self) -> Self {
        Self { inner: self.inner.red(), plain: false }
    }

    pub fn green(self) -> Self {
        Self { inner: self.inner.green(), plain: false }
    }

    pub fn yellow(self) -> Self {
        Self { inner: self.inner.yellow(), plain: false }
    }

    pub fn blue(self) -> Self {
        Self { inner: self.inner.blue(), plain: false }
    }

    pub fn bright_blue(self) -> Self {
        Self { inner: self.inner.bright_blue(), plain: false }
    }

    pub fn magenta(self) -> Self {
        Self { inner: self.inner.magenta(), plain: false }
    }

    pub fn cyan(self) -> Self {
        Self { inner: self.inner.cyan(), plain: false }
    }

    pub fn italic(self) -> Self {
        Self { inner: self.inner.italic(), plain: false }
    }

    pub fn underline(self) -> Self {
        Self { inner: self.inner.underline(), plain: false }
    }

    /// Wraps `text` in the ANSI escape sequences for this style.
    pub fn paint(&self, text: &str) -> String {
        if self.plain {
            return text.to_string();
        }
        self.inner.style(text).to_string()
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plain {
            f.write_str("Style(plain)")
        } else {
            f.write_str("Style(ansi)")
        }
    }
}

/// A display string paired with the style it should be rendered in.
///
/// This is what a field transform returns: the `text` is the semantic
/// content, the `style` is presentation only.
#[derive(Debug, Clone)]
pub struct StyledText {
    pub text: String,
    pub style: Style,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: Style::new() }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style }
    }

    /// Renders the text, applying the style only when `styled` is true.
    pub fn render(&self, styled: bool) -> String {
        if styled {
            self.style.paint(&self.text)
        } else {
            self.text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_is_identity() {
        assert_eq!(Style::new().paint("hello"), "hello");
    }

    #[test]
    fn colored_style_wraps_in_escapes() {
        let painted = Style::new().red().paint("ERROR");
        assert!(painted.starts_with('\u{1b}'));
        assert!(painted.contains("ERROR"));
        assert!(painted.ends_with('m'));
    }

    #[test]
    fn render_without_styling_drops_escapes() {
        let styled = StyledText::styled("WARN", Style::new().yellow().underline());
        assert_eq!(styled.render(false), "WARN");
        assert_ne!(styled.render(true), "WARN");
    }
}
