use std::collections::HashMap;
use std::fmt;

use chrono::{Local, TimeZone, Utc};
use serde_json::Value;

use crate::options::PrettyLogOptions;
use crate::record::{display_value, is_falsy};
use crate::style::{Style, StyledText};

/// A field transform: takes the field's raw value and produces the display
/// text plus the style it should be rendered in.
pub type TransformFn = Box<dyn Fn(&Value) -> StyledText + Send + Sync>;

/// What the mapping does with a field it knows about.
pub enum FieldBehavior {
    /// Replace the value with the transform's output before templating.
    Transform(TransformFn),
    /// Hide the field entirely: it renders as nothing in the template and,
    /// being a mapping key, never reaches the overflow JSON either.
    Suppress,
}

/// The class a field name falls into, given a mapping.
///
/// Every field name belongs to exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Has a transform; meant to be referenced from the template.
    Templated,
    /// Known but hidden from both the template and the overflow JSON.
    Suppressed,
    /// No mapping entry; serialized verbatim into the trailing JSON object.
    Overflow,
}

/// Immutable dispatch table from field name to behavior.
///
/// Built once at startup and shared by every formatting call. Besides
/// driving the per-field transforms, the mapping's key set is what decides
/// which fields overflow into the trailing JSON object.
#[derive(Default)]
pub struct FieldMapping {
    behaviors: HashMap<String, FieldBehavior>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a transform for `name`, replacing any previous behavior.
    pub fn transform<F>(mut self, name: &str, transform: F) -> Self
    where
        F: Fn(&Value) -> StyledText + Send + Sync + 'static,
    {
        self.behaviors
            .insert(name.to_string(), FieldBehavior::Transform(Box::new(transform)));
        self
    }

    /// Marks `name` as suppressed: invisible in the template and excluded
    /// from the overflow JSON.
    pub fn suppress(mut self, name: &str) -> Self {
        self.behaviors.insert(name.to_string(), FieldBehavior::Suppress);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.behaviors.contains_key(name)
    }

    pub(crate) fn behavior(&self, name: &str) -> Option<&FieldBehavior> {
        self.behaviors.get(name)
    }

    /// Classifies a field name. The three classes partition every possible
    /// name: exactly one applies.
    pub fn classify(&self, name: &str) -> FieldClass {
        match self.behaviors.get(name) {
            Some(FieldBehavior::Transform(_)) => FieldClass::Templated,
            Some(FieldBehavior::Suppress) => FieldClass::Suppressed,
            None => FieldClass::Overflow,
        }
    }

    /// The standard mapping for pino-style records.
    ///
    /// `level`, `time`, `context`, `msg` and `err` are transformed for the
    /// default template; `pid` and `hostname` are suppressed. Anything else
    /// a record carries ends up in the overflow JSON.
    pub fn standard(options: &PrettyLogOptions) -> Self {
        let time_format = options.time_format.clone();
        let utc_time = options.utc_time;

        Self::new()
            .transform("level", level_label)
            .transform("time", move |value| {
                timestamp_label(value, &time_format, utc_time)
            })
            .transform("context", context_label)
            .transform("msg", message_label)
            .transform("err", identity)
            .suppress("pid")
            .suppress("hostname")
    }
}

impl fmt::Debug for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<(&str, &str)> = self
            .behaviors
            .iter()
            .map(|(name, behavior)| {
                let kind = match behavior {
                    FieldBehavior::Transform(_) => "transform",
                    FieldBehavior::Suppress => "suppress",
                };
                (name.as_str(), kind)
            })
            .collect();
        names.sort_unstable();
        f.debug_map().entries(names).finish()
    }
}

/// Maps the numeric severity code to its label. The mapping is total:
/// the six well-known codes get their names, everything else is `LOG`.
pub fn level_label(value: &Value) -> StyledText {
    let code = value.as_i64().or_else(|| {
        value
            .as_f64()
            .and_then(|float| (float.fract() == 0.0).then_some(float as i64))
    });

    match code {
        Some(10) => StyledText::plain("TRACE"),
        Some(20) => StyledText::styled("DEBUG", Style::new().green()),
        Some(30) => StyledText::styled("INFO", Style::new().blue()),
        Some(40) => StyledText::styled("WARN", Style::new().yellow()),
        Some(50) => StyledText::styled("ERROR", Style::new().red()),
        Some(60) => StyledText::styled("FATAL", Style::new().red()),
        _ => StyledText::styled("LOG", Style::new().cyan()),
    }
}

/// Formats a Unix-epoch-milliseconds value as a date/time string.
/// Values that aren't a representable timestamp fall back to the generic
/// display coercion rather than erroring.
pub fn timestamp_label(value: &Value, format: &str, utc_time: bool) -> StyledText {
    let style = Style::new().magenta().italic().underline();

    let millis = value
        .as_i64()
        .or_else(|| value.as_f64().map(|float| float as i64));

    let formatted = millis.and_then(|ms| {
        if utc_time {
            Utc.timestamp_millis_opt(ms)
                .single()
                .map(|stamp| stamp.format(format).to_string())
        } else {
            Local.timestamp_millis_opt(ms)
                .single()
                .map(|stamp| stamp.format(format).to_string())
        }
    });

    match formatted {
        Some(text) => StyledText::styled(text, style),
        None => StyledText::styled(display_value(value), style),
    }
}

/// Wraps the component name in square brackets.
pub fn context_label(value: &Value) -> StyledText {
    StyledText::styled(format!("[{}]", display_value(value)), Style::new().yellow())
}

/// Passes the message through with styling only; content is never altered.
pub fn message_label(value: &Value) -> StyledText {
    StyledText::styled(display_value(value), Style::new().bright_blue())
}

/// Identity transform: the value's own display text, unstyled. Falsy values
/// (null, false, zero, empty string) substitute as empty.
pub fn identity(value: &Value) -> StyledText {
    if is_falsy(value) {
        StyledText::plain("")
    } else {
        StyledText::plain(display_value(value))
    }
}
