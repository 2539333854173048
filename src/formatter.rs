use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::mapping::{FieldBehavior, FieldMapping};
use crate::options::PrettyLogOptions;
use crate::record::{display_value, is_falsy, parse_record, Record};
use crate::splitter::split_lines;
use crate::style::StyledText;
use crate::template::CompiledTemplate;

/// A field's value after the mapping pass, just before template assembly.
enum Resolved<'a> {
    /// A mapping entry produced display text (possibly empty, for
    /// suppressed fields).
    Transformed(StyledText),
    /// No mapping entry; the raw value is carried through and only coerced
    /// to text if the template actually references it.
    Raw(&'a Value),
}

/// Formats structured log records into human-readable lines.
///
/// The formatter owns its configuration: the compiled output template, the
/// field mapping, and the resolved styling decision. All of it is built once
/// at construction and immutable afterwards, so formatting is a pure
/// function of the input record.
///
/// # Example
///
/// ```rust
/// use prettylog::{ColorMode, PrettyFormatter, PrettyLogOptions};
///
/// let mut options = PrettyLogOptions::default();
/// options.utc_time = true;
/// options.color_mode = ColorMode::Never;
///
/// let formatter = PrettyFormatter::with_options(options);
/// let line = formatter.format_line(r#"{"level":30,"msg":"started"}"#);
/// assert!(line.contains("INFO"));
/// assert!(line.contains("started"));
/// ```
pub struct PrettyFormatter {
    options: PrettyLogOptions,
    template: CompiledTemplate,
    mapping: FieldMapping,
    styled: bool,
}

impl Default for PrettyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PrettyFormatter {
    /// Creates a formatter with default options and the standard field
    /// mapping.
    pub fn new() -> Self {
        Self::with_options(PrettyLogOptions::default())
    }

    /// Creates a formatter with the given options and the standard field
    /// mapping derived from them.
    pub fn with_options(options: PrettyLogOptions) -> Self {
        let mapping = FieldMapping::standard(&options);
        Self::with_mapping(options, mapping)
    }

    /// Creates a formatter with a custom field mapping.
    pub fn with_mapping(options: PrettyLogOptions, mapping: FieldMapping) -> Self {
        let template = CompiledTemplate::compile(&options.template);
        let styled = options.color_mode.resolve();
        Self { options, template, mapping, styled }
    }

    pub fn options(&self) -> &PrettyLogOptions {
        &self.options
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Splits a chunk into lines and formats each one. An empty chunk
    /// produces no output lines.
    pub fn format_chunk(&self, chunk: &str) -> Vec<String> {
        split_lines(chunk)
            .into_iter()
            .map(|line| self.format_line(line))
            .collect()
    }

    /// Formats one input line: parsed records go through the template
    /// engine, anything else is echoed back unchanged.
    pub fn format_line(&self, line: &str) -> String {
        match parse_record(line) {
            Some(record) => self.format_record(&record),
            None => line.to_string(),
        }
    }

    /// Formats one parsed record.
    ///
    /// Mapped fields are replaced by their transform's output, the template
    /// placeholders are substituted (absent or falsy fields become the empty
    /// string), and any field without a mapping entry is serialized into a
    /// compact JSON object appended on a second line. Never fails.
    pub fn format_record(&self, record: &Record) -> String {
        let mut resolved: HashMap<&str, Resolved<'_>> = HashMap::with_capacity(record.len());
        for (name, value) in record {
            let entry = match self.mapping.behavior(name) {
                Some(FieldBehavior::Transform(transform)) => {
                    Resolved::Transformed(transform(value))
                }
                Some(FieldBehavior::Suppress) => Resolved::Transformed(StyledText::plain("")),
                None => Resolved::Raw(value),
            };
            resolved.insert(name.as_str(), entry);
        }

        let mut output = self.template.render(|name| match resolved.get(name) {
            Some(Resolved::Transformed(styled)) if !styled.text.is_empty() => {
                styled.render(self.styled)
            }
            Some(Resolved::Raw(value)) if !is_falsy(value) => display_value(value),
            _ => String::new(),
        });

        let overflow = self.overflow_fields(record);
        if !overflow.is_empty() {
            output.push('\n');
            output.push_str(
                &serde_json::to_string(&Value::Object(overflow)).unwrap_or_default(),
            );
        }
        output
    }

    /// Formats any serializable value as if it had arrived as one input
    /// line. Values that don't serialize to a JSON object render through
    /// the plain display coercion.
    pub fn format_serializable<T: Serialize>(&self, value: &T) -> Result<String, serde_json::Error> {
        let value = serde_json::to_value(value)?;
        Ok(match value {
            Value::Object(record) => self.format_record(&record),
            other => display_value(&other),
        })
    }

    /// The record fields with no mapping entry, original values, in input
    /// order. Template use does not matter here: a field referenced by the
    /// template but absent from the mapping still overflows.
    fn overflow_fields(&self, record: &Record) -> Map<String, Value> {
        let mut overflow = Map::new();
        for (name, value) in record {
            if !self.mapping.contains(name) {
                overflow.insert(name.clone(), value.clone());
            }
        }
        overflow
    }
}
