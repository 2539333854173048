/// One piece of a compiled template: either literal text copied verbatim,
/// or a field placeholder resolved against the record at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    Literal(String),
    Field(String),
}

/// A parsed output template.
///
/// Templates contain placeholders of the form `{#name#}`, where `name` is
/// one or more word characters (letters, digits, underscore). Everything
/// else, including malformed placeholder syntax, is literal text.
/// Compilation never fails.
///
/// Rendering is a two-pass affair: [`CompiledTemplate::compile`] scans the
/// template once into an ordered segment list, and [`CompiledTemplate::render`]
/// assembles the output by resolving each field name through a callback.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    segments: Vec<TemplateSegment>,
}

impl CompiledTemplate {
    pub fn compile(template: &str) -> Self {
        let chars: Vec<char> = template.chars().collect();
        let mut segments: Vec<TemplateSegment> = Vec::new();
        let mut literal = String::new();
        let mut index = 0;

        while index < chars.len() {
            if chars[index] == '{' && index + 1 < chars.len() && chars[index + 1] == '#' {
                if let Some((name, next)) = scan_placeholder(&chars, index + 2) {
                    if !literal.is_empty() {
                        segments.push(TemplateSegment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(TemplateSegment::Field(name));
                    index = next;
                    continue;
                }
            }
            literal.push(chars[index]);
            index += 1;
        }

        if !literal.is_empty() {
            segments.push(TemplateSegment::Literal(literal));
        }

        Self { segments }
    }

    /// Assembles the output string, calling `resolve` once per placeholder.
    /// The callback returns the replacement text; missing fields should
    /// resolve to the empty string.
    pub fn render<F>(&self, mut resolve: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => output.push_str(text),
                TemplateSegment::Field(name) => output.push_str(&resolve(name)),
            }
        }
        output
    }

    /// The field names referenced by the template, in order of appearance.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            TemplateSegment::Field(name) => Some(name.as_str()),
            TemplateSegment::Literal(_) => None,
        })
    }

    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }
}

/// Tries to read `name#}` starting at `start` (just past the opening `{#`).
/// Returns the field name and the index past the closing `#}`, or None if
/// the text at this position is not a well-formed placeholder.
fn scan_placeholder(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut end = start;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    if end == start {
        return None;
    }
    if end + 1 >= chars.len() || chars[end] != '#' || chars[end + 1] != '}' {
        return None;
    }

    Some((chars[start..end].iter().collect(), end + 2))
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(template: &str) -> CompiledTemplate {
        CompiledTemplate::compile(template)
    }

    #[test]
    fn literal_only_template_round_trips() {
        let template = compile("no placeholders here");
        assert_eq!(template.render(|_| unreachable!()), "no placeholders here");
    }

    #[test]
    fn default_template_references_expected_fields() {
        let template = compile("{#level#} @ {#time#} - {#context#} {#msg#} {#err#}");
        let names: Vec<&str> = template.field_names().collect();
        assert_eq!(names, vec!["level", "time", "context", "msg", "err"]);
    }

    #[test]
    fn placeholders_resolve_through_callback() {
        let template = compile("{#a#}-{#b#}");
        let rendered = template.render(|name| name.to_uppercase());
        assert_eq!(rendered, "A-B");
    }

    #[test]
    fn missing_fields_render_empty() {
        let template = compile("[{#gone#}]");
        assert_eq!(template.render(|_| String::new()), "[]");
    }

    // --- Malformed placeholder syntax stays literal ---

    #[test]
    fn unclosed_placeholder_is_literal() {
        let template = compile("{#level");
        assert_eq!(template.render(|_| unreachable!()), "{#level");
    }

    #[test]
    fn empty_placeholder_is_literal() {
        let template = compile("{##}");
        assert_eq!(template.render(|_| unreachable!()), "{##}");
    }

    #[test]
    fn non_word_characters_break_placeholders() {
        let template = compile("{#a b#}");
        assert_eq!(template.render(|_| unreachable!()), "{#a b#}");
    }

    #[test]
    fn scanner_recovers_after_false_start() {
        let template = compile("{#a{#b#}");
        let names: Vec<&str> = template.field_names().collect();
        assert_eq!(names, vec!["b"]);
        assert_eq!(template.render(|_| "X".to_string()), "{#aX");
    }

    #[test]
    fn underscores_and_digits_are_word_chars() {
        let template = compile("{#http_code2#}");
        let names: Vec<&str> = template.field_names().collect();
        assert_eq!(names, vec!["http_code2"]);
    }
}
