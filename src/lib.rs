//! # prettylog
//!
//! A pretty-printer for NDJSON structured logs that turns machine-oriented
//! records into readable, colorized terminal lines.
//!
//! Structured loggers (pino and friends) emit one JSON object per line.
//! That's great for machines and miserable during development. prettylog
//! maps each record onto an output template, with per-field transforms:
//!
//! - The numeric severity code becomes a colored label (`INFO`, `ERROR`, ...)
//! - The epoch-milliseconds timestamp becomes a readable date/time
//! - Fields nobody wants at a glance (`pid`, `hostname`) are hidden
//! - Every unrecognized field is appended as a compact JSON object on a
//!   second line, so nothing is silently lost
//! - Lines that aren't JSON records pass through untouched
//!
//! ## Command-Line Tool
//!
//! This crate includes the `plog` CLI tool for use in a shell pipeline:
//!
//! ```sh
//! # Install
//! cargo install prettylog
//!
//! # Pretty-print a service's log stream
//! myservice | plog
//!
//! # Pretty-print a captured log file, timestamps in UTC
//! plog --utc service.log
//!
//! # Custom template
//! myservice | plog -t '{#level#} {#msg#}'
//! ```
//!
//! Run `plog --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use prettylog::PrettyFormatter;
//!
//! let formatter = PrettyFormatter::new();
//!
//! let line = formatter.format_line(
//!     r#"{"level":30,"time":1607285541000,"context":"MixpanelClient","msg":"started"}"#,
//! );
//! println!("{}", line);
//! ```
//!
//! ## Custom Field Mappings
//!
//! The field mapping decides what happens to each record field: transformed
//! for the template, suppressed entirely, or dumped into the overflow JSON.
//! Extend or replace the standard mapping through [`FieldMapping`]:
//!
//! ```rust
//! use prettylog::{display_value, FieldMapping, PrettyFormatter, PrettyLogOptions, StyledText};
//!
//! let mut options = PrettyLogOptions::default();
//! options.template = "{#level#} {#msg#} ({#reqId#})".to_string();
//!
//! let mapping = FieldMapping::standard(&options)
//!     .transform("reqId", |value| StyledText::plain(display_value(value)))
//!     .suppress("v");
//!
//! let formatter = PrettyFormatter::with_mapping(options, mapping);
//! ```
//!
//! ## Example Output
//!
//! Given a pino-style record with extra fields, plog produces:
//!
//! ```text
//! ERROR @ 12/06/2020 20:12:21 - [MixpanelClient] something broke a thing again.
//! {"httpCode":400,"httpResponse":{"body":{}}}
//! ```
//!
//! The first line comes from the template, the second carries every field
//! the mapping doesn't know about.

mod formatter;
mod mapping;
mod options;
mod record;
mod splitter;
mod style;
mod template;

pub use crate::formatter::PrettyFormatter;
pub use crate::mapping::{FieldBehavior, FieldClass, FieldMapping, TransformFn};
pub use crate::options::{
    ColorMode, OptionsOverlay, PrettyLogOptions, DEFAULT_TEMPLATE, DEFAULT_TIME_FORMAT,
};
pub use crate::record::{display_value, is_falsy, parse_record, Record};
pub use crate::splitter::{split_lines, ChunkSplitter};
pub use crate::style::{Style, StyledText};
pub use crate::template::{CompiledTemplate, TemplateSegment};
