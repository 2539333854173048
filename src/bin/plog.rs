use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use prettylog::{ChunkSplitter, ColorMode, OptionsOverlay, PrettyFormatter, PrettyLogOptions};

/// A pretty-printer for NDJSON structured logs.
///
/// plog reads newline-delimited JSON records from stdin or files and prints
/// each one as a readable, colorized line. Intended as a development-time
/// companion for structured loggers: `myservice | plog`. Lines that aren't
/// JSON records pass through unchanged.
#[derive(Parser, Debug)]
#[command(name = "plog")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// When to apply ANSI colors.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorModeArg,

    /// Output template; fields are referenced as {#name#}.
    #[arg(short, long, value_name = "TEMPLATE")]
    template: Option<String>,

    /// strftime-style format for the time field.
    #[arg(long, value_name = "FORMAT")]
    time_format: Option<String>,

    /// Render timestamps in UTC instead of local time.
    #[arg(long)]
    utc: bool,

    /// JSON config file with template/time settings.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorModeArg {
    Auto,
    Always,
    Never,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("plog: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = PrettyLogOptions::default();

    if let Some(path) = &args.config {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        let overlay: OptionsOverlay = serde_json::from_str(&content)
            .map_err(|e| format!("cannot parse '{}': {}", path.display(), e))?;
        overlay.apply(&mut options);
    }

    if let Some(template) = args.template {
        options.template = template;
    }
    if let Some(time_format) = args.time_format {
        options.time_format = time_format;
    }
    if args.utc {
        options.utc_time = true;
    }
    options.color_mode = match args.color {
        ColorModeArg::Auto => ColorMode::Auto,
        ColorModeArg::Always => ColorMode::Always,
        ColorModeArg::Never => ColorMode::Never,
    };

    let formatter = PrettyFormatter::with_options(options);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|e| format!("cannot write '{}': {}", path.display(), e))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if args.files.is_empty() {
        pump(io::stdin().lock(), &mut writer, &formatter)?;
    } else {
        for path in &args.files {
            let file = File::open(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            pump(file, &mut writer, &formatter)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Streams the reader into the writer one chunk at a time. Each chunk is
/// fully formatted and flushed before the next read, and lines split across
/// chunk boundaries are reassembled before formatting.
fn pump<R, W>(mut reader: R, writer: &mut W, formatter: &PrettyFormatter) -> io::Result<()>
where
    R: Read,
    W: Write,
{
    let mut splitter = ChunkSplitter::new();
    let mut buf = vec![0u8; 64 * 1024];

    loop {
        let count = reader.read(&mut buf)?;
        if count == 0 {
            break;
        }

        let chunk = String::from_utf8_lossy(&buf[..count]);
        for line in splitter.push(&chunk) {
            writeln!(writer, "{}", formatter.format_line(&line))?;
        }
        writer.flush()?;
    }

    if let Some(line) = splitter.finish() {
        writeln!(writer, "{}", formatter.format_line(&line))?;
        writer.flush()?;
    }

    Ok(())
}
