//! Tracing subscriber: console formatting and the per-run log file.
//!
//! Both outputs render events through pure line formatters
//! ([`console_line`], [`file_line`]) over the fields pulled out of each
//! event, so stage headers and per-action outcomes look the same whether
//! they come from the [`Logger`](super::Logger) or from a bare `tracing`
//! macro with the right target.
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use super::types::OptionStatus;
use super::utils::{HEADER_STAMP, LINE_STAMP, log_file_path, strip_sgr, utc_now};

/// Target used for stage headers.
pub(super) const STAGE_TARGET: &str = "project_setup::stage";
/// Target used for per-action outcomes; carries `option` and `status` fields.
pub(super) const ACTION_TARGET: &str = "project_setup::action";

/// What the run log header records about the invocation.
#[derive(Debug, Clone, Copy)]
pub struct RunHeader<'a> {
    /// Command name; also names the log file.
    pub command: &'a str,
    /// Working directory targets are resolved against, if known.
    pub root: Option<&'a Path>,
    /// Command word and tokens as given.
    pub args: &'a [String],
}

impl RunHeader<'_> {
    fn render(&self) -> String {
        let version = option_env!("PROJECT_SETUP_VERSION")
            .unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
        let root = self
            .root
            .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
        let args = if self.args.is_empty() {
            "<none>".to_string()
        } else {
            self.args.join(" ")
        };
        format!(
            "# project-setup {version}\n\
             # started {}\n\
             # root    {root}\n\
             # args    {args}\n",
            utc_now(HEADER_STAMP),
        )
    }
}

/// Fields of interest pulled out of one event.
#[derive(Debug, Default)]
struct EventFields {
    message: String,
    option: Option<String>,
    status: Option<OptionStatus>,
}

impl EventFields {
    fn of(event: &tracing::Event<'_>) -> Self {
        let mut fields = Self::default();
        event.record(&mut fields);
        fields
    }

    fn action(&self) -> (&str, OptionStatus) {
        (
            self.option.as_deref().unwrap_or("?"),
            self.status.unwrap_or(OptionStatus::Ok),
        )
    }
}

impl tracing::field::Visit for EventFields {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "option" => self.option = Some(value.to_string()),
            "status" => self.status = OptionStatus::from_field(value),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

/// Console rendering of one event, without the trailing newline.
fn console_line(level: Level, target: &str, fields: &EventFields) -> String {
    let msg = &fields.message;
    if target == STAGE_TARGET {
        return format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m");
    }
    if target == ACTION_TARGET {
        let (option, status) = fields.action();
        let colour = match status {
            OptionStatus::Ok => "32",
            OptionStatus::DryRun => "33",
            OptionStatus::Failed => "31",
        };
        return format!("  \x1b[{colour}m{}\x1b[0m {option}: {msg}", status.marker());
    }
    match level {
        Level::ERROR => format!("\x1b[31merror:\x1b[0m {msg}"),
        Level::WARN => format!("\x1b[33mwarning:\x1b[0m {msg}"),
        Level::INFO => format!("  {msg}"),
        _ => format!("  \x1b[2m{msg}\x1b[0m"),
    }
}

/// Log-file rendering of one event: colour stripped, no timestamp.
fn file_line(level: Level, target: &str, fields: &EventFields) -> String {
    let msg = strip_sgr(&fields.message);
    if target == STAGE_TARGET {
        return format!("==> {msg}");
    }
    if target == ACTION_TARGET {
        let (option, status) = fields.action();
        return format!("    {} {option}: {msg} [{}]", status.marker(), status.as_str());
    }
    let tag = match level {
        Level::ERROR => "error",
        Level::WARN => "warn",
        Level::INFO => "info",
        Level::DEBUG => "debug",
        _ => "trace",
    };
    format!("    {tag:<5} {msg}")
}

/// A [`tracing_subscriber::Layer`] that appends every event to the run log.
///
/// The file is truncated and given a [`RunHeader`] when the layer is created.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Create the log file for `header.command` and write the header.
    ///
    /// Returns `None` if the log directory or the file cannot be created.
    pub(super) fn new(header: &RunHeader<'_>) -> Option<Self> {
        let path = log_file_path(header.command)?;
        fs::write(&path, header.render()).ok()?;
        let file = fs::OpenOptions::new().append(true).open(&path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let metadata = event.metadata();
        let line = file_line(*metadata.level(), metadata.target(), &EventFields::of(event));
        if let Ok(mut file) = self.file.lock() {
            writeln!(file, "[{}] {line}", utc_now(LINE_STAMP)).ok();
        }
    }
}

/// Console [`FormatEvent`](tracing_subscriber::fmt::FormatEvent) delegating to [`console_line`].
struct ConsoleFormat;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormat
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let line = console_line(*metadata.level(), metadata.target(), &EventFields::of(event));
        writeln!(writer, "{line}")
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Warnings and errors go to stderr, everything else to stdout; `debug`
/// reaches the console only with `verbose`.  The run log under
/// `$XDG_CACHE_HOME/project-setup/` always receives `debug` and above.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool, header: &RunHeader<'_>) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormat)
        .with_writer(writer)
        .with_filter(console_level);

    let file_layer = FileLayer::new(header).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
