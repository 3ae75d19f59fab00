//! Tracing subscriber setup: console formatter and initialisation.
use super::utils::{strip_ansi, use_color};

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits recase-style
/// console output: `==>` stage headers, indented info lines and coloured
/// warning/error prefixes.
#[derive(Debug, Clone, Copy)]
pub(super) struct RecaseFormatter {
    /// Emit ANSI colour codes; when `false` they are stripped from messages too.
    pub(super) color: bool,
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for RecaseFormatter
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
        let level = *metadata.level();
        let target = metadata.target();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        let line = match level {
            tracing::Level::ERROR => format!("\x1b[31mERROR\x1b[0m {msg}"),
            tracing::Level::WARN => format!("\x1b[33mWARN\x1b[0m  {msg}"),
            tracing::Level::INFO if target == "recase::stage" => {
                format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m")
            }
            tracing::Level::INFO => format!("  {msg}"),
            _ => format!("  \x1b[2m{msg}\x1b[0m"),
        };

        if self.color {
            writeln!(writer, "{line}")
        } else {
            writeln!(writer, "{}", strip_ansi(&line))
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// All events go to stderr so that stdout carries only conversion results.
/// The console shows `info` and above, or `debug` with `verbose`; a
/// `RECASE_LOG` filter directive overrides both.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{
        Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let console_layer = fmt::layer()
        .event_format(RecaseFormatter { color: use_color() })
        .with_writer(std::io::stderr)
        .with_filter(console_filter(verbose));

    tracing_subscriber::registry().with(console_layer).init();
}

/// Environment variable holding a console filter directive.
const LOG_ENV: &str = "RECASE_LOG";

/// Console filter: `RECASE_LOG` when it parses, otherwise `debug` or `info`.
fn console_filter(verbose: bool) -> tracing_subscriber::EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
}
