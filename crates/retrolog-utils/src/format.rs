//! Tagged event format for `tracing-subscriber`.

use std::fmt;

use retrolog_core::Severity;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Renders tracing events the way the level printer renders core messages
///
/// Each event becomes `<prefix><fields>\n`, with the prefix taken from the
/// event's level through [`Severity`]. `TRACE` shares the `[DBG]` tag.
///
/// ```rust
/// use retrolog_utils::TaggedFormat;
///
/// let subscriber = tracing_subscriber::fmt()
///     .with_ansi(false)
///     .event_format(TaggedFormat)
///     .with_writer(std::io::stderr)
///     .finish();
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::warn!("save RAM not found"); // [WRN]: save RAM not found
/// });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedFormat;

impl<S, N> FormatEvent<S, N> for TaggedFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result
    {
        let severity = Severity::from(*event.metadata().level());
        write!(writer, "{}", severity.prefix())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
