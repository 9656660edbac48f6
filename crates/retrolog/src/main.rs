use std::{env, process};

use clap::Parser;
use retrolog_core::{log_print, try_log_print, Severity, Template};
use retrolog_utils::{debug, init_logging_with_config, LogLevel, LoggingConfig, LoggingGuard};

mod args;
mod escape;

/// Print a severity-tagged, printf-formatted log line to stdout.
#[derive(Parser, Debug)]
#[command(name = "retrolog")]
#[command(version)]
#[command(
    about = "Print a severity-tagged, printf-formatted log line to stdout",
    long_about = "Print a severity-tagged, printf-formatted log line to stdout.\n\n\
                  Levels 0-3 print as [DBG], [INF], [WRN] and [ERR]; any other integer prints \
                  zero-filled, e.g. [042]. No newline is added unless the template has one \
                  or --newline is given."
)]
struct Cli
{
    /// Append a newline to the template
    #[arg(short, long, default_value_t = false)]
    newline: bool,
    /// Exit with an error instead of printing the template verbatim when the arguments do not fit
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Severity: an integer, or debug, info, warn, error
    #[arg(allow_negative_numbers = true)]
    level: Severity,
    /// printf-style template; \n, \t, \r, \\, \", \0, \e and \a are interpreted
    format: String,
    /// Values for the template's conversions
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main()
{
    let cli = Cli::parse();

    let _guard = match init_diagnostics() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Diagnostics on stderr; only warnings unless `RUST_LOG` says otherwise
fn init_diagnostics() -> Result<LoggingGuard, retrolog_utils::LoggingError>
{
    let mut config = LoggingConfig::from_env();
    if env::var_os("RUST_LOG").is_none() {
        config.default_level = LogLevel::Warn;
    }
    init_logging_with_config(&config)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>>
{
    let mut template = escape::unescape(&cli.format);
    if cli.newline {
        template.push('\n');
    }
    debug!(level = cli.level.raw(), template = %template, args = ?cli.args, "Printing line");

    if cli.strict {
        let kinds = Template::parse(&template)?.argument_kinds();
        let values = args::coerce(&kinds, &cli.args)?;
        try_log_print(cli.level, &template, &values)?;
    } else {
        // A broken template is printed verbatim by the printer, which also warns
        let kinds = Template::parse(&template)
            .map(|parsed| parsed.argument_kinds())
            .unwrap_or_default();
        let values = args::coerce_lenient(&kinds, &cli.args);
        log_print(cli.level, &template, &values);
    }
    Ok(())
}
