// SPDX-License-Identifier: MIT
//
// linktint — generate a bookmark-manager CSS theme from one base color.
//
// The binary is a thin shell over the two library crates:
//
//   lt-color → hex parsing, RGB/HSL conversion, hue rotation
//   lt-theme → contrast ramp, logo filter, stylesheet assembly
//
// A run is one straight line:
//
//   argv → Invocation (validated) → Stylesheet::generate → stdout
//
// Diagnostics go to stderr through `log`; the level comes from
// LINKTINT_LOG so the stylesheet on stdout is never mixed with them.

use std::env;
use std::io;
use std::process;

use log::{LevelFilter, debug, info, warn};
use lt_color::{ColorError, Rgb};
use lt_theme::{Scheme, Stylesheet};
use regex::Regex;
use thiserror::Error;

/// Environment variable holding the log level.
const LOG_ENV: &str = "LINKTINT_LOG";

/// Accepted spelling of the base color on the command line.
const HEX_PATTERN: &str = "^#[0-9A-Fa-f]{6}$";

// ─── Errors ─────────────────────────────────────────────────────────────────

/// Everything that stops a run. The `Display` text is exactly what the
/// user sees on stdout.
#[derive(Debug, Error)]
enum CliError {
    #[error("Usage: linktint <hex_color> [light|dark]")]
    MissingArgument,

    #[error("Error: Color must be in hex format (e.g., #50B464)")]
    InvalidColor(#[from] ColorError),

    #[error("internal error: bad color pattern: {0}")]
    Pattern(#[from] regex::Error),
}

// ─── Invocation ─────────────────────────────────────────────────────────────

/// Parsed and validated command-line arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Invocation {
    base: Rgb,
    scheme: Scheme,
}

impl Invocation {
    /// Parse the arguments after the program name.
    fn parse(args: &[String]) -> Result<Self, CliError> {
        let hex = args.first().ok_or(CliError::MissingArgument)?;

        let pattern = Regex::new(HEX_PATTERN)?;
        if !pattern.is_match(hex) {
            return Err(ColorError::InvalidFormat(hex.clone()).into());
        }
        let base = Rgb::from_hex(hex)?;

        let scheme = match args.get(1) {
            None => Scheme::default(),
            Some(name) => {
                if Scheme::known(name).is_none() {
                    warn!("unknown scheme {name:?}, using {}", Scheme::default());
                }
                Scheme::from_name(name)
            }
        };

        if args.len() > 2 {
            warn!("ignoring {} extra argument(s)", args.len() - 2);
        }

        Ok(Self { base, scheme })
    }
}

// ─── Logging ────────────────────────────────────────────────────────────────

/// Logging settings read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogConfig {
    level: LevelFilter,
}

impl LogConfig {
    const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

    /// Interpret the raw value of `LINKTINT_LOG`. Missing or unparsable
    /// values give the default level.
    fn from_env_value(value: Option<&str>) -> Self {
        let level = value
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_LEVEL);
        Self { level }
    }
}

fn setup_logging(config: LogConfig) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ));
        })
        .level(config.level)
        .chain(io::stderr())
        .apply()
}

// ─── Entry point ────────────────────────────────────────────────────────────

/// Produce the stylesheet text for `args`, or the error to report.
fn run(args: &[String]) -> Result<String, CliError> {
    let invocation = Invocation::parse(args)?;
    info!(
        "generating {} theme from {}",
        invocation.scheme, invocation.base
    );
    let sheet = Stylesheet::generate(invocation.base, invocation.scheme);
    debug!("{} variables", sheet.declarations().count());
    Ok(sheet.to_string())
}

fn main() {
    let config = LogConfig::from_env_value(env::var(LOG_ENV).ok().as_deref());
    if let Err(e) = setup_logging(config) {
        eprintln!("linktint: logging disabled: {e}");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(css) => println!("{css}"),
        Err(e) => {
            println!("{e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
