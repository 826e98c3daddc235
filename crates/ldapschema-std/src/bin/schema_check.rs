//! Schema definition checker.
//!
//! Usage: schema-check [OPTIONS] <FILE>...
//!
//! Validates every subschema attribute value in the given LDIF files and
//! prints one line per rejected definition:
//!   `FILE:LINE<TAB>KIND<TAB>reason`
//!
//! Exits with status 1 if any definition was rejected and 2 if a file could
//! not be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ldapschema_core::DecodeOptions;
use ldapschema_std::check_file;
use tracing_subscriber::EnvFilter;

/// Validate LDAP schema definitions stored in LDIF files.
#[derive(Parser, Debug)]
#[command(name = "schema-check", version, about, long_about = None)]
struct Cli {
    /// LDIF files to check.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Accept names that are not valid keystrings (e.g. containing `_`).
    #[arg(long)]
    allow_malformed_names: bool,

    /// Accept descriptors where a numeric OID is required.
    #[arg(long)]
    allow_non_numeric_oids: bool,

    /// Reject unknown keywords that lack the `X-` prefix.
    #[arg(long)]
    strict_keywords: bool,

    /// Only print the summary. Log output is limited to errors.
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose logging. Repeat for more (-v, -vv). `RUST_LOG`
    /// overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::default()
            .with_malformed_names(self.allow_malformed_names)
            .with_non_numeric_oids(self.allow_non_numeric_oids)
            .with_unknown_keywords(!self.strict_keywords)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        _ if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = cli.decode_options();
    tracing::debug!(?options, "decode options");

    let mut accepted = 0;
    let mut rejected = 0;
    let mut failed_files = 0;
    for path in &cli.files {
        let report = match check_file(path, &options) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                failed_files += 1;
                continue;
            }
        };
        if !cli.quiet {
            for rejection in &report.rejected {
                println!(
                    "{}:{}\t{}\t{}",
                    path.display(),
                    rejection.line,
                    rejection.kind,
                    rejection.reason
                );
            }
        }
        accepted += report.accepted;
        rejected += report.rejected.len();
    }

    println!("{accepted} accepted, {rejected} rejected");

    if failed_files > 0 {
        ExitCode::from(2)
    } else if rejected > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
