//! Command-line interface for xmlfmt
//! Reads a flat XML file and writes it back nested and indented.
//!
//! Usage:
//!   xmlfmt --in-file `<path>` --out-file `<path>` [--tab-style `<unit>`] [--config `<file>`] [--emit `<what>`]
//!
//! Set `RUST_LOG=xmlfmt=debug` for pipeline diagnostics.

use clap::{Arg, ArgMatches, Command};
use std::process;
use xmlfmt::{pipeline, Loader, Settings, XmlfmtConfig};

fn main() {
    init_tracing();

    let matches = Command::new("xmlfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Outputs formatted XML to file")
        .arg(
            Arg::new("in-file")
                .long("in-file")
                .short('i')
                .alias("inFile")
                .value_name("PATH")
                .help("File containing the XML to be formatted")
                .required(true),
        )
        .arg(
            Arg::new("out-file")
                .long("out-file")
                .short('o')
                .alias("outFile")
                .value_name("PATH")
                .help("File the formatted result is written to")
                .required(true),
        )
        .arg(
            Arg::new("tab-style")
                .long("tab-style")
                .short('t')
                .alias("tabStyle")
                .value_name("UNIT")
                .allow_hyphen_values(true)
                .help("Indentation unit, e.g. '\\t' for a tab (default: two spaces)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .value_parser(["formatted", "tokens"])
                .help("What to write: the formatted document or the token stream as JSON"),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let input = matches
        .get_one::<String>("in-file")
        .expect("in-file is required");
    let output = matches
        .get_one::<String>("out-file")
        .expect("out-file is required");
    let settings = Settings::new(input, output, &config);

    if let Err(e) = pipeline::run(&settings) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Layer the optional config file and command-line flags over the defaults.
fn load_config(matches: &ArgMatches) -> xmlfmt::Result<XmlfmtConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(unit) = matches.get_one::<String>("tab-style") {
        loader = loader.set_override("formatting.tabulator", unit.as_str())?;
    }
    if let Some(emit) = matches.get_one::<String>("emit") {
        loader = loader.set_override("formatting.emit", emit.as_str())?;
    }
    Ok(loader.build()?)
}

/// Warnings (skipped input, stray closing tags) go to stderr by default;
/// `RUST_LOG` overrides the filter.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();
}
