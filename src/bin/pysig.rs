//! Command-line interface for pysig
//! Parses Python-style call signatures and prints the argument lists.
//!
//! Usage:
//!   pysig `<signature>`...                 - Parse signatures given as arguments
//!   pysig --file `<path>`                  - Parse one signature per line of a file
//!   pysig < signatures.txt                 - Parse one signature per line of stdin
//!   pysig --list-formats                   - List all available output formats
//!
//! Settings are read from the built-in defaults, then `./pysig.toml` if present,
//! then `--config <path>`, then flags. `RUST_LOG` controls log output on stderr.

use clap::{Arg, ArgAction, ArgMatches, Command};
use pysig::error::Result;
use pysig::formats::{FormatRegistry, SignatureReport};
use pysig::settings::{InputConfig, Loader, PysigConfig};
use pysig::signature::find_matching_close;
use std::io::{self, Read};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("pysig")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse Python-style call signatures into argument lists")
        .arg(
            Arg::new("signatures")
                .help("Signature text, e.g. '(a: int = 1, *, b=None)'")
                .num_args(0..)
                .action(ArgAction::Append)
                .index(1),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Read signatures from a file, one per line")
                .conflicts_with("signatures"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('F')
                .help("Output format (json, json-compact, yaml, text)"),
        )
        .arg(
            Arg::new("shape")
                .long("shape")
                .help("Include the calling-convention shape of each signature")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = handle_parse_command(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle the default parse command
fn handle_parse_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let signatures = collect_signatures(matches, &config.input)?;
    log::debug!("parsing {} signature(s)", signatures.len());

    let reports: Vec<SignatureReport> = signatures
        .iter()
        .map(|text| {
            let report = SignatureReport::new(text, config.output.shape);
            if report.arguments.is_empty() && find_matching_close(text, '(', ')').is_none() {
                log::warn!("no usable signature in {text:?}");
            }
            report
        })
        .collect();

    let registry = FormatRegistry::with_defaults();
    let output = registry.serialize(&reports, &config.output.format)?;
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<PysigConfig> {
    let mut loader = Loader::discover();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("shape") {
        loader = loader.set_override("output.shape", true)?;
    }
    Ok(loader.build()?)
}

/// Signatures from the command line, else `--file`, else stdin
fn collect_signatures(matches: &ArgMatches, input: &InputConfig) -> Result<Vec<String>> {
    if let Some(values) = matches.get_many::<String>("signatures") {
        return Ok(values.cloned().collect());
    }

    let source = match matches.get_one::<String>("file") {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(signature_lines(&source, &input.comment_prefix))
}

/// Non-blank lines that aren't comments, trimmed
fn signature_lines(source: &str, comment_prefix: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| comment_prefix.is_empty() || !line.starts_with(comment_prefix))
        .map(str::to_string)
        .collect()
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
