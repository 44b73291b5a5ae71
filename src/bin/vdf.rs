//! Command-line interface for vdf
//! This binary converts vdf documents into other formats and inspects their tokens.
//!
//! Usage:
//!   vdf convert `<path>` [--format `<format>`]  - Parse a file and print it (default: ast-json)
//!   vdf tokens `<path>` [--json]              - Print the token stream of a file
//!   vdf formats                             - List all available formats
//!
//! Set `RUST_LOG=vdf=debug` to trace the parser on stderr.

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vdf::vdf::processor::{available_formats, process_file, ProcessingError, ProcessingSpec};

fn main() {
    init_tracing();

    let matches = Command::new("vdf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting vdf files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Parse a file and print it in another format")
                .arg(
                    Arg::new("path")
                        .help("Path to the vdf file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-json', 'ast-yaml', 'ast-treeviz')")
                        .default_value("ast-json"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the vdf file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print tokens as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let path = convert_matches.get_one::<String>("path").unwrap();
            let format = convert_matches.get_one::<String>("format").unwrap();
            handle_convert_command(path, format)
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = if tokens_matches.get_flag("json") {
                "token-json"
            } else {
                "token-simple"
            };
            handle_convert_command(path, format)
        }
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with converted output
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    // Only fails if a global subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Handle the convert and tokens commands
fn handle_convert_command(path: &str, format: &str) -> Result<(), ProcessingError> {
    let spec = ProcessingSpec::from_string(format)?;
    let output = process_file(path, &spec)?;
    print!("{}", output);
    Ok(())
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
