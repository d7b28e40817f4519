use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::{debug, Level};

use technique_scanner::output;
use technique_scanner::scanning;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("technique-scanner")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Procedure boundary detection for the Technique tree-sitter grammar.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("boundaries")
                .about("List the lines where a procedure declaration begins")
                .arg(
                    Arg::new("debug")
                        .long("debug")
                        .action(ArgAction::SetTrue)
                        .help("Log each scanner decision to standard error."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The Technique file to scan, or '-' to read from standard input."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("boundaries", submatches)) => {
            let level = if submatches.get_flag("debug") {
                Level::DEBUG
            } else {
                Level::WARN
            };

            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();

            let filename = match submatches.get_one::<String>("filename") {
                Some(filename) => Path::new(filename),
                None => {
                    eprintln!("error: a filename is required");
                    std::process::exit(1);
                }
            };
            debug!(?filename);

            let content = match scanning::load(filename) {
                Ok(content) => content,
                Err(error) => {
                    eprintln!("error: {}", error);
                    std::process::exit(1);
                }
            };

            let boundaries = scanning::find_boundaries(&content);

            match output::boundaries_listing(&filename.to_string_lossy(), &boundaries) {
                Ok(listing) => print!("{}", listing),
                Err(error) => {
                    eprintln!("error: {}", error);
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: technique-scanner [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}
