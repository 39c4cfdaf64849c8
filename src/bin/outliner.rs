//! Command-line interface for outliner
//! This binary parses record documents and prints them as an outline or as
//! one of the inspection formats.
//!
//! Usage:
//!   outliner outline `<path>` [--name `<name>`]           - Print the document's outline
//!   outliner inspect `<path>` [--format `<format>`]       - Print an alternate view of the tree

use clap::{Arg, Command};
use std::io;
use std::path::Path;

use outliner::formats;
use outliner::parser;
use outliner::Document;

fn main() {
    let matches = Command::new("outliner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and outlining record documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("outline")
                .about("Print the document's outline")
                .arg(
                    Arg::new("path")
                        .help("Path to the record file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .help("Display name for the document (defaults to the file stem)"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print an alternate view of the parsed tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the record file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'json', 'yaml')")
                        .default_value("treeviz"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("outline", outline_matches)) => {
            let path = outline_matches.get_one::<String>("path").unwrap();
            let name = outline_matches.get_one::<String>("name").cloned();
            handle_outline_command(path, name);
        }
        Some(("inspect", inspect_matches)) => {
            let path = inspect_matches.get_one::<String>("path").unwrap();
            let format = inspect_matches.get_one::<String>("format").unwrap();
            handle_inspect_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the outline command
fn handle_outline_command(path: &str, name: Option<String>) {
    let document = parse_file(path, name);
    if !document.has_outline() {
        eprintln!("{}: document has no outline", document.name());
        return;
    }
    if let Err(e) = formats::outline::write_outline(&document, io::stdout().lock()) {
        eprintln!("Error writing outline: {}", e);
        std::process::exit(1);
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, format: &str) {
    let document = parse_file(path, None);
    let output = match format {
        "treeviz" => formats::treeviz::to_treeviz_str(&document),
        "json" => formats::serialize::to_json_str(&document).unwrap_or_else(|e| {
            eprintln!("Serialization error: {}", e);
            std::process::exit(1);
        }),
        "yaml" => formats::serialize::to_yaml_str(&document).unwrap_or_else(|e| {
            eprintln!("Serialization error: {}", e);
            std::process::exit(1);
        }),
        other => {
            eprintln!("Unknown format '{}'. Expected treeviz, json or yaml.", other);
            std::process::exit(1);
        }
    };
    print!("{}", output);
}

fn parse_file(path: &str, name: Option<String>) -> Document {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    parser::parse_str(&source, document_name(path, name)).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    })
}

/// Display name: an explicit --name wins, then the file stem, then the
/// library default.
fn document_name(path: &str, name: Option<String>) -> String {
    name.unwrap_or_else(|| {
        Path::new(path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| parser::DEFAULT_DOCUMENT_NAME.to_string())
    })
}
