//! Command-line interface for cfgp
//! Parses a cfg file (and its includes) and renders the resulting document.
//!
//! Usage:
//!   cfgp `<path>` [--base-path `<dir>`] [--format text|json]

use clap::{Arg, Command};

use cfgp::cfg::Parser;

fn main() {
    let matches = Command::new("cfgp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting ini-style cfg files")
        .arg(
            Arg::new("path")
                .help("Path to the cfg file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("base-path")
                .long("base-path")
                .short('b')
                .help("Directory prefix prepended to every #include target (include the trailing separator)")
                .default_value(""),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: text or json")
                .default_value("text"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let base_path = matches.get_one::<String>("base-path").expect("has default");
    let format = matches.get_one::<String>("format").expect("has default");

    let mut parser = Parser::new();
    parser.set_base_config_path(base_path.clone());
    parser.parse_file(path);

    // Diagnostics never abort the parse; report them and render whatever was
    // assembled.
    for diagnostic in parser.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    match format.as_str() {
        "text" => parser.debug_dump(),
        "json" => {
            let rendered = serde_json::to_string_pretty(parser.document()).unwrap_or_else(|e| {
                eprintln!("Error rendering document: {}", e);
                std::process::exit(1);
            });
            println!("{}", rendered);
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: text, json");
            std::process::exit(1);
        }
    }
}
