// Command-line interface for tabulist
//
// Toggles a Markdown block between a nested key/value list and a pipe table, the same edit an
// editor integration performs at the cursor. The engine lives in tabulist-core; this binary only
// reads the document, picks the block by line number and writes the result back.
//
// Usage:
//  tabulist <path> <line> [-o <file> | --in-place]         - Toggle the block at <line> (default)
//  tabulist toggle <path> <line> [-o <file> | --in-place]  - Same as above (explicit)
//  tabulist detect <path> <line>                           - Print which way the block would go
//  tabulist keys <path> <line> [--json]                    - List occurrences of the key on <line>
//
// Lines are 1-based. A path of "-" reads the document from stdin.
//
// Extra Parameters:
//
// Toggle options can be overridden for one run with --extra-<option> <value>, on top of the
// embedded defaults, ./tabulist.toml and --config. Boolean options can omit the value.
// Example:
//  tabulist notes.md 12 --extra-list-marker-style ordered --extra-format-table false

use clap::builder::RangedU64ValueParser;
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::str::FromStr;
use tabulist_config::{Loader, TabulistConfig, PROJECT_CONFIG_FILE};
use tabulist_core::{
    detect_mode, key_occurrences_in_block, key_range_in_line, locate_block, toggle_document,
    KeyOccurrence, TextDocument, ToggleError, ToggleOptions, UnknownVariant,
};

const SUBCOMMANDS: &[&str] = &["toggle", "detect", "keys", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the Markdown file, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn line_arg() -> Arg {
    Arg::new("line")
        .help("Line number (1-based) inside the block")
        .required(true)
        .index(2)
        .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
}

fn build_cli() -> Command {
    Command::new("tabulist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Toggle Markdown blocks between nested lists and pipe tables")
        .long_about(
            "tabulist converts the block of Markdown around a line between a nested\n\
            key/value list and a pipe table, whichever it currently is not.\n\n\
            Commands:\n  \
            - toggle: Convert the block and print (or write) the document (default)\n  \
            - detect: Show which conversion applies to the block\n  \
            - keys:   List every occurrence of a list key within the block\n\n\
            Extra Parameters:\n  \
            Use --extra-<option> [value] to override a toggle option for one run:\n  \
            root-header-name, output-empty-keys, value-escape-style, list-marker-style,\n  \
            format-table, smart-pipe-escape, flatten-nested-keys.\n  \
            Boolean options can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            tabulist notes.md 12                          # Toggle, print to stdout\n  \
            tabulist notes.md 12 --in-place               # Toggle and rewrite notes.md\n  \
            tabulist detect notes.md 12                   # list-to-table / table-to-list\n  \
            tabulist keys notes.md 14 --json              # Key occurrences as JSON\n  \
            tabulist notes.md 12 --extra-format-table false",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tabulist.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log engine decisions to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("toggle")
                .about("Toggle the block at a line (default command)")
                .long_about(
                    "Locate the block around <line>, detect whether it is a list or a table\n\
                    and replace it with the other form.\n\n\
                    Output goes to stdout by default, or use -o / --in-place.",
                )
                .arg(path_arg())
                .arg(line_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath)
                        .conflicts_with("in-place"),
                )
                .arg(
                    Arg::new("in-place")
                        .long("in-place")
                        .short('i')
                        .help("Rewrite the input file")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("detect")
                .about("Print which conversion applies to the block at a line")
                .arg(path_arg())
                .arg(line_arg()),
        )
        .subcommand(
            Command::new("keys")
                .about("List occurrences of the key on a line within its block")
                .long_about(
                    "Find the key token of the list item on <line> and every line of the\n\
                    same block with exactly that key. Each occurrence is printed as\n\
                    <line>:<start>-<end> <key>, with 1-based lines and 0-based character\n\
                    columns (end exclusive).",
                )
                .arg(path_arg())
                .arg(line_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print occurrences as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a subcommand is a path: inject "toggle"
            if cleaned_args.len() > 1
                && (!cleaned_args[1].starts_with('-') || cleaned_args[1] == "-")
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "toggle".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    reject_unknown_extras(&extra_params);
    let options = ToggleOptions::from(config.toggle);

    match matches.subcommand() {
        Some(("toggle", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let line = *sub_matches
                .get_one::<usize>("line")
                .expect("line is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let in_place = sub_matches.get_flag("in-place");
            handle_toggle_command(path, line, output, in_place, &options);
        }
        Some(("detect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let line = *sub_matches
                .get_one::<usize>("line")
                .expect("line is required");
            handle_detect_command(path, line);
        }
        Some(("keys", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let line = *sub_matches
                .get_one::<usize>("line")
                .expect("line is required");
            handle_keys_command(path, line, sub_matches.get_flag("json"));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Handle the toggle command
fn handle_toggle_command(
    path: &str,
    line: usize,
    output: Option<&str>,
    in_place: bool,
    options: &ToggleOptions,
) {
    if in_place && path == "-" {
        eprintln!("Error: --in-place needs a file path, not stdin");
        std::process::exit(1);
    }

    let source = read_source(path);
    let mut document = TextDocument::parse(&source);

    let result = toggle_document(&mut document, to_cursor(line), options).unwrap_or_else(|e| {
        eprintln!("{}", describe_error(&e));
        std::process::exit(1);
    });
    log::info!(
        "{} on lines {}-{}",
        result.mode,
        result.start_line + 1,
        result.end_line + 1
    );

    let text = document.to_text();
    let target = if in_place { Some(path) } else { output };
    match target {
        Some(target) => {
            fs::write(target, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{target}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// Handle the detect command
fn handle_detect_command(path: &str, line: usize) {
    let source = read_source(path);
    let document = TextDocument::parse(&source);
    let cursor = to_cursor(line);

    let block = locate_block(document.lines(), cursor).unwrap_or_else(|| {
        eprintln!("{}", describe_error(&ToggleError::NoBlock { line: cursor }));
        std::process::exit(1);
    });
    match detect_mode(&block.lines) {
        Some(mode) => println!("{mode}"),
        None => {
            let err = ToggleError::NotConvertible {
                start_line: block.start_line,
                end_line: block.end_line,
            };
            eprintln!("{}", describe_error(&err));
            std::process::exit(1);
        }
    }
}

/// Handle the keys command
fn handle_keys_command(path: &str, line: usize, json: bool) {
    let source = read_source(path);
    let document = TextDocument::parse(&source);
    let cursor = to_cursor(line);

    let block = locate_block(document.lines(), cursor).unwrap_or_else(|| {
        eprintln!("{}", describe_error(&ToggleError::NoBlock { line: cursor }));
        std::process::exit(1);
    });
    let range = key_range_in_line(&document.lines()[cursor]).unwrap_or_else(|| {
        eprintln!("No key at line {line}");
        std::process::exit(1);
    });

    let occurrences = document_occurrences(block.start_line, &block.lines, &range.key);

    if json {
        let rendered = serde_json::to_string_pretty(&occurrences).unwrap_or_else(|e| {
            eprintln!("Error serializing key occurrences: {e}");
            std::process::exit(1);
        });
        println!("{rendered}");
    } else {
        for occurrence in occurrences {
            println!(
                "{}:{}-{} {}",
                occurrence.line, occurrence.start, occurrence.end, occurrence.key
            );
        }
    }
}

/// Key occurrences of a block, with lines renumbered as 1-based document lines.
fn document_occurrences(block_start: usize, lines: &[String], key: &str) -> Vec<KeyOccurrence> {
    key_occurrences_in_block(lines, key)
        .into_iter()
        .map(|occurrence| KeyOccurrence {
            line: block_start + occurrence.line + 1,
            ..occurrence
        })
        .collect()
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
        return source;
    }
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Convert a 1-based line number to a 0-based cursor
fn to_cursor(line: usize) -> usize {
    line.saturating_sub(1)
}

/// Render an engine error with 1-based line numbers
fn describe_error(err: &ToggleError) -> String {
    match err {
        ToggleError::NoBlock { line } => format!("No block at line {}", line + 1),
        ToggleError::NotConvertible {
            start_line,
            end_line,
        } => format!(
            "Lines {}-{} contain no list or table to convert",
            start_line + 1,
            end_line + 1
        ),
        ToggleError::RangeOutOfBounds { .. } => format!("Error: {err}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TabulistConfig {
    let loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut TabulistConfig, extra_params: &mut HashMap<String, String>) {
    let toggle = &mut config.toggle;

    if let Some(raw) = take_override(extra_params, &["root-header-name", "root-header"]) {
        toggle.root_header_name = raw;
    }
    if let Some(raw) = extra_params.remove("output-empty-keys") {
        toggle.output_empty_keys = parse_bool_arg("output-empty-keys", &raw);
    }
    if let Some(raw) = extra_params.remove("value-escape-style") {
        toggle.value_escape_style = parse_style_arg("value-escape-style", &raw);
    }
    if let Some(raw) = extra_params.remove("list-marker-style") {
        toggle.list_marker_style = parse_style_arg("list-marker-style", &raw);
    }
    if let Some(raw) = extra_params.remove("format-table") {
        toggle.format_table = parse_bool_arg("format-table", &raw);
    }
    if let Some(raw) = extra_params.remove("smart-pipe-escape") {
        toggle.smart_pipe_escape = parse_bool_arg("smart-pipe-escape", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["flatten-nested-keys", "flatten"]) {
        toggle.flatten_nested_keys = parse_bool_arg("flatten-nested-keys", &raw);
    }
}

fn reject_unknown_extras(extra_params: &HashMap<String, String>) {
    if extra_params.is_empty() {
        return;
    }
    let mut names: Vec<&str> = extra_params.keys().map(|k| k.as_str()).collect();
    names.sort_unstable();
    eprintln!("Unknown extra parameter(s): --extra-{}", names.join(", --extra-"));
    std::process::exit(1);
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_style_arg<T>(flag: &str, raw: &str) -> T
where
    T: FromStr<Err = UnknownVariant>,
{
    raw.parse().unwrap_or_else(|err| {
        eprintln!("Invalid value for --extra-{flag}: {err}");
        std::process::exit(1);
    })
}
