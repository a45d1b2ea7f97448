use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs, trimmed to what completions need.
// Build scripts can't access src/ modules.
fn path_and_line() -> [Arg; 2] {
    [
        Arg::new("path")
            .help("Path to the Markdown file, or '-' for stdin")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath),
        Arg::new("line")
            .help("Line number (1-based) inside the block")
            .required(true)
            .index(2)
            .value_parser(clap::builder::RangedU64ValueParser::<usize>::new().range(1..))
            .value_hint(ValueHint::Other),
    ]
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tabulist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Toggle Markdown blocks between nested lists and pipe tables")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("toggle")
                .about("Toggle the block at a line (default command)")
                .args(path_and_line())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("in-place")
                        .long("in-place")
                        .short('i')
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("detect")
                .about("Print which conversion applies to the block at a line")
                .args(path_and_line()),
        )
        .subcommand(
            Command::new("keys")
                .about("List occurrences of the key on a line within its block")
                .args(path_and_line())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tabulist", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tabulist", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tabulist", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
