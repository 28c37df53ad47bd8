//! # ippc
//!
//! Reads an IPPcode19 program from stdin and writes it to stdout as
//! XML. Errors are reported on stderr with one line and the exit status
//! identifies the kind of error (see `--help`).
use std::process;

use clap::ArgMatches;
use log::LevelFilter;

use ippc_compiler::{EmitFlags, OPCODES};
use ippc_driver::Driver;

mod cli;

fn main() {
    let matches = cli::build_cli().get_matches();
    init_logger(matches.get_count("verbose"));

    if matches.get_flag("list_opcodes") {
        print!("{}", opcode_listing());
        process::exit(0);
    }

    let driver = Driver::new(emit_flags(&matches), matches.get_flag("debug"));

    let code = match driver.execute_stdin() {
        Ok(code) => code,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("{err}");
            err.exit_code()
        }
    };

    process::exit(code as i32);
}

/// Log to stderr. The level comes from the command line only.
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).format_timestamp(None).init();
}

fn emit_flags(matches: &ArgMatches) -> EmitFlags {
    let mut flags = EmitFlags::DECLARATION;
    if matches.get_flag("no_declaration") {
        flags.remove(EmitFlags::DECLARATION);
    }
    if matches.get_flag("pretty") {
        flags.insert(EmitFlags::PRETTY);
    }
    flags
}

/// One line per opcode in table order: the name padded to 12 columns,
/// then its operand kinds.
fn opcode_listing() -> String {
    let mut listing = String::new();
    for (name, kinds) in OPCODES.iter() {
        let kinds: Vec<String> = kinds.iter().map(|kind| kind.to_string()).collect();
        let line = format!("{name: <12}{}", kinds.join(" "));
        listing.push_str(line.trim_end());
        listing.push('\n');
    }
    listing
}
