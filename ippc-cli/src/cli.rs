use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let about = concat!(
        "Reads IPPcode19 source from stdin, checks it for lexical and\n",
        "syntax errors, and writes its XML representation to stdout.",
    );

    let exit_status_help = concat!(
        "Exit status:\n",
        "  0   success\n",
        "  11  input could not be read\n",
        "  12  output could not be written\n",
        "  21  missing or incorrect header\n",
        "  22  unknown or incorrect opcode\n",
        "  23  other lexical or syntax error",
    );

    Command::new("ippc")
        .version("0.0.0")
        .about(about)
        .after_help(exit_status_help)
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Write one XML element per line, indented"),
        )
        .arg(
            Arg::new("no_declaration")
                .long("no-declaration")
                .action(ArgAction::SetTrue)
                .help("Omit the <?xml ...?> declaration"),
        )
        .arg(
            Arg::new("list_opcodes")
                .long("list-opcodes")
                .action(ArgAction::SetTrue)
                .help("List opcodes with their operand kinds and exit"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debug mode?"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more (-v for debug, -vv for trace)"),
        )
}
