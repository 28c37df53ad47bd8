use std::env;
use std::io::{Error, ErrorKind};
use std::path::Path;

use clap_complete::{self, shells};

include!("src/cli.rs");

/// Generate Bash and Fish completion scripts for `ippc` into the build
/// output directory.
fn main() -> Result<(), Error> {
    let out_dir = env::var_os("OUT_DIR")
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "OUT_DIR env var not set"))?;

    let mut cmd = build_cli();
    for shell in [shells::Shell::Bash, shells::Shell::Fish] {
        clap_complete::generate_to(shell, &mut cmd, "ippc", Path::new(&out_dir))?;
    }

    println!("cargo:rerun-if-changed=src/cli.rs");

    Ok(())
}
