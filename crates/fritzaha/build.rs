use std::fs;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

// Pull in cli.rs directly -- it only depends on clap + clap_complete (both
// listed as build-dependencies), so this compiles cleanly without dragging
// in the rest of the crate.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    // Re-run if the CLI definitions change.
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir: PathBuf =
        std::env::var_os("OUT_DIR").expect("OUT_DIR not set by Cargo").into();
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man output directory");

    // Walk the command tree iteratively, prefixing subcommand pages with
    // their parent's name (fritzaha-switch.1, fritzaha-switch-set.1, ...).
    let mut pending = vec![cli::Cli::command()];
    while let Some(cmd) = pending.pop() {
        let name = cmd.get_name().to_owned();
        write_manpage(&cmd, &man_dir.join(format!("{name}.1")));

        for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
            pending.push(sub.clone().name(format!("{name}-{}", sub.get_name())));
        }
    }
}

fn write_manpage(cmd: &clap::Command, path: &Path) {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut buf)
        .unwrap_or_else(|e| panic!("failed to render man page for `{}`: {e}", cmd.get_name()));
    fs::write(path, buf).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}
