//! Build script for cvpr-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying flags, update both files.
fn build_cli() -> Command {
    Command::new("cv-pull-request")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_version_flag(true)
        .about("Prepare release pull requests across the CV repositories")
        .after_help(
            "Note: If the 'REQUIRED' options are not supplied, the application will ask for the values at runtime",
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("[REQUIRED] CV release version")
                .value_name("VERSION"),
        )
        .arg(
            Arg::new("assignees")
                .short('a')
                .long("assignees")
                .help("[REQUIRED] Assignees (comma-separated list)")
                .value_name("NAMES"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .help("[REQUIRED] GitHub API token")
                .value_name("TOKEN"),
        )
        .arg(
            Arg::new("deployType")
                .short('b')
                .long("deployType")
                .alias("deploy-type")
                .help("[REQUIRED] Type of deploy being done, can be either \"test\" or \"prod\"")
                .value_name("TYPE"),
        )
        .arg(
            Arg::new("automatic")
                .short('y')
                .long("automatic")
                .help("Automatic mode; disable interactive prompts. Fails if any required field is missing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("configFile")
                .short('c')
                .long("configFile")
                .alias("config-file")
                .help("YAML configuration file")
                .value_name("PATH")
                .default_value("./cv-pull-request.yaml"),
        )
        .arg(
            Arg::new("saveConfig")
                .short('s')
                .long("saveConfig")
                .alias("save-config")
                .help("Save the configuration values to the config file")
                .value_name("BOOL")
                .num_args(0..=1)
                .default_value("true")
                .default_missing_value("true"),
        )
        .arg(
            Arg::new("no-saveConfig")
                .long("no-saveConfig")
                .alias("no-save-config")
                .help("Do not save the configuration values")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Run in debug mode")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("cv-pull-request.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
