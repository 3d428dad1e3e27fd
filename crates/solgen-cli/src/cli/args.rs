//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg` composed into the command in
//! `commands.rs`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

pub const DEFAULT_METADATA: &str = "metadata/operations.json";

/// Operation metadata file (-m/--metadata).
pub fn metadata_arg() -> Arg {
    Arg::new("metadata")
        .short('m')
        .long("metadata")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_METADATA)
        .help("Operation metadata produced by the extractor (JSON)")
}

/// Library output file (--library).
pub fn library_arg() -> Arg {
    Arg::new("library")
        .long("library")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Library output path [default: FHE.sol]")
}

/// Test contract output directory (--contracts-dir).
pub fn contracts_dir_arg() -> Arg {
    Arg::new("contracts_dir")
        .long("contracts-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Test contract output directory [default: solidity/tests/contracts]")
}

/// ABI module output file (--abi).
pub fn abi_arg() -> Arg {
    Arg::new("abi")
        .long("abi")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("ABI type module output path [default: solidity/tests/abis.ts]")
}

/// Generate without writing (--dry-run).
pub fn dry_run_arg() -> Arg {
    Arg::new("dry_run")
        .long("dry-run")
        .action(ArgAction::SetTrue)
        .help("Run the full pass and report what would be written")
}

/// Print expanded signatures (--list).
pub fn list_arg() -> Arg {
    Arg::new("list")
        .long("list")
        .action(ArgAction::SetTrue)
        .conflicts_with("dry_run")
        .help("Print every expanded signature instead of generating")
}

/// Output format of --list (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format of --list")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for info, -vv for debug)")
}
