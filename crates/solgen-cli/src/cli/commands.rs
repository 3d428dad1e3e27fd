//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the `solgen` command.
///
/// Every flag is optional; a bare invocation regenerates all artifacts at
/// their default paths.
pub fn build_cli() -> Command {
    Command::new("solgen")
        .about("Generate the FHE Solidity library, its test contracts, and ABI types")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(
            r#"EXAMPLES:
  solgen                                  # regenerate everything
  solgen -m ops.json --library out/FHE.sol
  solgen --dry-run -v                     # report without writing
  solgen --list                           # one declaration per line
  solgen --list --format json             # signatures as JSON"#,
        )
        .arg(metadata_arg())
        .arg(library_arg())
        .arg(contracts_dir_arg())
        .arg(abi_arg())
        .arg(dry_run_arg())
        .arg(list_arg())
        .arg(format_arg())
        .arg(verbose_arg())
}
