//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use solgen_compiler::OutputLayout;

use crate::commands::generate::GenerateArgs;
use crate::commands::list::ListFormat;

pub struct GenerateParams {
    pub metadata: PathBuf,
    pub library: Option<PathBuf>,
    pub contracts_dir: Option<PathBuf>,
    pub abi: Option<PathBuf>,
    pub dry_run: bool,
    pub list: bool,
    pub format: ListFormat,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            metadata: m
                .get_one::<PathBuf>("metadata")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(super::args::DEFAULT_METADATA)),
            library: m.get_one::<PathBuf>("library").cloned(),
            contracts_dir: m.get_one::<PathBuf>("contracts_dir").cloned(),
            abi: m.get_one::<PathBuf>("abi").cloned(),
            dry_run: m.get_flag("dry_run"),
            list: m.get_flag("list"),
            format: parse_format(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let mut layout = OutputLayout::default();
        if let Some(path) = p.library {
            layout = layout.library(path);
        }
        if let Some(dir) = p.contracts_dir {
            layout = layout.contracts_dir(dir);
        }
        if let Some(path) = p.abi {
            layout = layout.abi(path);
        }

        Self {
            metadata: p.metadata,
            layout,
            dry_run: p.dry_run,
            list: p.list.then_some(p.format),
        }
    }
}

fn parse_format(m: &ArgMatches) -> ListFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => ListFormat::Json,
        _ => ListFormat::Text,
    }
}
