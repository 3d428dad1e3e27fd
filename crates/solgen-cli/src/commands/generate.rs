use std::fmt::Display;
use std::path::PathBuf;

use solgen_compiler::{FsSink, MemorySink, OutputLayout, generate, load_descriptors};
use tracing::info;

use super::list::{self, ListFormat};

pub struct GenerateArgs {
    pub metadata: PathBuf,
    pub layout: OutputLayout,
    pub dry_run: bool,
    /// Print signatures in this format instead of generating.
    pub list: Option<ListFormat>,
}

pub fn run(args: GenerateArgs) {
    let descriptors = load_descriptors(&args.metadata).unwrap_or_else(|e| fail(e));
    info!(
        metadata = %args.metadata.display(),
        operations = descriptors.len(),
        "loaded metadata"
    );

    if let Some(format) = args.list {
        match list::render_descriptors(&descriptors, format) {
            Ok(text) => print!("{text}"),
            Err(e) => fail(e),
        }
        return;
    }

    let artifacts = generate(&descriptors).unwrap_or_else(|e| fail(e));

    if args.dry_run {
        let mut sink = MemorySink::default();
        if let Err(e) = artifacts.write_to(&args.layout, &mut sink) {
            fail(e);
        }
        for (path, content) in &sink.files {
            eprintln!("would write {} ({} bytes)", path.display(), content.len());
        }
        eprintln!(
            "{} signatures, {} test contracts, {} files",
            artifacts.signature_count,
            artifacts.contracts.len(),
            sink.files.len()
        );
    } else if let Err(e) = artifacts.write_to(&args.layout, &mut FsSink) {
        fail(e);
    }

    print!("{}", artifacts.import_helper);
}

fn fail(e: impl Display) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}
