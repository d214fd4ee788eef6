// crates/gen/src/main.rs
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use countline_gen::{DataSize, Generator};

/// Generates consistent `line: <n>` data files for counting at scale.
#[derive(Parser, Debug)]
#[command(name = "gen-test-data", version, about)]
struct Args {
    /// Output directory
    #[arg(long, default_value = "testdata")]
    dir: PathBuf,

    /// Target size as NAME=BYTES (repeatable). Replaces the default Tiny..Giant set.
    #[arg(long = "size", value_name = "NAME=BYTES")]
    sizes: Vec<DataSize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let generator = if args.sizes.is_empty() {
        Generator::default()
    } else {
        Generator::new(args.sizes)
    };

    log::info!("Generating consistent data files in {}:", args.dir.display());
    generator
        .generate_all(&args.dir)
        .with_context(|| format!("failed to generate files in '{}'", args.dir.display()))?;
    Ok(())
}
