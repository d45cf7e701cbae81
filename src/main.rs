//! Command-line interface for bsyncgen

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use bsyncgen::compiler::compile_location;
#[cfg(feature = "cli")]
use bsyncgen::generators::{Generator, GeneratorConfig, RustGenerator};
#[cfg(feature = "cli")]
use bsyncgen::limits::Limits;
#[cfg(feature = "cli")]
use bsyncgen::locations::Location;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "bsyncgen")]
#[command(author, version, about = "Generate Rust types from the BuildingSync XML Schema", long_about = None)]
struct Cli {
    /// Path to the XSD schema file
    #[arg(value_name = "SCHEMA")]
    schema: PathBuf,

    /// Turn on debugging
    #[arg(long)]
    debug: bool,

    /// Output file
    #[arg(short, long, default_value = "bsync.rs")]
    output: PathBuf,

    /// File whose text replaces the built-in header
    #[arg(long, value_name = "PATH")]
    header: Option<PathBuf>,

    /// Leave schema annotations out of the generated code
    #[arg(long)]
    no_docs: bool,

    /// Print the resolved descriptors as JSON instead of generating code
    #[arg(long)]
    dump_descriptors: bool,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!(?cli, "arguments");

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_tracing(debug: bool) {
    let default = if debug { "warn,bsyncgen=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let compilation = compile_location(&Location::path(&cli.schema), Limits::default())?;

    if cli.dump_descriptors {
        println!("{}", compilation.to_json()?);
        return Ok(());
    }

    let mut config = GeneratorConfig::default().with_docs(!cli.no_docs);
    if let Some(header) = &cli.header {
        config = config.with_header(fs::read_to_string(header)?);
    }

    let output = RustGenerator::new(config).generate(&compilation)?;
    output.write_to(&cli.output)?;
    tracing::info!(
        types = output.type_names.len(),
        output = %cli.output.display(),
        "wrote generated types"
    );
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
