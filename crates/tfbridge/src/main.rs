use anyhow::Result;
use clap::{Parser, Subcommand};

mod lookup;
mod table;

#[derive(Parser, Debug)]
#[command(name = "tfbridge", version)]
#[command(about = "Translate tensor data types between the engine and TensorFlow")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Map a TensorFlow data type to its engine equivalent
    ToEngine(lookup::ToEngineArgs),
    /// Map an engine data type to its TensorFlow equivalent
    ToFramework(lookup::ToFrameworkArgs),
    /// Print every declared equivalence
    Table(table::TableArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::ToEngine(args) => lookup::execute_to_engine(args),
        Commands::ToFramework(args) => lookup::execute_to_framework(args),
        Commands::Table(args) => table::execute(args),
    }
}
