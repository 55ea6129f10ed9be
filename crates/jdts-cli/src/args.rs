use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the jdts binary.
#[derive(Parser, Debug)]
#[command(
    name = "jdts",
    version,
    about = "Generate TypeScript ambient declarations from Java library sources"
)]
pub struct CliArgs {
    /// Path to a JSON config describing the source sets to process.
    pub config: Option<PathBuf>,

    /// Source roots to scan when no config file is given.
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Output directory for the generated declaration files.
    #[arg(short = 'o', long = "out-dir", default_value = "./output")]
    pub out_dir: PathBuf,

    /// Write the extracted declaration IR as JSON instead of declarations.
    #[arg(long = "dump-ir")]
    pub dump_ir: bool,
}
