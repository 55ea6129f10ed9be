#![allow(clippy::print_stderr)]

use clap::Parser;
use colored::Colorize;

use jdts_cli::{CliArgs, Config, load_config, run, trace};

fn main() {
    trace::init();
    let args = CliArgs::parse();
    if let Err(error) = real_main(args) {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn real_main(args: CliArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::from_roots(args.roots.clone()),
    };

    let summary = run(&config, &args.out_dir, args.dump_ir)?;

    for diagnostic in &summary.diagnostics {
        eprintln!(
            "{} {}: {}",
            "warning:".yellow().bold(),
            diagnostic.context,
            diagnostic.message
        );
    }
    eprintln!(
        "{} {} files parsed, {} declarations, {} outputs written ({} warnings)",
        "done:".green().bold(),
        summary.files_parsed,
        summary.definitions,
        summary.modules_written.len(),
        summary.diagnostics.len()
    );
    Ok(())
}
