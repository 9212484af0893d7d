mod build_cmd;
mod cli;
mod extract_cmd;
mod merge_cmd;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Extract { ref file, format, raw } => extract_cmd::run(file, format, raw),
        cli::Commands::Build {
            ref dir,
            ref output,
            ref merge,
            min_chars,
            ref summary,
        } => build_cmd::run(dir, output, merge, min_chars, summary.as_deref()),
        cli::Commands::Merge {
            ref inputs,
            ref output,
        } => merge_cmd::run(inputs, output),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
