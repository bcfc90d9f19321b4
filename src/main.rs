use anyhow::Context;
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use student_choices::config::Settings;
use student_choices::logging::init_tracing;
use student_choices::{create_rng, open_output, parse_count, write_lines};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random student preference lines for testing",
    after_help = "Line i reads `Student i` followed by a comma-separated random selection of 1..n."
)]
struct Cli {
    /// Number of students (and of choices)
    #[arg(value_parser = parse_count, allow_negative_numbers = true)]
    n: NonZeroUsize,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Write to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// TOML settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load_optional(cli.config.as_deref())?;
    init_tracing(settings.log_level());

    let seed = cli.seed.or(settings.generate.seed);
    let output = cli.output.or(settings.generate.output);

    let mut writer = open_output(output.as_deref()).with_context(|| match &output {
        Some(path) => format!("cannot create {}", path.display()),
        None => String::from("cannot open standard output"),
    })?;
    let written = write_lines(&mut writer, cli.n, create_rng(seed))?;
    info!(lines = written, ?seed, "generation finished");
    Ok(())
}
