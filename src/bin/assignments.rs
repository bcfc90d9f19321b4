use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use student_choices::config::Settings;
use student_choices::logging::init_tracing;
use student_choices::{assign, check_preferences, load_preferences};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assign students to choices by maximizing the global satisfaction",
    after_help = concat!(
        "The CSV file must contain no header and have the student name\n",
        "followed by the choices (1..n).\n",
        "Satisfaction of the choice ranked r is ((n - r + 1) * mult)^power.\n",
        "Unranked choices count 0."
    )
)]
struct Cli {
    /// CSV file
    input: PathBuf,
    /// Be verbose
    #[arg(short)]
    verbose: bool,
    /// Multiplicative coefficient for rank [default: 4]
    #[arg(short, long, value_name = "COEFF")]
    mult: Option<i64>,
    /// Power coefficient for rank [default: 1]
    #[arg(short, long, value_name = "COEFF")]
    power: Option<u32>,
    /// Number of choices [default: the number of students]
    #[arg(short, long, value_name = "N")]
    num_choices: Option<usize>,
    /// Print the assignment as JSON
    #[arg(long)]
    json: bool,
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

    let options = settings.assign.merge(cli.mult, cli.power, cli.num_choices);
    let verbose = cli.verbose || settings.assign.verbose;

    let prefs = load_preferences(&cli.input)
        .with_context(|| format!("cannot load {}", cli.input.display()))?;
    let num_choices = options.num_choices.unwrap_or(prefs.len());
    check_preferences(&prefs, num_choices)?;
    info!(students = prefs.len(), num_choices, "preferences accepted");

    let assignment = assign(&prefs, &options)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assignment)?);
    } else if verbose {
        print!("{}", assignment.render_verbose());
    } else {
        print!("{}", assignment.render());
    }
    Ok(())
}
