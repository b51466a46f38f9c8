use clap::Parser;

/// Command-line arguments for esbnb
#[derive(Parser, Debug, Clone)]
#[command(name = "esbnb")]
#[command(about = "A CLI tool for installing ESLint with the Airbnb shareable configs")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Config flavor: omit for the React preset, "base" for ECMAScript
    /// 6+, "legacy" for ECMAScript 5 and below. Anything else shows
    /// the help screen.
    #[arg(value_name = "CONFIG", allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Preview operations without installing or modifying anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}
