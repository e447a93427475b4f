//! CLI Adapter.

mod wrapper;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mvnw-gen")]
#[command(version)]
#[command(about = "Generate a self-bootstrapping Maven wrapper in a project", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write mvnw, mvnw.bat and maven/wrapper/ into the project
    #[clap(visible_alias = "w")]
    Wrapper(wrapper::WrapperArgs),
    /// List the launcher scripts embedded in this binary
    #[clap(visible_alias = "ls")]
    Launchers,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Wrapper(args) => wrapper::run_wrapper(args),
        Commands::Launchers => wrapper::run_list_launchers(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::default().default_filter_or(default_level);
    // A logger may already be installed when the CLI is driven in-process.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
