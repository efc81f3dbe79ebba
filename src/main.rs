use anyhow::Result;
use clap::Parser;
use langsupport::commands::{self, DEFAULT_RULES_FILE, Options};
use langsupport::resolver::DEFAULT_JOBS;
use std::path::PathBuf;

/// langsupport - language support package resolver
///
/// Lists the spell checkers, input methods, fonts and translations worth
/// installing for a locale, based on the language support rules file.
///
/// Examples:
///   langsupport package libreoffice --locale zh_CN.UTF-8
///   langsupport locale              # uses LC_ALL / LC_MESSAGES / LANG
#[derive(Parser, Debug)]
#[command(author, version = env!("LANGSUPPORT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rules file (category:langcode:trigger:dependency per line)
    #[arg(
        long = "rules",
        short = 'r',
        env = "LANGSUPPORT_RULES",
        value_name = "PATH",
        default_value = DEFAULT_RULES_FILE,
        global = true
    )]
    pub rules: PathBuf,

    /// Answer package queries from a JSON snapshot instead of apt/dpkg
    #[arg(
        long = "snapshot",
        env = "LANGSUPPORT_SNAPSHOT",
        value_name = "PATH",
        global = true
    )]
    pub snapshot: Option<PathBuf>,

    /// Maximum number of concurrent package queries
    #[arg(long = "jobs", short = 'j', value_name = "N", default_value_t = DEFAULT_JOBS, global = true)]
    pub jobs: usize,

    /// Print results as a JSON array
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Language support packages for an installed package
    Package(PackageArgs),

    /// Language support packages for a locale, across all installed packages
    Locale(LocaleArgs),

    /// Show the parsed rules
    Rules,
}

#[derive(clap::Args, Debug)]
pub struct PackageArgs {
    /// The trigger package (e.g. libreoffice)
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// Locale such as zh_CN.UTF-8 (defaults to the environment's)
    #[arg(long, short = 'l')]
    pub locale: Option<String>,

    /// Also list packages that are already installed
    #[arg(long, short = 'a')]
    pub include_installed: bool,
}

#[derive(clap::Args, Debug)]
pub struct LocaleArgs {
    /// Locale such as zh_CN.UTF-8 (defaults to the environment's)
    #[arg(value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Also list packages that are already installed
    #[arg(long, short = 'a')]
    pub include_installed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = langsupport::runtime::RealRuntime;
    let options = Options {
        rules: cli.rules,
        snapshot: cli.snapshot,
        jobs: cli.jobs,
        json: cli.json,
    };

    match cli.command {
        Commands::Package(args) => {
            commands::package(
                runtime,
                &args.package,
                args.locale,
                args.include_installed,
                &options,
            )
            .await?
        }
        Commands::Locale(args) => {
            commands::locale(runtime, args.locale, args.include_installed, &options).await?
        }
        Commands::Rules => commands::rules(runtime, &options)?,
    }
    Ok(())
}
