use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamOptions {
    pub config_path: Option<String>,
    pub steam_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Watch {
        steam: SteamOptions,
        interval_secs: Option<u64>,
        iterations: Option<u32>,
    },
    Status {
        steam: SteamOptions,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "steamwatch",
    version,
    author = "Nick Guletskii",
    about = "Report Steam download status and transfer rate from the client's local manifests and content log"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, ClapArgs)]
struct CliSteamOptions {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file (yaml, toml or json)"
    )]
    config: Option<String>,

    #[arg(
        short = 's',
        long = "steam-path",
        value_name = "DIR",
        help = "Steam installation directory (default: probe well-known locations)"
    )]
    steam_path: Option<String>,
}

impl From<CliSteamOptions> for SteamOptions {
    fn from(options: CliSteamOptions) -> Self {
        Self {
            config_path: options.config,
            steam_path: options.steam_path,
        }
    }
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Poll Steam's downloads periodically until done or interrupted
    Watch {
        #[command(flatten)]
        steam: CliSteamOptions,

        #[arg(
            short = 'i',
            long = "interval",
            value_name = "SECS",
            help = "Seconds to wait between polling cycles (default: 60)"
        )]
        interval: Option<u64>,

        #[arg(
            short = 'n',
            long = "iterations",
            value_name = "N",
            help = "Number of polling cycles, 0 to poll until interrupted (default: 5)"
        )]
        iterations: Option<u32>,
    },

    /// Print the current state of Steam's downloads once
    Status {
        #[command(flatten)]
        steam: CliSteamOptions,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = match cli.command {
        CliCommand::Watch {
            steam,
            interval,
            iterations,
        } => Command::Watch {
            steam: steam.into(),
            interval_secs: interval,
            iterations,
        },
        CliCommand::Status { steam } => Command::Status {
            steam: steam.into(),
        },
    };

    Args { command, log_level }
}
