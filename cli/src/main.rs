mod commands;

use clap::{Parser, Subcommand};
use commands::{filters_command, pipe_command, version_command};
use skiff_client::{ClientConfig, DEFAULT_API_VERSION, DaemonHost};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skiff")]
#[command(about = "Skiff CLI - talk to a container daemon socket")]
struct Cli {
    /// Daemon socket (unix:///path or tcp://host:port)
    #[arg(
        long,
        global = true,
        env = "SKIFF_HOST",
        default_value = "unix:///var/run/docker.sock"
    )]
    host: DaemonHost,

    /// API version this client speaks
    #[arg(long, global = true, env = "SKIFF_API_VERSION", default_value = DEFAULT_API_VERSION)]
    api_version: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to the daemon socket and pipe stdin/stdout through it
    Pipe,
    /// Encode KEY=VALUE filters into the query parameter form
    Filters {
        #[arg(required = true)]
        filters: Vec<String>,
    },
    /// Print the client version record
    Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries session data, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(cli.host).with_api_version(&cli.api_version);

    match cli.command {
        Some(Commands::Pipe) => {
            pipe_command(&config).await?;
        }
        Some(Commands::Filters { filters }) => {
            filters_command(&filters)?;
        }
        Some(Commands::Version) => {
            version_command(&config)?;
        }
        None => {
            println!("Skiff CLI ready. Daemon address: {}", config.host);
            println!("Use --help for usage information.");
        }
    }

    Ok(())
}
