use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use zonewire_domain::CliOverrides;

mod bootstrap;
mod di;
mod resolve;
mod server;

#[derive(Parser)]
#[command(name = "zonewire")]
#[command(version)]
#[command(about = "Stub DNS resolver and static zone nameserver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send one query over UDP and print the answers
    Resolve {
        /// Record type, A or AAAA
        #[arg(value_name = "TYPE")]
        record_type: String,

        /// Domain name to look up
        domain: String,

        /// DNS server to ask; one of the configured public servers if omitted
        server: Option<String>,
    },

    /// Answer queries for a zone file until interrupted
    Serve {
        /// Zone file to serve
        zone_file: PathBuf,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// UDP port
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (bind_address, server_port) = match &cli.command {
        Command::Serve { bind, port, .. } => (bind.clone(), *port),
        Command::Resolve { .. } => (None, None),
    };
    let cli_overrides = CliOverrides {
        server_port,
        bind_address,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    match cli.command {
        Command::Resolve {
            record_type,
            domain,
            server,
        } => resolve::run(&config, &record_type, &domain, server.as_deref()).await,
        Command::Serve { zone_file, .. } => {
            info!("Starting zonewire nameserver v{}", env!("CARGO_PKG_VERSION"));
            let handler = di::dns_server_handler(&zone_file)?;
            server::start_dns_server(&config.server, handler).await
        }
    }
}
