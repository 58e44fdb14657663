use clap::{Parser, Subcommand};
use ferrous_mdns_domain::CliOverrides;
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "ferrous-mdns")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous mDNS - DNS-SD response decoder and service instance assembler")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Largest datagram accepted or built, in bytes
    #[arg(long, value_name = "BYTES", global = true)]
    max_packet_size: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode one mDNS response datagram and print the service instances it describes
    Decode(DecodeArgs),
}

#[derive(clap::Args)]
struct DecodeArgs {
    /// Datagram as hex text; whitespace is ignored
    #[arg(long, conflicts_with = "file")]
    hex: Option<String>,

    /// Read the datagram from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Treat file or stdin input as raw bytes rather than hex text
    #[arg(long, conflicts_with = "hex")]
    binary: bool,

    /// Only keep instances of this service type, e.g. _googlecast._tcp.local
    #[arg(short = 's', long, conflicts_with = "any")]
    service_type: Option<String>,

    /// Keep instances of every service type, ignoring any configured filter
    #[arg(long)]
    any: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = commands::OutputFormat::Text)]
    format: commands::OutputFormat,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let Command::Decode(args) = &self.command;
        CliOverrides {
            service_type: args.service_type.clone(),
            accept_any_service: args.any,
            max_packet_size: self.max_packet_size,
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting Ferrous mDNS v{}", env!("CARGO_PKG_VERSION"));

    let Command::Decode(args) = cli.command;
    let input = commands::Input {
        hex: args.hex,
        file: args.file,
        binary: args.binary,
    };
    commands::decode::run(&config, &input, args.format)
}
