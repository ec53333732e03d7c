//! sioemit CLI
//!
//! Publishes one socket.io event to rooms through redis and exits.
//!
//! ```text
//! sioemit --config sioemit.yaml --nsp /chat --room lobby --volatile message '"hi"' '{"n":1}'
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use sioemit_core::error::Result;
use sioemit_core::protocol::{from_json, Arg};
use sioemit_emitter::{config, Emitter};

#[derive(Debug, Parser)]
#[command(name = "sioemit", about = "Broadcast a socket.io event over redis pub/sub")]
struct Cli {
    /// Config file (YAML).
    #[arg(long, default_value = "sioemit.yaml")]
    config: String,

    /// Target namespace.
    #[arg(long, default_value = "/")]
    nsp: String,

    /// Target room; repeat for several rooms.
    #[arg(long = "room")]
    rooms: Vec<String>,

    #[arg(long)]
    json: bool,

    #[arg(long)]
    volatile: bool,

    #[arg(long)]
    broadcast: bool,

    /// Event name.
    event: String,

    /// Event arguments. Each is parsed as JSON, falling back to a plain string.
    /// `hex:<digits>` sends a binary argument.
    args: Vec<String>,
}

fn parse_arg(raw: String) -> Arg {
    if let Some(bin) = raw.strip_prefix("hex:").and_then(|h| hex::decode(h).ok()) {
        return Arg::Binary(bin);
    }
    match serde_json::from_str(&raw) {
        Ok(v) => from_json(v),
        Err(_) => Arg::from(raw),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_from_file(&cli.config)?;
    let root = Emitter::connect(&cfg).await?;
    let emitter = root.of(&cli.nsp);

    let mut b = emitter.to_all(cli.rooms);
    if cli.json {
        b = b.json();
    }
    if cli.volatile {
        b = b.volatile();
    }
    if cli.broadcast {
        b = b.broadcast();
    }

    let args: Vec<Arg> = cli.args.into_iter().map(parse_arg).collect();
    let report = b.emit(cli.event, args).await?;
    tracing::info!(
        nsp = %emitter.namespace(),
        channels = report.channels.len(),
        bytes = report.payload.len(),
        "event emitted"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "sioemit failed");
            ExitCode::FAILURE
        }
    }
}
