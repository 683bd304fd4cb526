//! Configuration loading for domotz-mcp.
//!
//! Each setting resolves from the CLI flag first, then the environment,
//! then a default. A `.env` file in the working directory is honored
//! (loaded in `main` before parsing).
//!
//! | Setting   | Flag          | Env                   | Default                |
//! |-----------|---------------|-----------------------|------------------------|
//! | API key   | (none)        | `DOMOTZ_API_KEY`      | required               |
//! | Base URL  | `--base-url`  | `DOMOTZ_API_BASE_URL` | us-east-1 cell 1       |
//! | Transport | `--transport` | (none)                | `stdio`                |
//! | Listen    | `--listen`    | `PORT` (port only)    | `0.0.0.0:3000`         |

use clap::{Parser, ValueEnum};

/// Default Domotz public API cell.
pub const DEFAULT_BASE_URL: &str = "https://api-us-east-1-cell-1.domotz.com/public-api/v1";

const DEFAULT_LISTEN: &str = "0.0.0.0:3000";

/// CLI arguments parsed by `clap`.
#[derive(Parser)]
#[command(name = "domotz-mcp", about = "MCP server for the Domotz public API", version)]
pub struct Cli {
    /// Transport to serve: stdio (agent-launched) or sse (HTTP listener)
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Listen address for the sse transport (host:port)
    #[arg(long)]
    pub listen: Option<String>,

    /// Override the Domotz API base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    Stdio,
    Sse,
}

/// Validated configuration ready for use.
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub transport: Transport,
    pub listen: String,
}

/// Load and validate configuration from CLI args and environment.
pub fn load_config(cli: &Cli) -> Result<Config, String> {
    let api_key = std::env::var("DOMOTZ_API_KEY")
        .map_err(|_| "DOMOTZ_API_KEY environment variable is required".to_string())?;
    if api_key.is_empty() {
        return Err("DOMOTZ_API_KEY is empty".into());
    }

    let base_url = match &cli.base_url {
        Some(url) => url.clone(),
        None => std::env::var("DOMOTZ_API_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    };

    let listen = match &cli.listen {
        Some(listen) => listen.clone(),
        None => match std::env::var("PORT") {
            Ok(port) if !port.is_empty() => port
                .parse::<u16>()
                .map(|p| format!("0.0.0.0:{p}"))
                .map_err(|_| format!("PORT is not a valid port number: {port}"))?,
            _ => DEFAULT_LISTEN.to_string(),
        },
    };

    Ok(Config {
        api_key,
        base_url,
        transport: cli.transport,
        listen,
    })
}
