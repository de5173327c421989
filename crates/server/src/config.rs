//! Server configuration.
//!
//! Every option can come from a flag or an environment variable; flags win.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use food_data::FoodTable;

pub const DEFAULT_PORT: u16 = 5000;

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info,server=debug,pipeline=debug";

#[derive(Debug, Clone, Parser)]
#[command(name = "nutri-recs-server")]
#[command(about = "HTTP service for rule-based nutrition recommendations", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "NUTRI_RECS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "NUTRI_RECS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Food table file to serve instead of the built-in table
    #[arg(long, env = "NUTRI_RECS_FOODS")]
    pub foods: Option<PathBuf>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn load_food_table(&self) -> Result<FoodTable> {
        load_food_table(self.foods.as_deref())
    }
}

/// Load the table at `path`, or the built-in table when no path is given
pub fn load_food_table(path: Option<&Path>) -> Result<FoodTable> {
    match path {
        Some(path) => FoodTable::load_from_file(path)
            .with_context(|| format!("Failed to load food table from {}", path.display())),
        None => {
            info!("Using built-in food table");
            Ok(FoodTable::builtin())
        }
    }
}
